//! Ability policy for questions, answers and votes.
//!
//! Admins manage everything. Ordinary users read and create anything, and
//! update or delete only subjects they own.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use models::user::UserRole;
use models::{answer, question, user, vote};

use crate::errors::ServiceError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Wildcard: grants every other action.
    Manage,
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Manage => "manage",
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectKind {
    User,
    Question,
    Answer,
    Vote,
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Debug::fmt(self, f) }
}

/// Anything an ability rule can be checked against.
pub trait Subject {
    fn kind(&self) -> SubjectKind;
    /// User owning this subject, if ownership applies.
    fn owner_id(&self) -> Option<i32>;
}

impl Subject for vote::Model {
    fn kind(&self) -> SubjectKind { SubjectKind::Vote }
    fn owner_id(&self) -> Option<i32> { Some(self.user_id) }
}

impl Subject for question::Model {
    fn kind(&self) -> SubjectKind { SubjectKind::Question }
    fn owner_id(&self) -> Option<i32> { Some(self.user_id) }
}

impl Subject for answer::Model {
    fn kind(&self) -> SubjectKind { SubjectKind::Answer }
    fn owner_id(&self) -> Option<i32> { Some(self.user_id) }
}

impl Subject for user::Model {
    fn kind(&self) -> SubjectKind { SubjectKind::User }
    fn owner_id(&self) -> Option<i32> { Some(self.id) }
}

/// Authenticated caller as seen by the service layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i32,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn new(id: i32, role: UserRole) -> Self { Self { id, role } }

    pub fn from_model(u: &user::Model) -> Result<Self, ServiceError> {
        Ok(Self { id: u.id, role: u.role()? })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Condition {
    Always,
    OwnedBy(i32),
}

#[derive(Copy, Clone, Debug)]
struct Rule {
    action: Action,
    /// `None` matches every subject kind.
    kind: Option<SubjectKind>,
    condition: Condition,
}

impl Rule {
    fn matches(&self, action: Action, subject: &dyn Subject) -> bool {
        let action_ok = self.action == Action::Manage || self.action == action;
        let kind_ok = self.kind.map_or(true, |k| k == subject.kind());
        let condition_ok = match self.condition {
            Condition::Always => true,
            Condition::OwnedBy(uid) => subject.owner_id() == Some(uid),
        };
        action_ok && kind_ok && condition_ok
    }
}

/// Rules granted to one user.
#[derive(Clone, Debug, Default)]
pub struct Ability {
    rules: Vec<Rule>,
}

impl Ability {
    pub fn can(&self, action: Action, subject: &dyn Subject) -> bool {
        self.rules.iter().any(|r| r.matches(action, subject))
    }

    pub fn cannot(&self, action: Action, subject: &dyn Subject) -> bool { !self.can(action, subject) }
}

/// Authorization seam used by the vote workflow.
pub trait SubjectAuthorizer: Send + Sync {
    /// `Err(Forbidden)` when `user` may not perform `action` on `subject`.
    fn is_subject_forbidden(
        &self,
        user: &CurrentUser,
        action: Action,
        kind: SubjectKind,
        subject: &dyn Subject,
    ) -> Result<(), ServiceError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AbilityFactory;

impl AbilityFactory {
    pub fn create_for_user(&self, user: &CurrentUser) -> Ability {
        let rules = match user.role {
            UserRole::Admin => vec![Rule { action: Action::Manage, kind: None, condition: Condition::Always }],
            UserRole::User => vec![
                Rule { action: Action::Read, kind: None, condition: Condition::Always },
                Rule { action: Action::Create, kind: None, condition: Condition::Always },
                Rule { action: Action::Update, kind: None, condition: Condition::OwnedBy(user.id) },
                Rule { action: Action::Delete, kind: None, condition: Condition::OwnedBy(user.id) },
            ],
        };
        Ability { rules }
    }
}

impl SubjectAuthorizer for AbilityFactory {
    fn is_subject_forbidden(
        &self,
        user: &CurrentUser,
        action: Action,
        kind: SubjectKind,
        subject: &dyn Subject,
    ) -> Result<(), ServiceError> {
        let ability = self.create_for_user(user);
        if subject.kind() != kind || ability.cannot(action, subject) {
            warn!(user_id = user.id, role = %user.role, %action, %kind, "subject_forbidden");
            return Err(ServiceError::Forbidden(format!("cannot {} {}", action, kind)));
        }
        debug!(user_id = user.id, %action, %kind, "subject_allowed");
        Ok(())
    }
}

/// Test doubles for the authorization seam
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Delegates to [`AbilityFactory`] and counts how often it was consulted.
    #[derive(Default)]
    pub struct RecordingAuthorizer {
        inner: AbilityFactory,
        calls: AtomicUsize,
    }

    impl RecordingAuthorizer {
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
    }

    impl SubjectAuthorizer for RecordingAuthorizer {
        fn is_subject_forbidden(
            &self,
            user: &CurrentUser,
            action: Action,
            kind: SubjectKind,
            subject: &dyn Subject,
        ) -> Result<(), ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.is_subject_forbidden(user, action, kind, subject)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn vote_by(user_id: i32) -> vote::Model {
        vote::Model { id: 1, user_id, voteable_type: "QUESTION".into(), voteable_id: 10, created_at: Utc::now().into() }
    }

    #[test]
    fn admin_manages_everything() {
        let admin = CurrentUser::new(1, UserRole::Admin);
        let ability = AbilityFactory.create_for_user(&admin);
        for action in [Action::Create, Action::Read, Action::Update, Action::Delete] {
            assert!(ability.can(action, &vote_by(99)));
        }
    }

    #[test]
    fn user_changes_only_own_votes() {
        let user = CurrentUser::new(5, UserRole::User);
        let ability = AbilityFactory.create_for_user(&user);
        assert!(ability.can(Action::Read, &vote_by(6)));
        assert!(ability.can(Action::Update, &vote_by(5)));
        assert!(ability.can(Action::Delete, &vote_by(5)));
        assert!(ability.cannot(Action::Update, &vote_by(6)));
        assert!(ability.cannot(Action::Delete, &vote_by(6)));
        assert!(ability.cannot(Action::Manage, &vote_by(6)));
    }

    #[test]
    fn forbidden_check_returns_error() {
        let user = CurrentUser::new(5, UserRole::User);
        let err = AbilityFactory
            .is_subject_forbidden(&user, Action::Delete, SubjectKind::Vote, &vote_by(6))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(ref m) if m == "cannot delete Vote"));
        assert!(AbilityFactory.is_subject_forbidden(&user, Action::Delete, SubjectKind::Vote, &vote_by(5)).is_ok());
    }

    #[test]
    fn kind_mismatch_is_forbidden() {
        let admin = CurrentUser::new(1, UserRole::Admin);
        let res = AbilityFactory.is_subject_forbidden(&admin, Action::Update, SubjectKind::Question, &vote_by(1));
        assert!(matches!(res, Err(ServiceError::Forbidden(_))));
    }

    #[test]
    fn current_user_from_model() {
        let m = user::Model { id: 3, email: "a@b.c".into(), name: "A".into(), role: "ADMIN".into(), created_at: Utc::now().into() };
        assert_eq!(CurrentUser::from_model(&m).unwrap(), CurrentUser::new(3, UserRole::Admin));
        let bad = user::Model { role: "ROOT".into(), ..m };
        assert!(CurrentUser::from_model(&bad).is_err());
    }
}

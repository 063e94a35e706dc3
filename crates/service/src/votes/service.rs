use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use models::vote::VoteableType;

use super::domain::{CreateVoteInput, NewVote, UpdateVoteInput, Vote};
use super::repository::VoteRepository;
use super::voteable::VoteableService;
use crate::errors::ServiceError;
use crate::lookup::{AnswerLookup, QuestionLookup, UserLookup};
use crate::policy::{Action, CurrentUser, SubjectAuthorizer, SubjectKind};

/// Vote business service independent of web framework
pub struct VoteService<R: VoteRepository> {
    repo: Arc<R>,
    users: Arc<dyn UserLookup>,
    questions: Arc<dyn QuestionLookup>,
    answers: Arc<dyn AnswerLookup>,
    authz: Arc<dyn SubjectAuthorizer>,
}

impl<R: VoteRepository> VoteService<R> {
    pub fn new(
        repo: Arc<R>,
        users: Arc<dyn UserLookup>,
        questions: Arc<dyn QuestionLookup>,
        answers: Arc<dyn AnswerLookup>,
        authz: Arc<dyn SubjectAuthorizer>,
    ) -> Self {
        Self { repo, users, questions, answers, authz }
    }

    /// Insert a vote after checking that its user and target exist.
    ///
    /// Returns `Ok(None)` when the user or the target is missing. An unknown
    /// `voteable_type` is a `NotFound` error.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::user::UserRole;
    /// use service::lookup::mock::MockLookup;
    /// use service::policy::AbilityFactory;
    /// use service::votes::{domain::CreateVoteInput, repository::mock::MockVoteRepository, VoteService};
    /// let lookup = Arc::new(MockLookup::default());
    /// lookup.add_user(1, UserRole::User);
    /// lookup.add_question(7, 1);
    /// let svc = VoteService::new(Arc::new(MockVoteRepository::default()), lookup.clone(), lookup.clone(), lookup, Arc::new(AbilityFactory));
    /// let input = CreateVoteInput { user_id: 1, voteable_type: "QUESTION".into(), voteable_id: 7 };
    /// let vote = tokio_test::block_on(svc.create(input)).unwrap().unwrap();
    /// assert_eq!(vote.voteable_id, 7);
    /// ```
    #[instrument(skip(self, input), fields(user_id = input.user_id, voteable_type = %input.voteable_type, voteable_id = input.voteable_id))]
    pub async fn create(&self, input: CreateVoteInput) -> Result<Option<Vote>, ServiceError> {
        if self.users.find_user(input.user_id).await?.is_none() {
            // TODO: surface as NotFound("User") once callers stop relying on the empty result
            warn!("vote_create_skipped_unknown_user");
            return Ok(None);
        }

        let service = self.get_service_by_types(&input.voteable_type)?;
        if service.find_one(input.voteable_id).await?.is_none() {
            warn!("vote_create_skipped_unknown_target");
            return Ok(None);
        }

        let created = self
            .repo
            .create(NewVote { user_id: input.user_id, voteable_type: service.kind(), voteable_id: input.voteable_id })
            .await?;
        info!(vote_id = created.id, "vote_created");
        Ok(Some(created))
    }

    /// All votes, newest first.
    pub async fn find_all(&self) -> Result<Vec<Vote>, ServiceError> {
        let votes = self.repo.find_all().await?;
        debug!(count = votes.len(), "list votes");
        Ok(votes)
    }

    pub async fn find_one(&self, id: i32) -> Result<Vote, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Vote"))
    }

    #[instrument(skip(self, patch, current_user), fields(vote_id = id, user_id = current_user.id))]
    pub async fn update(&self, id: i32, patch: UpdateVoteInput, current_user: &CurrentUser) -> Result<Vote, ServiceError> {
        let vote_to_update = self.find_one(id).await?;
        self.authz.is_subject_forbidden(current_user, Action::Update, SubjectKind::Vote, &vote_to_update)?;

        let updated = self.repo.update(id, patch).await?;
        info!("vote_updated");
        Ok(updated)
    }

    #[instrument(skip(self, current_user), fields(vote_id = id, user_id = current_user.id))]
    pub async fn remove(&self, id: i32, current_user: &CurrentUser) -> Result<Vote, ServiceError> {
        let vote_to_delete = self.find_one(id).await?;
        self.authz.is_subject_forbidden(current_user, Action::Delete, SubjectKind::Vote, &vote_to_delete)?;

        let removed = self.repo.delete(id).await?;
        info!("vote_removed");
        Ok(removed)
    }

    /// Lookup service for a raw type tag; `NotFound("Type not found")` for unknown tags.
    pub fn get_service_by_types(&self, voteable_type: &str) -> Result<VoteableService<'_>, ServiceError> {
        let kind: VoteableType = voteable_type.parse().map_err(|_| ServiceError::not_found("Type"))?;
        Ok(self.service_for(kind))
    }

    pub fn service_for(&self, kind: VoteableType) -> VoteableService<'_> {
        match kind {
            VoteableType::Question => VoteableService::Questions(self.questions.as_ref()),
            VoteableType::Answer => VoteableService::Answers(self.answers.as_ref()),
        }
    }
}

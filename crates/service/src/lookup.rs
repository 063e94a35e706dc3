//! Existence lookups the vote workflow runs before inserting.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use models::{answer, question, user};

use crate::errors::ServiceError;

#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn find_user(&self, id: i32) -> Result<Option<user::Model>, ServiceError>;
}

#[async_trait]
pub trait QuestionLookup: Send + Sync {
    async fn find_question(&self, id: i32) -> Result<Option<question::Model>, ServiceError>;
}

#[async_trait]
pub trait AnswerLookup: Send + Sync {
    async fn find_answer(&self, id: i32) -> Result<Option<answer::Model>, ServiceError>;
}

/// SeaORM-backed lookups over the `user`, `question` and `answer` tables.
#[derive(Clone)]
pub struct SeaOrmLookup {
    pub db: DatabaseConnection,
}

#[async_trait]
impl UserLookup for SeaOrmLookup {
    async fn find_user(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        user::Entity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }
}

#[async_trait]
impl QuestionLookup for SeaOrmLookup {
    async fn find_question(&self, id: i32) -> Result<Option<question::Model>, ServiceError> {
        question::Entity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }
}

#[async_trait]
impl AnswerLookup for SeaOrmLookup {
    async fn find_answer(&self, id: i32) -> Result<Option<answer::Model>, ServiceError> {
        answer::Entity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }
}

/// Simple in-memory mock lookups for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use models::user::UserRole;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockLookup {
        users: Mutex<HashMap<i32, user::Model>>,
        questions: Mutex<HashMap<i32, question::Model>>,
        answers: Mutex<HashMap<i32, answer::Model>>,
    }

    impl MockLookup {
        pub fn add_user(&self, id: i32, role: UserRole) -> user::Model {
            let u = user::Model {
                id,
                email: format!("user{id}@example.com"),
                name: format!("User {id}"),
                role: role.as_str().to_string(),
                created_at: Utc::now().into(),
            };
            self.users.lock().unwrap().insert(id, u.clone());
            u
        }

        pub fn add_question(&self, id: i32, user_id: i32) -> question::Model {
            let q = question::Model {
                id,
                user_id,
                title: format!("Question {id}"),
                content: String::new(),
                created_at: Utc::now().into(),
            };
            self.questions.lock().unwrap().insert(id, q.clone());
            q
        }

        pub fn add_answer(&self, id: i32, user_id: i32, question_id: i32) -> answer::Model {
            let a = answer::Model {
                id,
                user_id,
                question_id,
                content: format!("Answer {id}"),
                created_at: Utc::now().into(),
            };
            self.answers.lock().unwrap().insert(id, a.clone());
            a
        }

        pub fn remove_question(&self, id: i32) { self.questions.lock().unwrap().remove(&id); }
    }

    #[async_trait]
    impl UserLookup for MockLookup {
        async fn find_user(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }
    }

    #[async_trait]
    impl QuestionLookup for MockLookup {
        async fn find_question(&self, id: i32) -> Result<Option<question::Model>, ServiceError> {
            Ok(self.questions.lock().unwrap().get(&id).cloned())
        }
    }

    #[async_trait]
    impl AnswerLookup for MockLookup {
        async fn find_answer(&self, id: i32) -> Result<Option<answer::Model>, ServiceError> {
            Ok(self.answers.lock().unwrap().get(&id).cloned())
        }
    }
}

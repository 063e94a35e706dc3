use async_trait::async_trait;

use super::domain::{NewVote, UpdateVoteInput, Vote};
use crate::errors::ServiceError;

/// Repository abstraction over the `vote` relation.
#[async_trait]
pub trait VoteRepository: Send + Sync {
    async fn create(&self, input: NewVote) -> Result<Vote, ServiceError>;
    /// Newest first.
    async fn find_all(&self) -> Result<Vec<Vote>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Vote>, ServiceError>;
    async fn update(&self, id: i32, patch: UpdateVoteInput) -> Result<Vote, ServiceError>;
    /// Returns the removed row.
    async fn delete(&self, id: i32) -> Result<Vote, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct State {
        next_id: i32,
        ticks: i64,
        rows: BTreeMap<i32, Vote>,
    }

    /// Assigns ids from 1 and strictly increasing `created_at` values.
    pub struct MockVoteRepository {
        epoch: DateTime<Utc>,
        state: Mutex<State>,
    }

    impl Default for MockVoteRepository {
        fn default() -> Self {
            Self { epoch: Utc::now(), state: Mutex::new(State { next_id: 1, ticks: 0, rows: BTreeMap::new() }) }
        }
    }

    impl MockVoteRepository {
        pub fn len(&self) -> usize { self.state.lock().unwrap().rows.len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    #[async_trait]
    impl VoteRepository for MockVoteRepository {
        async fn create(&self, input: NewVote) -> Result<Vote, ServiceError> {
            let mut st = self.state.lock().unwrap();
            st.ticks += 1;
            let vote = Vote {
                id: st.next_id,
                user_id: input.user_id,
                voteable_type: input.voteable_type.as_str().to_string(),
                voteable_id: input.voteable_id,
                created_at: (self.epoch + Duration::seconds(st.ticks)).into(),
            };
            st.next_id += 1;
            st.rows.insert(vote.id, vote.clone());
            Ok(vote)
        }

        async fn find_all(&self) -> Result<Vec<Vote>, ServiceError> {
            let st = self.state.lock().unwrap();
            let mut all: Vec<Vote> = st.rows.values().cloned().collect();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(all)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Vote>, ServiceError> {
            Ok(self.state.lock().unwrap().rows.get(&id).cloned())
        }

        async fn update(&self, id: i32, patch: UpdateVoteInput) -> Result<Vote, ServiceError> {
            let mut st = self.state.lock().unwrap();
            let row = st.rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("Vote"))?;
            if let Some(user_id) = patch.user_id { row.user_id = user_id; }
            if let Some(kind) = patch.voteable_type { row.voteable_type = kind.as_str().to_string(); }
            if let Some(voteable_id) = patch.voteable_id { row.voteable_id = voteable_id; }
            Ok(row.clone())
        }

        async fn delete(&self, id: i32) -> Result<Vote, ServiceError> {
            self.state.lock().unwrap().rows.remove(&id).ok_or_else(|| ServiceError::not_found("Vote"))
        }
    }
}

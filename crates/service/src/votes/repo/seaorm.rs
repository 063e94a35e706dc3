use std::sync::Arc;

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use models::vote;

use crate::errors::ServiceError;
use crate::lookup::SeaOrmLookup;
use crate::policy::AbilityFactory;
use crate::votes::domain::{NewVote, UpdateVoteInput, Vote};
use crate::votes::repository::VoteRepository;
use crate::votes::service::VoteService;

pub struct SeaOrmVoteRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmVoteRepository {
    async fn load(&self, id: i32) -> Result<Vote, ServiceError> {
        vote::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("Vote"))
    }
}

#[async_trait::async_trait]
impl VoteRepository for SeaOrmVoteRepository {
    async fn create(&self, input: NewVote) -> Result<Vote, ServiceError> {
        vote::create(&self.db, input.user_id, input.voteable_type, input.voteable_id)
            .await
            .map_err(ServiceError::from_model)
    }

    async fn find_all(&self) -> Result<Vec<Vote>, ServiceError> {
        vote::Entity::find()
            .order_by_desc(vote::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vote>, ServiceError> {
        vote::Entity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(&self, id: i32, patch: UpdateVoteInput) -> Result<Vote, ServiceError> {
        let found = self.load(id).await?;
        // nothing to write; an UPDATE without columns is invalid SQL
        if patch.is_empty() {
            debug!(vote_id = id, "empty vote patch");
            return Ok(found);
        }
        let mut am: vote::ActiveModel = found.into();
        if let Some(user_id) = patch.user_id { am.user_id = Set(user_id); }
        if let Some(kind) = patch.voteable_type { am.voteable_type = Set(kind.as_str().to_string()); }
        if let Some(voteable_id) = patch.voteable_id { am.voteable_id = Set(voteable_id); }
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, id: i32) -> Result<Vote, ServiceError> {
        let found = self.load(id).await?;
        vote::Entity::delete_by_id(id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found)
    }
}

/// Wire a [`VoteService`] entirely on top of one database connection.
pub fn seaorm_vote_service(db: DatabaseConnection) -> VoteService<SeaOrmVoteRepository> {
    let lookup = Arc::new(SeaOrmLookup { db: db.clone() });
    VoteService::new(
        Arc::new(SeaOrmVoteRepository { db }),
        lookup.clone(),
        lookup.clone(),
        lookup,
        Arc::new(AbilityFactory),
    )
}

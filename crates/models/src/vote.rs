use std::fmt;
use std::str::FromStr;

use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub voteable_type: String,
    pub voteable_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Kind of entity a vote points at. Stored as its upper-case tag in `vote.voteable_type`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteableType {
    Question,
    Answer,
}

impl VoteableType {
    pub const ALL: [VoteableType; 2] = [VoteableType::Question, VoteableType::Answer];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteableType::Question => "QUESTION",
            VoteableType::Answer => "ANSWER",
        }
    }
}

impl fmt::Display for VoteableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for VoteableType {
    type Err = errors::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUESTION" => Ok(VoteableType::Question),
            "ANSWER" => Ok(VoteableType::Answer),
            other => Err(errors::ModelError::Validation(format!("unknown voteable type: {other}"))),
        }
    }
}

impl Model {
    /// Parsed `voteable_type`; fails only if the row was written outside this crate.
    pub fn voteable_kind(&self) -> Result<VoteableType, errors::ModelError> { self.voteable_type.parse() }
}

pub async fn create(db: &DatabaseConnection, user_id: i32, voteable_type: VoteableType, voteable_id: i32) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        user_id: Set(user_id),
        voteable_type: Set(voteable_type.as_str().to_string()),
        voteable_id: Set(voteable_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

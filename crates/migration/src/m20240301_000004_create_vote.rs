//! Create `vote` table with FK to `user`.
//!
//! `voteable_id` points at a question or an answer depending on
//! `voteable_type`, so it carries no FK constraint.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(integer(Vote::Id).primary_key().auto_increment())
                    .col(integer(Vote::UserId).not_null())
                    .col(string_len(Vote::VoteableType, 16).not_null())
                    .col(integer(Vote::VoteableId).not_null())
                    .col(timestamp_with_time_zone(Vote::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_user")
                            .from(Vote::Table, Vote::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vote::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vote { Table, Id, UserId, VoteableType, VoteableId, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

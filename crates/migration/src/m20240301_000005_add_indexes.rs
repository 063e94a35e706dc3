use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Vote: listing is ordered by created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_created_at")
                    .table(Vote::Table)
                    .col(Vote::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Vote: lookups by target; not unique, duplicate votes are allowed
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_voteable")
                    .table(Vote::Table)
                    .col(Vote::VoteableType)
                    .col(Vote::VoteableId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vote_user")
                    .table(Vote::Table)
                    .col(Vote::UserId)
                    .to_owned(),
            )
            .await?;

        // Answer: index on question_id
        manager
            .create_index(
                Index::create()
                    .name("idx_answer_question")
                    .table(Answer::Table)
                    .col(Answer::QuestionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_vote_created_at").table(Vote::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_vote_voteable").table(Vote::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_vote_user").table(Vote::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_answer_question").table(Answer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vote { Table, UserId, VoteableType, VoteableId, CreatedAt }

#[derive(DeriveIden)]
enum Answer { Table, QuestionId }

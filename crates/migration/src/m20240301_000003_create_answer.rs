//! Create `answer` table with FKs to `user` and `question`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Answer::Table)
                    .if_not_exists()
                    .col(integer(Answer::Id).primary_key().auto_increment())
                    .col(integer(Answer::UserId).not_null())
                    .col(integer(Answer::QuestionId).not_null())
                    .col(text(Answer::Content).not_null())
                    .col(timestamp_with_time_zone(Answer::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_user")
                            .from(Answer::Table, Answer::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_question")
                            .from(Answer::Table, Answer::QuestionId)
                            .to(Question::Table, Question::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Answer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Answer { Table, Id, UserId, QuestionId, Content, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Question { Table, Id }

//! Create `question` table with FK to `user`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(integer(Question::Id).primary_key().auto_increment())
                    .col(integer(Question::UserId).not_null())
                    .col(string_len(Question::Title, 255).not_null())
                    .col(text(Question::Content).not_null())
                    .col(timestamp_with_time_zone(Question::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_user")
                            .from(Question::Table, Question::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Question::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Question { Table, Id, UserId, Title, Content, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Keyword::Table)
                    .if_not_exists()
                    .col(pk_auto(Keyword::Id))
                    .col(integer(Keyword::UserId))
                    .col(string(Keyword::Keyword))
                    .col(
                        timestamp_with_time_zone(Keyword::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_keyword_user_id")
                            .from(Keyword::Table, Keyword::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Keyword::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Keyword {
    Table,
    Id,
    UserId,
    Keyword,
    CreatedAt,
}

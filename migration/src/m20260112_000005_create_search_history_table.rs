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
                    .table(SearchHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(SearchHistory::Id))
                    .col(integer(SearchHistory::UserId))
                    .col(string(SearchHistory::Keyword))
                    .col(string(SearchHistory::Sentiment))
                    .col(integer(SearchHistory::Volume))
                    .col(string(SearchHistory::TopSubreddit))
                    .col(
                        timestamp_with_time_zone(SearchHistory::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_search_history_user_id")
                            .from(SearchHistory::Table, SearchHistory::UserId)
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
            .drop_table(Table::drop().table(SearchHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SearchHistory {
    Table,
    Id,
    UserId,
    Keyword,
    Sentiment,
    Volume,
    TopSubreddit,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailOtp::Table)
                    .if_not_exists()
                    .col(pk_auto(EmailOtp::Id))
                    .col(string(EmailOtp::Email))
                    .col(string_len(EmailOtp::Code, 6))
                    .col(timestamp_with_time_zone(EmailOtp::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(EmailOtp::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups are always by email, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_email_otp_email")
                    .table(EmailOtp::Table)
                    .col(EmailOtp::Email)
                    .col(EmailOtp::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_email_otp_email")
                    .table(EmailOtp::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmailOtp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmailOtp {
    Table,
    Id,
    Email,
    Code,
    ExpiresAt,
    CreatedAt,
}

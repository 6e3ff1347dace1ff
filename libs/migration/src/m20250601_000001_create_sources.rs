use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sources::Table)
                    .if_not_exists()
                    .col(pk_uuid(Sources::Id))
                    .col(string(Sources::Name))
                    .col(text_null(Sources::Url))
                    .col(text_null(Sources::ScraperType))
                    .col(json_binary(Sources::ScraperConfig).default("{}"))
                    .col(json_binary(Sources::CountryFilter).default("[]"))
                    .col(boolean(Sources::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Sources::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The sources listing is ordered by name
        manager
            .create_index(
                Index::create()
                    .name("idx_sources_name")
                    .table(Sources::Table)
                    .col(Sources::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sources::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Sources {
    Table,
    Id,
    Name,
    Url,
    ScraperType,
    ScraperConfig,
    CountryFilter,
    IsActive,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_uuid(Events::Id))
                    .col(string(Events::Name))
                    .col(text_null(Events::Description))
                    .col(timestamp_with_time_zone(Events::EventDate))
                    .col(timestamp_with_time_zone_null(Events::EventEndDate))
                    .col(string(Events::Location))
                    .col(string_null(Events::Venue))
                    .col(string(Events::City))
                    .col(string(Events::Country))
                    .col(double_null(Events::Latitude))
                    .col(double_null(Events::Longitude))
                    .col(string_null(Events::RegistrationUrl))
                    .col(string_null(Events::Price))
                    .col(string_null(Events::Organizer))
                    .col(string_null(Events::EventType))
                    .col(string_null(Events::TrackName))
                    .col(string_null(Events::ExternalId))
                    .col(boolean(Events::IsActive).default(true))
                    .col(uuid_null(Events::SourceId))
                    .col(
                        timestamp_with_time_zone(Events::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_source_id")
                            .from(Events::Table, Events::SourceId)
                            .to(Sources::Table, Sources::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes for the public listing filters and both sort orders
        manager
            .create_index(
                Index::create()
                    .name("idx_events_event_date")
                    .table(Events::Table)
                    .col(Events::EventDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_country")
                    .table(Events::Table)
                    .col(Events::Country)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_city")
                    .table(Events::Table)
                    .col(Events::City)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_is_active")
                    .table(Events::Table)
                    .col(Events::IsActive)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_source_id")
                    .table(Events::Table)
                    .col(Events::SourceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_created_at")
                    .table(Events::Table)
                    .col(Events::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Scrapers deduplicate rows by the id on the source site
        manager
            .create_index(
                Index::create()
                    .name("idx_events_external_id")
                    .table(Events::Table)
                    .col(Events::ExternalId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Name,
    Description,
    EventDate,
    EventEndDate,
    Location,
    Venue,
    City,
    Country,
    Latitude,
    Longitude,
    RegistrationUrl,
    Price,
    Organizer,
    EventType,
    TrackName,
    ExternalId,
    IsActive,
    SourceId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Sources {
    Table,
    Id,
}

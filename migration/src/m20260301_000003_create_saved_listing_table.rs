use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_listing_table::Listing,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SavedListing::Table)
                    .if_not_exists()
                    .col(integer(SavedListing::UserId))
                    .col(integer(SavedListing::ListingId))
                    .col(
                        timestamp(SavedListing::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SavedListing::UserId)
                            .col(SavedListing::ListingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_saved_listing_user_id")
                            .from(SavedListing::Table, SavedListing::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_saved_listing_listing_id")
                            .from(SavedListing::Table, SavedListing::ListingId)
                            .to(Listing::Table, Listing::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SavedListing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SavedListing {
    Table,
    UserId,
    ListingId,
    CreatedAt,
}

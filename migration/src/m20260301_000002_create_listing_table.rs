use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(pk_auto(Listing::Id))
                    .col(string(Listing::Name))
                    .col(string(Listing::SearchName))
                    .col(text(Listing::Description))
                    .col(string(Listing::Address))
                    .col(big_integer(Listing::RegularPrice))
                    .col(big_integer(Listing::DiscountPrice).default(0))
                    .col(integer(Listing::Bathrooms))
                    .col(integer(Listing::Bedrooms))
                    .col(boolean(Listing::Furnished).default(false))
                    .col(boolean(Listing::Parking).default(false))
                    .col(boolean(Listing::Offer).default(false))
                    .col(string(Listing::ListingType))
                    .col(string(Listing::Status).default("available"))
                    .col(boolean(Listing::Featured).default(false))
                    .col(text(Listing::ImageUrls))
                    .col(integer(Listing::OwnerId))
                    .col(
                        timestamp(Listing::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Listing::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_owner_id")
                            .from(Listing::Table, Listing::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_listing_created_at")
                    .table(Listing::Table)
                    .col(Listing::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Listing {
    Table,
    Id,
    Name,
    SearchName,
    Description,
    Address,
    RegularPrice,
    DiscountPrice,
    Bathrooms,
    Bedrooms,
    Furnished,
    Parking,
    Offer,
    ListingType,
    Status,
    Featured,
    ImageUrls,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}

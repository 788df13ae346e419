use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ListingType {
    #[sea_orm(string_value = "rent")]
    Rent,
    #[sea_orm(string_value = "sale")]
    Sale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ListingStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "sold")]
    Sold,
    #[sea_orm(string_value = "rented")]
    Rented,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Unicode-lowercased `name`, matched by the search term.
    pub search_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub address: String,
    pub regular_price: i64,
    pub discount_price: i64,
    pub bathrooms: i32,
    pub bedrooms: i32,
    pub furnished: bool,
    pub parking: bool,
    pub offer: bool,
    pub listing_type: ListingType,
    pub status: ListingStatus,
    pub featured: bool,
    /// JSON array of image URLs in display order.
    #[sea_orm(column_type = "Text")]
    pub image_urls: String,
    pub owner_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::saved_listing::Entity")]
    SavedListing,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::saved_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavedListing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Folds a listing name or search term into the form stored in `search_name`.
pub fn search_key(text: &str) -> String {
    text.trim().to_lowercase()
}

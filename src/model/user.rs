use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Seller,
    Admin,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SellerStatusDto {
    None,
    Pending,
    Verified,
    Rejected,
}

/// Account as seen by its owner (and by admins).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub role: UserRole,
    pub seller_status: SellerStatusDto,
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Owners and admins may edit or delete a listing.
    pub fn can_manage(&self, owner_id: i32) -> bool {
        self.is_admin() || self.id == owner_id
    }

    /// Verified sellers and admins may publish listings.
    pub fn can_publish(&self) -> bool {
        self.is_admin()
            || (self.role == UserRole::Seller && self.seller_status == SellerStatusDto::Verified)
    }
}

/// Public contact details shown on a listing page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserContactDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub avatar: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SignUpDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateUserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SavedToggleDto {
    pub saved: bool,
}

/// Admin decision on a pending seller request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SellerReviewDto {
    pub approve: bool,
}

//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::{Role, SellerStatus};

use crate::model::user::{SellerStatusDto, UserContactDto, UserDto, UserRole};

/// Application user with credentials and role information.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Bcrypt hash, never serialized to clients.
    pub password_hash: String,
    pub avatar: String,
    pub role: Role,
    pub seller_status: SellerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether the user may publish listings.
    pub fn is_verified_seller(&self) -> bool {
        self.role == Role::Seller && self.seller_status == SellerStatus::Verified
    }

    /// Whether the user may modify a resource owned by `owner_id`.
    ///
    /// Admins may modify any listing; everyone else only their own.
    pub fn can_manage(&self, owner_id: i32) -> bool {
        self.id == owner_id || self.is_admin()
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            avatar: self.avatar,
            role: self.role.into(),
            seller_status: self.seller_status.into(),
            created_at: self.created_at,
        }
    }

    pub fn into_contact_dto(self) -> UserContactDto {
        UserContactDto {
            id: self.id,
            username: self.username,
            email: self.email,
            avatar: self.avatar,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            avatar: entity.avatar,
            role: entity.role,
            seller_status: entity.seller_status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => UserRole::User,
            Role::Seller => UserRole::Seller,
            Role::Admin => UserRole::Admin,
        }
    }
}

impl From<SellerStatus> for SellerStatusDto {
    fn from(status: SellerStatus) -> Self {
        match status {
            SellerStatus::None => SellerStatusDto::None,
            SellerStatus::Pending => SellerStatusDto::Pending,
            SellerStatus::Verified => SellerStatusDto::Verified,
            SellerStatus::Rejected => SellerStatusDto::Rejected,
        }
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
}

/// Partial account update; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    /// Already hashed.
    pub password_hash: Option<String>,
    pub avatar: Option<String>,
}

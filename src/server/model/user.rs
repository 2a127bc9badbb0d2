//! User domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::auth::{LoginUserDto, UserDto};

/// Registered user, including the stored bcrypt hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// bcrypt hash of the password. Never serialized.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            created_at: self.created_at,
        }
    }

    /// Builds the login response payload for this user.
    pub fn into_login_dto(self, access_token: String) -> LoginUserDto {
        LoginUserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            access_token,
        }
    }
}

/// Parameters for inserting a new user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// A successful login: the user and their freshly issued access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub access_token: String,
}

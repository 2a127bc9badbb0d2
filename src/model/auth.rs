use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterDto {
    #[schema(example = "user@example.com")]
    #[validate(
        email(message = "email must be an email"),
        length(max = 255, message = "email must be shorter than or equal to 255 characters")
    )]
    pub email: String,
    #[schema(example = "John Doe")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "name must be between 1 and 255 characters"
    ))]
    pub name: String,
    #[schema(example = "secret123")]
    #[validate(length(
        min = 6,
        message = "password must be longer than or equal to 6 characters"
    ))]
    pub password: String,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoginDto {
    #[schema(example = "user@example.com")]
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    #[schema(example = "secret123")]
    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
}

/// Public view of a user; the password hash never leaves the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// User fields returned on login together with the signed access token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LoginUserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub access_token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LoginResponseDto {
    pub user: LoginUserDto,
}

//! Registration, login and user listing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{AuthenticatedUser, CreateUserParams, User},
    service::{map_constraint_violation, token::TokenService},
};

const EMAIL_TAKEN: &str = "Email already registered";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, bcrypt_cost: u32) -> Self {
        Self {
            db,
            tokens,
            bcrypt_cost,
        }
    }

    /// Registers a new user with a bcrypt-hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(
        &self,
        email: String,
        name: String,
        password: String,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
        }

        let cost = self.bcrypt_cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;

        let user = repo
            .create(CreateUserParams {
                email,
                name,
                password_hash,
            })
            .await
            .map_err(|e| map_constraint_violation(e, || EMAIL_TAKEN.to_string()))?;

        tracing::info!(user_id = %user.id, "Registered user");

        Ok(user)
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - The user and a signed token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: String) -> Result<AuthenticatedUser, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("Password check task failed: {}", e)))??;

        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.tokens.issue(user.id, &user.email)?;

        Ok(AuthenticatedUser { user, access_token })
    }

    /// Lists every user, newest first.
    pub async fn get_users(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}

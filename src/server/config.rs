//! Environment-driven configuration shared by every service binary.

use chrono::{Duration, Utc};
use url::Url;

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_JWT_EXPIRES_IN: &str = "1d";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_BCRYPT_COST: u32 = 10;

/// The deployable services built from this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Auth,
    Shop,
    Product,
    Order,
}

impl ServiceKind {
    /// Binary and env-directory name of the service.
    pub fn name(self) -> &'static str {
        match self {
            Self::Auth => "auth-api",
            Self::Shop => "shop-api",
            Self::Product => "product-api",
            Self::Order => "order-api",
        }
    }

    /// Title used for the service's OpenAPI document.
    pub fn title(self) -> &'static str {
        match self {
            Self::Auth => "Auth API",
            Self::Shop => "Shop API",
            Self::Product => "Product API",
            Self::Order => "Order API",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "APP_ENV".to_string(),
                value: value.to_string(),
                reason: "expected 'development' or 'production'".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub port: u16,
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expires_in: Duration,

    pub cors_origin: String,
    pub bcrypt_cost: u32,
    pub run_migrations: bool,
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let environment = match get("APP_ENV") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::Development,
        };

        let port = match get("PORT") {
            Some(value) => parse_number("PORT", &value)?,
            None => DEFAULT_PORT,
        };

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => {
                let db_port = match get("DB_PORT") {
                    Some(value) => parse_number("DB_PORT", &value)?,
                    None => DEFAULT_DB_PORT,
                };

                build_database_url(
                    &require("DB_HOST")?,
                    db_port,
                    &require("DB_USER")?,
                    get("DB_PASS").as_deref(),
                    &require("DB_NAME")?,
                )?
            }
        };

        let jwt_expires_in = parse_expires_in(
            &get("JWT_EXPIRES_IN").unwrap_or_else(|| DEFAULT_JWT_EXPIRES_IN.to_string()),
        )?;

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(value) => parse_number("BCRYPT_COST", &value)?,
            None => DEFAULT_BCRYPT_COST,
        };

        let run_migrations = match get("RUN_MIGRATIONS") {
            Some(value) => parse_bool("RUN_MIGRATIONS", &value)?,
            None => true,
        };

        Ok(Self {
            environment,
            port,
            database_url,
            jwt_secret: require("JWT_SECRET")?,
            jwt_expires_in,
            cors_origin: get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            bcrypt_cost,
            run_migrations,
        })
    }
}

/// Builds a PostgreSQL connection URL, percent-encoding the credentials.
fn build_database_url(
    host: &str,
    port: u16,
    user: &str,
    password: Option<&str>,
    database: &str,
) -> Result<String, ConfigError> {
    let invalid = |name: &str, value: &str| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: "cannot be used in a database URL".to_string(),
    };

    let mut url = Url::parse(&format!("postgres://{}", host)).map_err(|_| invalid("DB_HOST", host))?;
    url.set_port(Some(port)).map_err(|_| invalid("DB_PORT", &port.to_string()))?;
    url.set_username(user).map_err(|_| invalid("DB_USER", user))?;
    url.set_password(password).map_err(|_| invalid("DB_PASS", "<redacted>"))?;
    url.set_path(database);

    Ok(url.to_string())
}

/// Parses a token lifetime such as `3600`, `30s`, `15m`, `12h` or `1d`.
fn parse_expires_in(value: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidEnvVar {
        name: "JWT_EXPIRES_IN".to_string(),
        value: value.to_string(),
        reason: "expected seconds or a number followed by s, m, h or d".to_string(),
    };

    let trimmed = value.trim();
    let (digits, unit) = match trimmed.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&trimmed[..idx], Some(c)),
        _ => (trimmed, None),
    };

    let amount: i64 = digits.parse().map_err(|_| invalid())?;
    if amount <= 0 {
        return Err(invalid());
    }

    let lifetime = match unit {
        None | Some('s') => Duration::try_seconds(amount),
        Some('m') => Duration::try_minutes(amount),
        Some('h') => Duration::try_hours(amount),
        Some('d') => Duration::try_days(amount),
        Some(_) => None,
    }
    .ok_or_else(invalid)?;

    // Tokens issued now must carry a representable expiry.
    if Utc::now().checked_add_signed(lifetime).is_none() {
        return Err(ConfigError::InvalidEnvVar {
            name: "JWT_EXPIRES_IN".to_string(),
            value: value.to_string(),
            reason: "lifetime is too long".to_string(),
        });
    }

    Ok(lifetime)
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: "expected a non-negative integer".to_string(),
    })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

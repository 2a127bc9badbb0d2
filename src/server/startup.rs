//! Process bootstrap shared by the service binaries.

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::{Config, ServiceKind},
    error::{config::ConfigError, AppError},
    router,
    service::token::TokenService,
    state::AppState,
};

/// Loads `envs/<service>/<APP_ENV>.env`, then `.env`.
///
/// Variables already set in the process environment win over both files, and the
/// per-service file wins over `.env`. Missing files are not an error.
pub fn load_env(service: ServiceKind) {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
    let service_file = format!("envs/{}/{}.env", service.name(), app_env);

    dotenvy::from_filename(&service_file).ok();
    dotenvy::dotenv().ok();
}

/// Installs the global tracing subscriber, filtered by `RUST_LOG` when set.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("storehub=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Postgres database and, when enabled, runs pending migrations.
///
/// SQL statement logging is turned on in development only.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(config.environment.is_development());

    let db = Database::connect(opt).await?;

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(db)
}

/// Builds the CORS layer allowing the configured origin with credentials.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer for the configured origin
/// - `Err(ConfigError::InvalidEnvVar)` - `CORS_ORIGIN` is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(&config.cors_origin).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: config.cors_origin.clone(),
            reason: e.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true))
}

/// Runs one service until Ctrl+C or SIGTERM.
pub async fn run(service: ServiceKind) -> Result<(), AppError> {
    load_env(service);
    init_tracing();

    let config = Config::from_env()?;

    let db = connect_to_database(&config).await?;
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_expires_in);
    let state = AppState::new(db, tokens, config.bcrypt_cost);

    let app = router::router(service, config.environment)
        .with_state(state)
        .layer(cors_layer(&config)?);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        service = service.name(),
        port = config.port,
        "Listening on {}",
        listener.local_addr()?
    );
    if config.environment.is_development() {
        tracing::info!(
            "API docs available at http://localhost:{}/api-docs",
            config.port
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(service = service.name(), "Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// A failure to install a handler is logged and that signal is ignored.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

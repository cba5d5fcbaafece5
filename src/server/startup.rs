use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the server
/// accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database");

    Ok(db)
}

/// Builds the CORS layer from the configured origin.
///
/// Without `CORS_ORIGIN` any origin is allowed.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = match &config.cors_origin {
        Some(origin) => AllowOrigin::exact(origin.parse().map_err(|_| {
            ConfigError::InvalidEnvVar {
                name: "CORS_ORIGIN".to_string(),
                value: origin.clone(),
                reason: "not a valid header value".to_string(),
            }
        })?),
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::employee::EmployeeRepository, error::AppError,
    service::auth::AuthService,
};

/// Interval between purges of expired sessions.
const EXPIRED_SESSION_PURGE_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
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
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Migrates the session table, starts a background task purging expired sessions,
/// and configures sessions to expire after the configured inactivity period.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let deletion_store = session_store.clone();
    tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(EXPIRED_SESSION_PURGE_INTERVAL)
            .await
        {
            tracing::error!("Expired session purge stopped: {}", e);
        }
    });

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            config.session_inactivity_minutes,
        )));

    Ok(session)
}

/// Seeds the first admin account when the employee table is empty.
///
/// Does nothing when employees already exist. Without configured admin credentials an
/// empty table only produces a warning, since nobody will be able to log in.
pub async fn seed_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(admin) = &config.admin else {
        if EmployeeRepository::new(db).count().await? == 0 {
            tracing::warn!(
                "No employees exist and ADMIN_USERNAME/ADMIN_PASSWORD are not set, nobody can log in"
            );
        }
        return Ok(());
    };

    AuthService::new(db)
        .seed_admin(&admin.username, &admin.password)
        .await?;

    Ok(())
}

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::{Clock, DateOverrideRepository, PreferencesRepository};
use crate::domain::services::availability_service::AvailabilityService;
use crate::infra::clock::SystemClock;
use crate::infra::repositories::{
    postgres_preferences_repo::PostgresPreferencesRepo, postgres_date_override_repo::PostgresDateOverrideRepo,
    sqlite_preferences_repo::SqlitePreferencesRepo, sqlite_date_override_repo::SqliteDateOverrideRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.business_timezone));

    let (preferences_repo, override_repo): (Arc<dyn PreferencesRepository>, Arc<dyn DateOverrideRepository>) =
        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            info!("Initializing PostgreSQL connection...");

            let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
            opts = opts.log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect_with(opts)
                .await
                .expect("Failed to connect to Postgres");

            run_postgres_migrations(&pool).await;

            let preferences_repo: Arc<dyn PreferencesRepository> = Arc::new(PostgresPreferencesRepo::new(pool.clone()));
            let override_repo: Arc<dyn DateOverrideRepository> = Arc::new(PostgresDateOverrideRepo::new(pool));
            (preferences_repo, override_repo)
        } else {
            info!("Initializing SQLite connection with WAL Mode...");

            let opts = SqliteConnectOptions::from_str(database_url)
                .expect("Invalid SQLite connection string")
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5))
                .log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

            let pool = SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(opts)
                .await
                .expect("Failed to connect to SQLite");

            run_sqlite_migrations(&pool).await;

            let preferences_repo: Arc<dyn PreferencesRepository> = Arc::new(SqlitePreferencesRepo::new(pool.clone()));
            let override_repo: Arc<dyn DateOverrideRepository> = Arc::new(SqliteDateOverrideRepo::new(pool));
            (preferences_repo, override_repo)
        };

    let availability = Arc::new(AvailabilityService::new(preferences_repo, override_repo, clock));
    availability.seed_defaults().await.expect("Failed to seed default preferences");

    AppState {
        config: config.clone(),
        availability,
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}

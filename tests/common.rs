use class_booking_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::ports::Clock,
    domain::services::availability_service::AvailabilityService,
    infra::repositories::{
        sqlite_preferences_repo::SqlitePreferencesRepo,
        sqlite_date_override_repo::SqliteDateOverrideRepo,
    },
};
use chrono::NaiveDate;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
    Router,
};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::Value;

pub const ADMIN_TOKEN: &str = "test-admin-token";

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    /// App whose "today" is 2025-06-01.
    pub async fn new() -> Self {
        Self::with_today(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).await
    }

    pub async fn with_today(today: NaiveDate) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_token: ADMIN_TOKEN.to_string(),
            business_timezone: chrono_tz::UTC,
            public_lead_days: 2,
            admin_lead_days: 0,
        };

        let availability = Arc::new(AvailabilityService::new(
            Arc::new(SqlitePreferencesRepo::new(pool.clone())),
            Arc::new(SqliteDateOverrideRepo::new(pool.clone())),
            Arc::new(FixedClock(today)),
        ));

        let state = Arc::new(AppState {
            config,
            availability,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri)
                .body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn post(&self, uri: &str, payload: Value) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("POST").uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string())).unwrap()
        ).await.unwrap()
    }

    pub async fn admin(&self, method: &str, uri: &str, payload: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN));

        let request = match payload {
            Some(p) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(p.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

use hotel_booking::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_room_repo::SqliteRoomRepo,
        sqlite_schema_repo::SqliteSchemaRepo,
        sqlite_connection_check::SqliteConnectionCheck,
    },
    domain::models::{booking::{Booking, BookingMode}, room::default_seed_rooms},
    domain::services::schema::initialize_schema,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_mode(BookingMode::UniqueCode).await
    }

    pub async fn with_mode(booking_mode: BookingMode) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        // One connection, as in production: every request shares it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            booking_mode,
            public_dir: "public".into(),
            db_max_connections: 1,
            monitor_interval: Duration::from_secs(60),
            room_seed: default_seed_rooms(),
        };

        let schema_repo = Arc::new(SqliteSchemaRepo::new(pool.clone()));
        initialize_schema(schema_repo.as_ref(), &config.room_seed)
            .await
            .expect("Failed to initialize test schema");

        let state = Arc::new(AppState {
            config,
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            room_repo: Arc::new(SqliteRoomRepo::new(pool.clone())),
            schema_repo,
            connection_check: Arc::new(SqliteConnectionCheck::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn post_booking(&self, fields: &[(&str, &str)]) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/book")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body(fields)))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn booking_count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await
            .unwrap();
        count
    }

    pub async fn find_booking_by_code(&self, code: &str) -> Option<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE unique_code = ?")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .unwrap()
    }

    pub async fn post_raw(&self, content_type: Option<&str>, body: &str) -> Response {
        let mut builder = Request::builder().method("POST").uri("/book");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        self.router.clone().oneshot(builder.body(Body::from(body.to_string())).unwrap()).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

/// A complete, valid submission for the seeded "Double Room".
#[allow(dead_code)]
pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("phone_number", "555-0100"),
        ("check_in_date", "2026-11-02"),
        ("check_out_date", "2026-11-05"),
        ("guests", "2"),
        ("room_type", "Double Room"),
    ]
}

#[allow(dead_code)]
pub fn with_field<'a>(fields: &[(&'a str, &'a str)], key: &'a str, value: &'a str) -> Vec<(&'a str, &'a str)> {
    fields.iter().map(|&(k, v)| if k == key { (k, value) } else { (k, v) }).collect()
}

/// Minimal x-www-form-urlencoded encoding for test values.
pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => (b as char).to_string(),
            b' ' => "+".to_string(),
            other => format!("%{:02X}", other),
        })
        .collect()
}

#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

mod config;
mod database;
mod databases;
mod err;

use config::Config;
use database::{Database, User, UsersPayload};
use databases::PostgresDatabase;
use err::ServerError;

#[tokio::main]
async fn main() {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let db = PostgresDatabase::new(&config.database_url);

    // build our application with a route
    let app = Router::new()
        // `GET /` probes database connectivity
        .route("/", get(db_probe::<PostgresDatabase>))
        // `GET /users` lists all users, `POST /users` upserts one or many
        .route(
            "/users",
            get(get_users::<PostgresDatabase>).post(post_users::<PostgresDatabase>),
        )
        .with_state(db)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Micros),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR)
                        .latency_unit(LatencyUnit::Micros),
                ),
        );

    tracing::info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Opens a connection to the store and immediately closes it again.
async fn db_probe<D: Database + 'static>(State(db): State<D>) -> Result<Json<Value>, ServerError> {
    db.ping().await.map_err(ServerError::connection)?;
    Ok(Json(json!({ "message": "Connected to database" })))
}

async fn get_users<D: Database + 'static>(
    State(db): State<D>,
) -> Result<Json<Vec<User>>, ServerError> {
    let users = db.read_users().await.map_err(ServerError::fetch)?;
    Ok(Json(users))
}

/// Accepts a single user object or an array; reports the count of records
/// submitted, not the count actually persisted.
async fn post_users<D: Database + 'static>(
    State(db): State<D>,
    Json(payload): Json<UsersPayload>,
) -> Result<Json<Value>, ServerError> {
    let users = payload.into_users();
    db.write_users(&users).await.map_err(ServerError::write)?;
    Ok(Json(json!({ "success": true, "count": users.len() })))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Handler-boundary error. The detail string is logged server-side; clients
/// only ever see the static message for the error's class.
#[derive(Debug, PartialEq)]
pub enum ServerError {
    Connection(String),
    Fetch(String),
    Write(String),
}

impl ServerError {
    pub fn connection(err: impl fmt::Display) -> Self {
        ServerError::Connection(err.to_string())
    }

    pub fn fetch(err: impl fmt::Display) -> Self {
        ServerError::Fetch(err.to_string())
    }

    pub fn write(err: impl fmt::Display) -> Self {
        ServerError::Write(err.to_string())
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServerError::Connection(detail) => write!(f, "connection error: {}", detail),
            ServerError::Fetch(detail) => write!(f, "fetch error: {}", detail),
            ServerError::Write(detail) => write!(f, "write error: {}", detail),
        }
    }
}

impl std::error::Error for ServerError {}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Log the underlying detail before producing the response.
        let body = match self {
            ServerError::Connection(detail) => {
                tracing::error!("Database connection error: {}", detail);
                json!({ "message": "Connection failed" })
            }
            ServerError::Fetch(detail) => {
                tracing::error!("Error reading users from DB: {}", detail);
                json!({ "error": "Failed to fetch users" })
            }
            ServerError::Write(detail) => {
                tracing::error!("Error writing users to DB: {}", detail);
                json!({ "error": "Failed to write users" })
            }
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

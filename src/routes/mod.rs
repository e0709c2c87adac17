use axum::Json;
use serde_json::{Value, json};

pub mod auth;
pub mod video;

pub async fn health() -> Json<Value> {
    Json(json!({ "message": "OK!" }))
}

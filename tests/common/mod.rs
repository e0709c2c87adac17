#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use serde_json::Value;
use tower::ServiceExt;
use video_api::{
    AppState, config::Config, database::InMemoryVideoRepository, router::create_router,
};

pub const SECRET: &str = "integration-test-secret";

pub fn config() -> Config {
    Config {
        jwt_secret: SECRET.into(),
        ..Config::default()
    }
}

pub fn state_with(config: Config) -> AppState {
    AppState::new(config, Arc::new(InMemoryVideoRepository::new()))
}

pub fn app() -> Router {
    create_router(state_with(config()))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/v1/auth/token",
            None,
            serde_json::json!({ "username": username, "password": password }),
        ),
    )
    .await;
    assert_eq!(response.status(), 200);
    body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub fn video_body(title: &str) -> Value {
    serde_json::json!({
        "title": title,
        "description": "Video Description",
        "url": "https://youtu.be/JgW-i2QjgHQ",
        "author": {
            "firstname": "Jane",
            "lastname": "Doe",
            "age": 30,
            "email": "jane@example.com"
        }
    })
}

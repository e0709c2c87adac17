use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
};
use tower::ServiceBuilder;

use crate::{
    AppState,
    middleware::{auth_middleware, log_errors, log_requests},
    routes,
};

// Login is open, everything under /videos requires a bearer token
fn api_routes(state: &AppState) -> Router<AppState> {
    let public_routes = Router::new().route("/auth/token", post(routes::auth::login));

    let protected_routes = Router::new()
        .route(
            "/videos",
            get(routes::video::get_videos).post(routes::video::create_video),
        )
        .route(
            "/videos/{id}",
            put(routes::video::update_video).delete(routes::video::delete_video),
        )
        .layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(routes::health))
        .nest(&state.config.api_base_uri, api_routes(&state))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(log_requests))
                .layer(from_fn(log_errors)),
        );

    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    router.with_state(state)
}

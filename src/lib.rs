use std::sync::Arc;

use auth::{Credential, CredentialVerifier, JwtService, LoginService};
use config::Config;
use database::VideoRepository;

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod router;
pub mod routes;
pub mod validators;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub jwt: Arc<JwtService>,
    pub login: Arc<LoginService>,
    pub videos: Arc<dyn VideoRepository>,
}

impl AppState {
    /// Wires the auth services from `config`. Nothing here is global; every
    /// router gets the instances it was built with.
    pub fn new(config: Config, videos: Arc<dyn VideoRepository>) -> Self {
        let jwt = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_issuer.clone(),
            config.jwt_expiration(),
        ));
        let verifier = CredentialVerifier::new(
            Credential::new(config.auth_username.clone(), config.auth_password.clone()),
            config.auth_admin,
        );
        let login = Arc::new(LoginService::new(verifier, jwt.clone()));

        Self {
            config: Arc::new(config),
            jwt,
            login,
            videos,
        }
    }
}

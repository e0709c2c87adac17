mod auth;
mod error_handler;
mod request_log;

pub use auth::{auth_middleware, extract_bearer_token};
pub use error_handler::log_errors;
pub use request_log::{REQUEST_ID_HEADER, log_requests};

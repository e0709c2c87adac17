//! Login, token issuance and token validation.

pub mod credentials;
pub mod error;
pub mod jwt;
pub mod login;

pub use credentials::{Credential, CredentialVerifier, Identity};
pub use error::AuthError;
pub use jwt::{Claims, JwtService};
pub use login::LoginService;

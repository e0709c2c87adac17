use std::sync::Arc;

use super::{
    credentials::{Credential, CredentialVerifier},
    error::AuthError,
    jwt::JwtService,
};

/// Exchanges a verified credential for a signed token.
pub struct LoginService {
    verifier: CredentialVerifier,
    jwt: Arc<JwtService>,
}

impl LoginService {
    pub fn new(verifier: CredentialVerifier, jwt: Arc<JwtService>) -> Self {
        Self { verifier, jwt }
    }

    /// Returns `Ok(None)` when the credential does not verify.
    pub fn issue(&self, candidate: &Credential) -> Result<Option<String>, AuthError> {
        match self.verifier.authenticate(candidate) {
            Some(identity) => self.jwt.generate_token(&identity).map(Some),
            None => Ok(None),
        }
    }
}

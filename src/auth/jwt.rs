use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use super::{credentials::Identity, error::AuthError};

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by every token this service issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username that logged in.
    pub name: String,
    pub admin: bool,
    pub iss: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch. Always later than `iat`.
    pub exp: i64,
}

/// Issues and validates HS256 tokens with the process-wide secret.
///
/// Holds no mutable state, so one instance is shared across all requests.
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    unverified: Validation,
    issuer: String,
    ttl: Duration,
}

impl JwtService {
    pub fn new(secret: &str, issuer: impl Into<String>, ttl: Duration) -> Self {
        let issuer = issuer.into();

        // Expiry is compared against the caller's clock in `validate_token_at`.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[&issuer]);

        let mut unverified = Validation::new(ALGORITHM);
        unverified.insecure_disable_signature_validation();
        unverified.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            unverified,
            issuer,
            ttl,
        }
    }

    pub fn generate_token(&self, identity: &Identity) -> Result<String, AuthError> {
        self.generate_token_at(identity, Utc::now())
    }

    pub fn generate_token_at(
        &self,
        identity: &Identity,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let ttl = TimeDelta::from_std(self.ttl)
            .map_err(|e| AuthError::SigningFailure(format!("invalid token ttl: {}", e)))?;
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::SigningFailure("token expiry out of range".into()))?;

        let claims = Claims {
            name: identity.username.clone(),
            admin: identity.admin,
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        if claims.exp <= claims.iat {
            return Err(AuthError::SigningFailure(
                "token ttl must be at least one second".into(),
            ));
        }

        tracing::debug!(
            "Generating token for {} (admin: {}), expires at {}",
            claims.name,
            claims.admin,
            claims.exp
        );

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningFailure(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.validate_token_at(token, Utc::now())
    }

    /// Checks structure, then expiry, then signature and issuer.
    ///
    /// Expiry is read from the still-unverified payload, so an expired token
    /// is reported as `Expired` whether or not its signature holds.
    pub fn validate_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Claims, AuthError> {
        let unverified = decode::<Claims>(token, &self.decoding_key, &self.unverified)
            .map_err(|e| {
                tracing::debug!("Undecodable token: {}", e);
                AuthError::MalformedToken
            })?
            .claims;

        if unverified.exp <= unverified.iat {
            return Err(AuthError::MalformedToken);
        }
        if unverified.exp <= now.timestamp() {
            return Err(AuthError::Expired);
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature
                }
                _ => AuthError::MalformedToken,
            })?
            .claims;

        tracing::debug!("Validated token for {}", claims.name);
        Ok(claims)
    }
}

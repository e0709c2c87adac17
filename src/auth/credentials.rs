use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Username/password pair submitted on login. Never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A principal that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub admin: bool,
}

/// Checks login attempts against the single configured reference credential.
pub struct CredentialVerifier {
    reference: Credential,
    reference_is_admin: bool,
}

impl CredentialVerifier {
    pub fn new(reference: Credential, reference_is_admin: bool) -> Self {
        Self {
            reference,
            reference_is_admin,
        }
    }

    /// Exact, case-sensitive match on both fields. Empty fields never match.
    pub fn verify(&self, candidate: &Credential) -> bool {
        if candidate.username.is_empty() || candidate.password.is_empty() {
            return false;
        }

        // Both fields are always compared so a wrong username and a wrong
        // password take the same path.
        let username_ok = digest(&candidate.username) == digest(&self.reference.username);
        let password_ok = digest(&candidate.password) == digest(&self.reference.password);
        username_ok & password_ok
    }

    /// Verifies the candidate and derives the identity it authenticates as.
    pub fn authenticate(&self, candidate: &Credential) -> Option<Identity> {
        self.verify(candidate).then(|| Identity {
            username: candidate.username.clone(),
            admin: self.reference_is_admin,
        })
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

use std::sync::Arc;

use async_trait::async_trait;
use tonic::metadata::MetadataMap;
use tonic::Status;

use crate::guard::error::GuardError;

/// Metadata entry carrying the caller's credential. gRPC normalizes
/// metadata keys to lowercase on the wire, so this also matches clients
/// sending `Authorization`.
pub const AUTHORIZATION_KEY: &str = "authorization";

/// Identity the user service established for a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: String,
    pub role: String,
}

/// Which user-service check a credential goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Interactive session token.
    Session,
    /// Long-lived integration token, used by external job posters.
    Api,
}

/// Seam to the user service's credential checks. The gateway never parses
/// credentials itself; the raw metadata value is forwarded as-is and the
/// user service owns the format.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, kind: TokenKind, credential: &str) -> Result<Caller, Status>;
}

pub struct Authenticator {
    verifier: Arc<dyn CredentialVerifier>,
}

impl Authenticator {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    /// Extracts the credential and has the user service verify it. A
    /// missing credential, a rejected credential, and a verification
    /// response without a role all come back as the same `Unauthorized`.
    pub async fn authenticate(
        &self,
        kind: TokenKind,
        metadata: &MetadataMap,
    ) -> Result<Caller, GuardError> {
        let credential = extract_credential(metadata).ok_or(GuardError::Unauthorized)?;
        let caller = self
            .verifier
            .verify(kind, credential)
            .await
            .map_err(|_| GuardError::Unauthorized)?;
        if caller.role.is_empty() {
            return Err(GuardError::Unauthorized);
        }
        Ok(caller)
    }

    /// Lenient identity lookup for operations that stamp the caller's id
    /// without requiring authentication. Any failure yields `None`.
    pub async fn identify(&self, metadata: &MetadataMap) -> Option<Caller> {
        let credential = extract_credential(metadata)?;
        self.verifier
            .verify(TokenKind::Session, credential)
            .await
            .ok()
    }
}

fn extract_credential(metadata: &MetadataMap) -> Option<&str> {
    metadata
        .get(AUTHORIZATION_KEY)
        .and_then(|value| value.to_str().ok())
}

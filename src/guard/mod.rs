use std::sync::Arc;

use tonic::metadata::MetadataMap;

pub mod auth;
pub mod error;
pub mod permissions;
pub mod policy;
pub mod screen;

pub use auth::{Authenticator, Caller, CredentialVerifier, TokenKind, AUTHORIZATION_KEY};
pub use error::GuardError;
pub use permissions::PermissionTable;
pub use policy::{Access, OpPolicy};
pub use screen::{InputScreen, PayloadText};

/// Runs an operation's policy against an incoming request: input screen
/// first, then authentication, then authorization. The first failing check
/// rejects the request; backends are only reached when every check passes.
pub struct Guard {
    screen: InputScreen,
    authenticator: Authenticator,
    permissions: PermissionTable,
}

impl Guard {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, permissions: PermissionTable) -> Self {
        Self {
            screen: InputScreen::new(),
            authenticator: Authenticator::new(verifier),
            permissions,
        }
    }

    /// Returns the caller identity when the policy established one, `None`
    /// for public operations.
    pub async fn check(
        &self,
        policy: &OpPolicy,
        metadata: &MetadataMap,
        payload: &str,
    ) -> Result<Option<Caller>, GuardError> {
        if policy.screen {
            if let Err(err) = self.screen.check(payload) {
                tracing::warn!("{}: input possibly contains malicious data", policy.name);
                return Err(err);
            }
        }

        match policy.access {
            Access::Public => Ok(None),
            Access::Authenticated => {
                let caller = self
                    .authenticate(policy, TokenKind::Session, metadata)
                    .await?;
                Ok(Some(caller))
            }
            Access::Permission(permission) => {
                let caller = self
                    .authenticate(policy, TokenKind::Session, metadata)
                    .await?;
                if !self.permissions.allows(&caller.role, permission) {
                    tracing::warn!(
                        "{}: role {} does not hold permission {}",
                        policy.name,
                        caller.role,
                        permission
                    );
                    return Err(GuardError::Unauthorized);
                }
                Ok(Some(caller))
            }
            Access::ApiToken => {
                let caller = self.authenticate(policy, TokenKind::Api, metadata).await?;
                Ok(Some(caller))
            }
        }
    }

    /// Lenient identity resolution for public operations that still stamp
    /// the caller's id.
    pub async fn identify(&self, metadata: &MetadataMap) -> Option<Caller> {
        self.authenticator.identify(metadata).await
    }

    async fn authenticate(
        &self,
        policy: &OpPolicy,
        kind: TokenKind,
        metadata: &MetadataMap,
    ) -> Result<Caller, GuardError> {
        self.authenticator
            .authenticate(kind, metadata)
            .await
            .map_err(|err| {
                tracing::warn!("{}: caller is not authenticated", policy.name);
                err
            })
    }
}

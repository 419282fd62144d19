use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;

use crate::config::{BackendAddr, GatewayConfig};
use crate::guard::{Caller, CredentialVerifier, TokenKind};
use crate::proto::connection::v1::connection_service_client::ConnectionServiceClient;
use crate::proto::job::v1::job_service_client::JobServiceClient;
use crate::proto::message::v1::message_service_client::MessageServiceClient;
use crate::proto::post::v1::post_service_client::PostServiceClient;
use crate::proto::user::v1::user_service_client::UserServiceClient;
use crate::proto::user::v1::TokenRequest;

/// The five backend clients, each over one long-lived channel opened at
/// startup and cloned per request. An unreachable backend aborts startup.
#[derive(Clone)]
pub struct Backends {
    pub users: UserServiceClient<Channel>,
    pub posts: PostServiceClient<Channel>,
    pub connections: ConnectionServiceClient<Channel>,
    pub jobs: JobServiceClient<Channel>,
    pub messages: MessageServiceClient<Channel>,
}

impl Backends {
    pub async fn connect(config: &GatewayConfig) -> Result<Self, tonic::transport::Error> {
        Ok(Self {
            users: UserServiceClient::new(connect(&config.user_service).await?),
            posts: PostServiceClient::new(connect(&config.post_service).await?),
            connections: ConnectionServiceClient::new(connect(&config.connection_service).await?),
            jobs: JobServiceClient::new(connect(&config.job_service).await?),
            messages: MessageServiceClient::new(connect(&config.message_service).await?),
        })
    }
}

async fn connect(addr: &BackendAddr) -> Result<Channel, tonic::transport::Error> {
    tracing::info!("Connecting to backend at {}", addr.uri());
    Endpoint::from_shared(addr.uri())?.connect().await
}

/// Credential verifier backed by the user service. Every authenticated
/// request costs one validation RPC; nothing is cached or decoded locally.
pub struct GrpcCredentialVerifier {
    client: UserServiceClient<Channel>,
}

impl GrpcCredentialVerifier {
    pub fn new(client: UserServiceClient<Channel>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CredentialVerifier for GrpcCredentialVerifier {
    async fn verify(&self, kind: TokenKind, credential: &str) -> Result<Caller, Status> {
        let mut client = self.client.clone();
        let request = TokenRequest {
            token: credential.to_string(),
        };
        let claims = match kind {
            TokenKind::Session => client.validate_token(request).await?,
            TokenKind::Api => client.validate_api_token(request).await?,
        }
        .into_inner();
        Ok(Caller {
            user_id: claims.user_id,
            role: claims.role,
        })
    }
}

//! Shared harness for the integration tests: fake backend services behind
//! a real gateway, both served in-process on ephemeral ports. Every fake
//! appends to a per-service call log so tests can assert not just what the
//! gateway returned but whether a backend was reached at all.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::metadata::MetadataValue;
use tonic::transport::{Channel, Server};
use tonic::{Request, Response, Status};

use portico_gateway::clients::{Backends, GrpcCredentialVerifier};
use portico_gateway::config::{BackendAddr, GatewayConfig};
use portico_gateway::guard::{Guard, PermissionTable};
use portico_gateway::proto::connection::v1 as connection;
use portico_gateway::proto::job::v1 as job;
use portico_gateway::proto::message::v1 as message;
use portico_gateway::proto::post::v1 as post;
use portico_gateway::proto::user::v1 as user;
use portico_gateway::server;

use connection::connection_service_client::ConnectionServiceClient;
use connection::connection_service_server::{ConnectionService, ConnectionServiceServer};
use job::job_service_client::JobServiceClient;
use job::job_service_server::{JobService, JobServiceServer};
use message::message_service_client::MessageServiceClient;
use message::message_service_server::{MessageService, MessageServiceServer};
use post::post_service_client::PostServiceClient;
use post::post_service_server::{PostService, PostServiceServer};
use user::user_service_client::UserServiceClient;
use user::user_service_server::{UserService, UserServiceServer};

// Credentials the fake user service accepts, and the identities behind
// them. Anything else is rejected as an invalid token.
pub const ADMIN_TOKEN: &str = "admin-session-token";
pub const USER_TOKEN: &str = "user-session-token";
pub const GUEST_TOKEN: &str = "guest-session-token";
pub const AGENCY_API_TOKEN: &str = "agency-api-token";

pub const ADMIN_ID: &str = "admin-1";
pub const USER_ID: &str = "user-1";
pub const GUEST_ID: &str = "guest-1";
pub const AGENCY_ID: &str = "agency-1";

pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Snapshot of everything a fake has recorded so far.
pub fn recorded(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Request carrying the given credential in the `authorization` metadata,
/// the way callers of the real gateway send it.
pub fn authed<T>(message: T, token: &str) -> Request<T> {
    let mut request = Request::new(message);
    let value = MetadataValue::try_from(token).expect("test tokens are valid ascii");
    request.metadata_mut().insert("authorization", value);
    request
}

/// The built-in role -> permission table.
pub fn default_table() -> HashMap<String, Vec<String>> {
    GatewayConfig::defaults().role_permissions
}

/// Table granting a single role exactly the listed permissions.
pub fn table(role: &str, permissions: &[&str]) -> HashMap<String, Vec<String>> {
    HashMap::from([(
        role.to_string(),
        permissions.iter().map(|p| p.to_string()).collect(),
    )])
}

#[derive(Clone)]
struct FakeUserService {
    calls: CallLog,
    sessions: Arc<HashMap<&'static str, (&'static str, &'static str)>>,
    api_tokens: Arc<HashMap<&'static str, (&'static str, &'static str)>>,
}

impl FakeUserService {
    fn new(calls: CallLog) -> Self {
        let sessions = HashMap::from([
            (ADMIN_TOKEN, (ADMIN_ID, "ADMIN")),
            (USER_TOKEN, (USER_ID, "USER")),
            // Valid session whose role appears in no permission table.
            (GUEST_TOKEN, (GUEST_ID, "GUEST")),
        ]);
        let api_tokens = HashMap::from([(AGENCY_API_TOKEN, (AGENCY_ID, "AGENT"))]);
        Self {
            calls,
            sessions: Arc::new(sessions),
            api_tokens: Arc::new(api_tokens),
        }
    }

    fn record(&self, entry: impl Into<String>) {
        self.calls.lock().unwrap().push(entry.into());
    }

    fn claims(
        map: &HashMap<&'static str, (&'static str, &'static str)>,
        token: &str,
    ) -> Result<Response<user::TokenClaims>, Status> {
        match map.get(token) {
            Some((user_id, role)) => Ok(Response::new(user::TokenClaims {
                user_id: user_id.to_string(),
                role: role.to_string(),
            })),
            None => Err(Status::unauthenticated("token is not valid")),
        }
    }
}

#[tonic::async_trait]
impl UserService for FakeUserService {
    async fn get(
        &self,
        _request: Request<user::UserIdRequest>,
    ) -> Result<Response<user::UserResponse>, Status> {
        self.record("user.get");
        Ok(Response::new(Default::default()))
    }

    async fn get_all(
        &self,
        _request: Request<user::Empty>,
    ) -> Result<Response<user::UsersResponse>, Status> {
        self.record("user.get_all");
        Ok(Response::new(Default::default()))
    }

    async fn register(
        &self,
        _request: Request<user::NewUserRequest>,
    ) -> Result<Response<user::UserResponse>, Status> {
        self.record("user.register");
        Ok(Response::new(Default::default()))
    }

    async fn register_admin(
        &self,
        _request: Request<user::NewUserRequest>,
    ) -> Result<Response<user::UserResponse>, Status> {
        self.record("user.register_admin");
        Ok(Response::new(Default::default()))
    }

    async fn update(
        &self,
        request: Request<user::UpdateUserRequest>,
    ) -> Result<Response<user::UserResponse>, Status> {
        let req = request.into_inner();
        self.record("user.update");
        Ok(Response::new(user::UserResponse { user: req.user }))
    }

    async fn delete(
        &self,
        _request: Request<user::UserIdRequest>,
    ) -> Result<Response<user::Empty>, Status> {
        self.record("user.delete");
        Ok(Response::new(Default::default()))
    }

    async fn login(
        &self,
        _request: Request<user::CredentialsRequest>,
    ) -> Result<Response<user::LoginResponse>, Status> {
        self.record("user.login");
        Ok(Response::new(Default::default()))
    }

    async fn search(
        &self,
        request: Request<user::SearchRequest>,
    ) -> Result<Response<user::UsersResponse>, Status> {
        self.record(format!("user.search:{}", request.into_inner().query));
        Ok(Response::new(Default::default()))
    }

    async fn recover_password(
        &self,
        _request: Request<user::PasswordRecoveryRequest>,
    ) -> Result<Response<user::Empty>, Status> {
        self.record("user.recover_password");
        Ok(Response::new(Default::default()))
    }

    async fn update_password(
        &self,
        _request: Request<user::NewPasswordRequest>,
    ) -> Result<Response<user::UserResponse>, Status> {
        self.record("user.update_password");
        Ok(Response::new(Default::default()))
    }

    async fn validate_token(
        &self,
        request: Request<user::TokenRequest>,
    ) -> Result<Response<user::TokenClaims>, Status> {
        self.record("user.validate_token");
        Self::claims(&self.sessions, &request.into_inner().token)
    }

    async fn validate_api_token(
        &self,
        request: Request<user::TokenRequest>,
    ) -> Result<Response<user::TokenClaims>, Status> {
        self.record("user.validate_api_token");
        Self::claims(&self.api_tokens, &request.into_inner().token)
    }

    async fn get_experience(
        &self,
        _request: Request<user::UserIdRequest>,
    ) -> Result<Response<user::ExperiencesResponse>, Status> {
        self.record("user.get_experience");
        Ok(Response::new(Default::default()))
    }

    async fn add_experience(
        &self,
        _request: Request<user::NewExperienceRequest>,
    ) -> Result<Response<user::ExperienceResponse>, Status> {
        self.record("user.add_experience");
        Ok(Response::new(Default::default()))
    }
}

#[derive(Clone)]
struct FakePostService {
    calls: CallLog,
}

impl FakePostService {
    fn record(&self, entry: impl Into<String>) {
        self.calls.lock().unwrap().push(entry.into());
    }
}

#[tonic::async_trait]
impl PostService for FakePostService {
    async fn get(
        &self,
        request: Request<post::PostIdRequest>,
    ) -> Result<Response<post::PostResponse>, Status> {
        let req = request.into_inner();
        self.record(format!("post.get:{}", req.logged_user_id));
        Ok(Response::new(post::PostResponse {
            post: Some(post::Post {
                id: req.post_id,
                user_id: "author-1".to_string(),
                text: "hello from the backend".to_string(),
                image: String::new(),
                links: vec![],
                created_at: "2024-05-01T10:00:00Z".to_string(),
            }),
        }))
    }

    async fn get_all(
        &self,
        _request: Request<post::Empty>,
    ) -> Result<Response<post::PostsResponse>, Status> {
        self.record("post.get_all");
        Ok(Response::new(Default::default()))
    }

    async fn get_all_from_user(
        &self,
        request: Request<post::UserPostsRequest>,
    ) -> Result<Response<post::PostsResponse>, Status> {
        let req = request.into_inner();
        self.record(format!("post.get_all_from_user:{}", req.logged_user_id));
        Ok(Response::new(Default::default()))
    }

    async fn create(
        &self,
        request: Request<post::PostRequest>,
    ) -> Result<Response<post::PostResponse>, Status> {
        let req = request.into_inner();
        self.record("post.create");
        Ok(Response::new(post::PostResponse { post: req.post }))
    }

    async fn delete(
        &self,
        request: Request<post::PostIdRequest>,
    ) -> Result<Response<post::Empty>, Status> {
        let req = request.into_inner();
        self.record(format!("post.delete:{}", req.logged_user_id));
        Ok(Response::new(Default::default()))
    }

    async fn get_comment(
        &self,
        request: Request<post::CommentIdRequest>,
    ) -> Result<Response<post::CommentResponse>, Status> {
        let req = request.into_inner();
        self.record(format!("post.get_comment:{}", req.logged_user_id));
        Ok(Response::new(Default::default()))
    }

    async fn get_all_comments(
        &self,
        _request: Request<post::Empty>,
    ) -> Result<Response<post::CommentsResponse>, Status> {
        self.record("post.get_all_comments");
        Ok(Response::new(Default::default()))
    }

    async fn get_all_comments_from_post(
        &self,
        request: Request<post::PostCommentsRequest>,
    ) -> Result<Response<post::CommentsResponse>, Status> {
        let req = request.into_inner();
        self.record(format!(
            "post.get_all_comments_from_post:{}",
            req.logged_user_id
        ));
        Ok(Response::new(Default::default()))
    }

    async fn create_comment(
        &self,
        request: Request<post::CommentRequest>,
    ) -> Result<Response<post::CommentResponse>, Status> {
        let req = request.into_inner();
        self.record(format!("post.create_comment:{}", req.logged_user_id));
        Ok(Response::new(post::CommentResponse {
            comment: req.comment,
        }))
    }

    async fn delete_comment(
        &self,
        request: Request<post::CommentIdRequest>,
    ) -> Result<Response<post::Empty>, Status> {
        let req = request.into_inner();
        self.record(format!("post.delete_comment:{}", req.logged_user_id));
        Ok(Response::new(Default::default()))
    }

    async fn get_reaction(
        &self,
        request: Request<post::ReactionIdRequest>,
    ) -> Result<Response<post::ReactionResponse>, Status> {
        let req = request.into_inner();
        self.record(format!("post.get_reaction:{}", req.logged_user_id));
        Ok(Response::new(Default::default()))
    }

    async fn get_all_reactions(
        &self,
        _request: Request<post::Empty>,
    ) -> Result<Response<post::ReactionsResponse>, Status> {
        self.record("post.get_all_reactions");
        Ok(Response::new(Default::default()))
    }

    // The designated failing operation, for error-propagation tests.
    async fn get_all_reactions_from_post(
        &self,
        _request: Request<post::PostReactionsRequest>,
    ) -> Result<Response<post::ReactionsResponse>, Status> {
        self.record("post.get_all_reactions_from_post");
        Err(Status::failed_precondition("reactions are disabled"))
    }

    async fn create_reaction(
        &self,
        request: Request<post::ReactionRequest>,
    ) -> Result<Response<post::ReactionResponse>, Status> {
        let req = request.into_inner();
        self.record(format!("post.create_reaction:{}", req.logged_user_id));
        Ok(Response::new(post::ReactionResponse {
            reaction: req.reaction,
        }))
    }

    async fn delete_reaction(
        &self,
        request: Request<post::ReactionIdRequest>,
    ) -> Result<Response<post::Empty>, Status> {
        let req = request.into_inner();
        self.record(format!("post.delete_reaction:{}", req.logged_user_id));
        Ok(Response::new(Default::default()))
    }
}

#[derive(Clone)]
struct FakeConnectionService {
    calls: CallLog,
}

impl FakeConnectionService {
    fn record(&self, entry: impl Into<String>) {
        self.calls.lock().unwrap().push(entry.into());
    }
}

#[tonic::async_trait]
impl ConnectionService for FakeConnectionService {
    async fn create(
        &self,
        request: Request<connection::ConnectionRequest>,
    ) -> Result<Response<connection::ConnectionResponse>, Status> {
        let req = request.into_inner();
        self.record("connection.create");
        Ok(Response::new(connection::ConnectionResponse {
            connection: req.connection,
        }))
    }

    async fn approve(
        &self,
        _request: Request<connection::ConnectionRequest>,
    ) -> Result<Response<connection::ConnectionResponse>, Status> {
        self.record("connection.approve");
        Ok(Response::new(Default::default()))
    }

    async fn approve_all(
        &self,
        _request: Request<connection::UserIdRequest>,
    ) -> Result<Response<connection::Empty>, Status> {
        self.record("connection.approve_all");
        Ok(Response::new(Default::default()))
    }

    async fn reject(
        &self,
        _request: Request<connection::ConnectionRequest>,
    ) -> Result<Response<connection::ConnectionResponse>, Status> {
        self.record("connection.reject");
        Ok(Response::new(Default::default()))
    }

    async fn get(
        &self,
        _request: Request<connection::ConnectionPair>,
    ) -> Result<Response<connection::ConnectionResponse>, Status> {
        self.record("connection.get");
        Ok(Response::new(Default::default()))
    }

    async fn delete(
        &self,
        _request: Request<connection::ConnectionPair>,
    ) -> Result<Response<connection::ConnectionResponse>, Status> {
        self.record("connection.delete");
        Ok(Response::new(Default::default()))
    }

    async fn get_all(
        &self,
        _request: Request<connection::UserIdRequest>,
    ) -> Result<Response<connection::ConnectionsResponse>, Status> {
        self.record("connection.get_all");
        Ok(Response::new(Default::default()))
    }

    async fn get_following(
        &self,
        _request: Request<connection::UserIdRequest>,
    ) -> Result<Response<connection::ConnectionsResponse>, Status> {
        self.record("connection.get_following");
        Ok(Response::new(Default::default()))
    }

    async fn get_followers(
        &self,
        _request: Request<connection::UserIdRequest>,
    ) -> Result<Response<connection::ConnectionsResponse>, Status> {
        self.record("connection.get_followers");
        Ok(Response::new(Default::default()))
    }

    async fn get_requested(
        &self,
        _request: Request<connection::UserIdRequest>,
    ) -> Result<Response<connection::ConnectionsResponse>, Status> {
        self.record("connection.get_requested");
        Ok(Response::new(Default::default()))
    }

    async fn get_pending(
        &self,
        _request: Request<connection::UserIdRequest>,
    ) -> Result<Response<connection::ConnectionsResponse>, Status> {
        self.record("connection.get_pending");
        Ok(Response::new(Default::default()))
    }

    async fn block_user(
        &self,
        _request: Request<connection::BlockRequest>,
    ) -> Result<Response<connection::Empty>, Status> {
        self.record("connection.block_user");
        Ok(Response::new(Default::default()))
    }

    async fn unblock_user(
        &self,
        _request: Request<connection::BlockRequest>,
    ) -> Result<Response<connection::Empty>, Status> {
        self.record("connection.unblock_user");
        Ok(Response::new(Default::default()))
    }

    async fn is_blocked(
        &self,
        _request: Request<connection::BlockRequest>,
    ) -> Result<Response<connection::IsBlockedResponse>, Status> {
        self.record("connection.is_blocked");
        Ok(Response::new(Default::default()))
    }

    async fn is_blocked_any(
        &self,
        _request: Request<connection::BlockRequest>,
    ) -> Result<Response<connection::IsBlockedResponse>, Status> {
        self.record("connection.is_blocked_any");
        Ok(Response::new(Default::default()))
    }

    async fn get_blocked(
        &self,
        _request: Request<connection::UserIdRequest>,
    ) -> Result<Response<connection::BlockedUsersResponse>, Status> {
        self.record("connection.get_blocked");
        Ok(Response::new(Default::default()))
    }

    async fn get_blocked_by(
        &self,
        _request: Request<connection::UserIdRequest>,
    ) -> Result<Response<connection::BlockedUsersResponse>, Status> {
        self.record("connection.get_blocked_by");
        Ok(Response::new(Default::default()))
    }

    async fn get_blocked_any(
        &self,
        _request: Request<connection::UserIdRequest>,
    ) -> Result<Response<connection::BlockedUsersResponse>, Status> {
        self.record("connection.get_blocked_any");
        Ok(Response::new(Default::default()))
    }

    async fn set_message_notification(
        &self,
        _request: Request<connection::ConnectionPair>,
    ) -> Result<Response<connection::ConnectionResponse>, Status> {
        self.record("connection.set_message_notification");
        Ok(Response::new(Default::default()))
    }

    async fn set_post_notification(
        &self,
        _request: Request<connection::ConnectionPair>,
    ) -> Result<Response<connection::ConnectionResponse>, Status> {
        self.record("connection.set_post_notification");
        Ok(Response::new(Default::default()))
    }

    async fn set_comment_notification(
        &self,
        _request: Request<connection::ConnectionPair>,
    ) -> Result<Response<connection::ConnectionResponse>, Status> {
        self.record("connection.set_comment_notification");
        Ok(Response::new(Default::default()))
    }
}

#[derive(Clone)]
struct FakeJobService {
    calls: CallLog,
}

impl FakeJobService {
    fn record(&self, entry: impl Into<String>) {
        self.calls.lock().unwrap().push(entry.into());
    }
}

#[tonic::async_trait]
impl JobService for FakeJobService {
    async fn get(
        &self,
        _request: Request<job::JobIdRequest>,
    ) -> Result<Response<job::JobResponse>, Status> {
        self.record("job.get");
        Ok(Response::new(Default::default()))
    }

    async fn get_all(
        &self,
        _request: Request<job::Empty>,
    ) -> Result<Response<job::JobsResponse>, Status> {
        self.record("job.get_all");
        Ok(Response::new(Default::default()))
    }

    async fn create(
        &self,
        request: Request<job::JobRequest>,
    ) -> Result<Response<job::JobResponse>, Status> {
        let req = request.into_inner();
        let owner = req
            .job
            .as_ref()
            .map(|j| j.user_id.clone())
            .unwrap_or_default();
        self.record(format!("job.create:{}", owner));
        Ok(Response::new(job::JobResponse { job: req.job }))
    }

    async fn delete(
        &self,
        _request: Request<job::JobIdRequest>,
    ) -> Result<Response<job::Empty>, Status> {
        self.record("job.delete");
        Ok(Response::new(Default::default()))
    }

    async fn search(
        &self,
        request: Request<job::SearchRequest>,
    ) -> Result<Response<job::JobsResponse>, Status> {
        self.record(format!("job.search:{}", request.into_inner().query));
        Ok(Response::new(Default::default()))
    }
}

#[derive(Clone)]
struct FakeMessageService {
    calls: CallLog,
}

impl FakeMessageService {
    fn record(&self, entry: impl Into<String>) {
        self.calls.lock().unwrap().push(entry.into());
    }
}

#[tonic::async_trait]
impl MessageService for FakeMessageService {
    async fn get_notifications(
        &self,
        _request: Request<message::UserIdRequest>,
    ) -> Result<Response<message::NotificationsResponse>, Status> {
        self.record("message.get_notifications");
        Ok(Response::new(Default::default()))
    }

    async fn get_messages(
        &self,
        _request: Request<message::ChatIdRequest>,
    ) -> Result<Response<message::MessagesResponse>, Status> {
        self.record("message.get_messages");
        Ok(Response::new(Default::default()))
    }

    async fn create_message(
        &self,
        request: Request<message::NewMessageRequest>,
    ) -> Result<Response<message::MessageResponse>, Status> {
        let req = request.into_inner();
        let text = req
            .message
            .as_ref()
            .map(|m| m.text.clone())
            .unwrap_or_default();
        self.record(format!("message.create_message:{}", text));
        Ok(Response::new(message::MessageResponse {
            message: req.message,
        }))
    }

    async fn get_chats(
        &self,
        _request: Request<message::UserIdRequest>,
    ) -> Result<Response<message::ChatsResponse>, Status> {
        self.record("message.get_chats");
        Ok(Response::new(Default::default()))
    }

    async fn create_chat(
        &self,
        _request: Request<message::NewChatRequest>,
    ) -> Result<Response<message::ChatResponse>, Status> {
        self.record("message.create_chat");
        Ok(Response::new(Default::default()))
    }
}

/// A running gateway wired to fake backends, plus the call logs the fakes
/// append to. The spawned servers die with the test runtime.
pub struct TestGateway {
    endpoint: String,
    pub user_calls: CallLog,
    pub post_calls: CallLog,
    pub connection_calls: CallLog,
    pub job_calls: CallLog,
    pub message_calls: CallLog,
}

impl TestGateway {
    pub async fn user_client(&self) -> Result<UserServiceClient<Channel>> {
        Ok(UserServiceClient::connect(self.endpoint.clone()).await?)
    }

    pub async fn post_client(&self) -> Result<PostServiceClient<Channel>> {
        Ok(PostServiceClient::connect(self.endpoint.clone()).await?)
    }

    pub async fn connection_client(&self) -> Result<ConnectionServiceClient<Channel>> {
        Ok(ConnectionServiceClient::connect(self.endpoint.clone()).await?)
    }

    pub async fn job_client(&self) -> Result<JobServiceClient<Channel>> {
        Ok(JobServiceClient::connect(self.endpoint.clone()).await?)
    }

    pub async fn message_client(&self) -> Result<MessageServiceClient<Channel>> {
        Ok(MessageServiceClient::connect(self.endpoint.clone()).await?)
    }
}

/// Boots the five fakes on one listener and a gateway in front of them,
/// all on ephemeral ports. Every call builds an isolated instance, so
/// parallel tests never share state.
pub async fn spawn_gateway(role_permissions: HashMap<String, Vec<String>>) -> Result<TestGateway> {
    let user_calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let post_calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let connection_calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let job_calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let message_calls: CallLog = Arc::new(Mutex::new(Vec::new()));

    let backend_listener = TcpListener::bind("127.0.0.1:0").await?;
    let backend_port = backend_listener.local_addr()?.port();
    let fakes = Server::builder()
        .add_service(UserServiceServer::new(FakeUserService::new(
            user_calls.clone(),
        )))
        .add_service(PostServiceServer::new(FakePostService {
            calls: post_calls.clone(),
        }))
        .add_service(ConnectionServiceServer::new(FakeConnectionService {
            calls: connection_calls.clone(),
        }))
        .add_service(JobServiceServer::new(FakeJobService {
            calls: job_calls.clone(),
        }))
        .add_service(MessageServiceServer::new(FakeMessageService {
            calls: message_calls.clone(),
        }));
    tokio::spawn(fakes.serve_with_incoming(TcpListenerStream::new(backend_listener)));

    let backend = BackendAddr::new("127.0.0.1", backend_port);
    let config = GatewayConfig {
        grpc_port: 0,
        user_service: backend.clone(),
        post_service: backend.clone(),
        connection_service: backend.clone(),
        job_service: backend.clone(),
        message_service: backend,
        role_permissions,
    };
    let backends = Backends::connect(&config).await?;

    let verifier = Arc::new(GrpcCredentialVerifier::new(backends.users.clone()));
    let guard = Arc::new(Guard::new(
        verifier,
        PermissionTable::new(config.role_permissions.clone()),
    ));

    let gateway_listener = TcpListener::bind("127.0.0.1:0").await?;
    let gateway_port = gateway_listener.local_addr()?.port();
    let router = server::router(guard, backends);
    tokio::spawn(router.serve_with_incoming(TcpListenerStream::new(gateway_listener)));

    Ok(TestGateway {
        endpoint: format!("http://127.0.0.1:{}", gateway_port),
        user_calls,
        post_calls,
        connection_calls,
        job_calls,
        message_calls,
    })
}

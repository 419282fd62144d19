use std::sync::Arc;

use tonic::transport::Channel;
use tonic::{Request, Response, Status};

use crate::guard::{Guard, OpPolicy};
use crate::proto::connection::v1::connection_service_client::ConnectionServiceClient;
use crate::proto::connection::v1::connection_service_server::ConnectionService;
use crate::proto::connection::v1::{
    BlockRequest, BlockedUsersResponse, ConnectionPair, ConnectionRequest, ConnectionResponse,
    ConnectionsResponse, Empty, IsBlockedResponse, UserIdRequest,
};

// Policy table. Everything here requires a session; writes that carry
// caller-provided ids additionally pass the input screen.
const CREATE: OpPolicy = OpPolicy::requires("connection.create", "connection_write").screened();
const APPROVE: OpPolicy = OpPolicy::requires("connection.approve", "connection_write").screened();
const APPROVE_ALL: OpPolicy =
    OpPolicy::requires("connection.approve_all", "connection_write").screened();
const REJECT: OpPolicy = OpPolicy::requires("connection.reject", "connection_write").screened();
const GET: OpPolicy = OpPolicy::requires("connection.get", "connection_read");
const DELETE: OpPolicy = OpPolicy::requires("connection.delete", "connection_delete");
const GET_ALL: OpPolicy = OpPolicy::requires("connection.get_all", "connection_read");
const GET_FOLLOWING: OpPolicy = OpPolicy::requires("connection.get_following", "connection_read");
const GET_FOLLOWERS: OpPolicy = OpPolicy::requires("connection.get_followers", "connection_read");
const GET_REQUESTED: OpPolicy = OpPolicy::requires("connection.get_requested", "connection_read");
const GET_PENDING: OpPolicy = OpPolicy::requires("connection.get_pending", "connection_read");
const BLOCK_USER: OpPolicy = OpPolicy::requires("connection.block_user", "block_write");
const UNBLOCK_USER: OpPolicy = OpPolicy::requires("connection.unblock_user", "block_write");
const IS_BLOCKED: OpPolicy = OpPolicy::requires("connection.is_blocked", "block_read");
const IS_BLOCKED_ANY: OpPolicy = OpPolicy::requires("connection.is_blocked_any", "block_read");
const GET_BLOCKED: OpPolicy = OpPolicy::requires("connection.get_blocked", "block_read");
const GET_BLOCKED_BY: OpPolicy = OpPolicy::requires("connection.get_blocked_by", "block_read");
const GET_BLOCKED_ANY: OpPolicy = OpPolicy::requires("connection.get_blocked_any", "block_read");
const SET_MESSAGE_NOTIFICATION: OpPolicy =
    OpPolicy::requires("connection.set_message_notification", "connection_write");
const SET_POST_NOTIFICATION: OpPolicy =
    OpPolicy::requires("connection.set_post_notification", "connection_write");
const SET_COMMENT_NOTIFICATION: OpPolicy =
    OpPolicy::requires("connection.set_comment_notification", "connection_write");

pub struct ConnectionGateway {
    guard: Arc<Guard>,
    backend: ConnectionServiceClient<Channel>,
}

impl ConnectionGateway {
    pub fn new(guard: Arc<Guard>, backend: ConnectionServiceClient<Channel>) -> Self {
        Self { guard, backend }
    }
}

#[tonic::async_trait]
impl ConnectionService for ConnectionGateway {
    async fn create(
        &self,
        request: Request<ConnectionRequest>,
    ) -> Result<Response<ConnectionResponse>, Status> {
        super::forward(&self.guard, &CREATE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.create(req).await }
        })
        .await
    }

    async fn approve(
        &self,
        request: Request<ConnectionRequest>,
    ) -> Result<Response<ConnectionResponse>, Status> {
        super::forward(&self.guard, &APPROVE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.approve(req).await }
        })
        .await
    }

    async fn approve_all(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<Empty>, Status> {
        super::forward(&self.guard, &APPROVE_ALL, request, |req| {
            let mut client = self.backend.clone();
            async move { client.approve_all(req).await }
        })
        .await
    }

    async fn reject(
        &self,
        request: Request<ConnectionRequest>,
    ) -> Result<Response<ConnectionResponse>, Status> {
        super::forward(&self.guard, &REJECT, request, |req| {
            let mut client = self.backend.clone();
            async move { client.reject(req).await }
        })
        .await
    }

    async fn get(
        &self,
        request: Request<ConnectionPair>,
    ) -> Result<Response<ConnectionResponse>, Status> {
        super::forward(&self.guard, &GET, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get(req).await }
        })
        .await
    }

    async fn delete(
        &self,
        request: Request<ConnectionPair>,
    ) -> Result<Response<ConnectionResponse>, Status> {
        super::forward(&self.guard, &DELETE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.delete(req).await }
        })
        .await
    }

    async fn get_all(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<ConnectionsResponse>, Status> {
        super::forward(&self.guard, &GET_ALL, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_all(req).await }
        })
        .await
    }

    async fn get_following(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<ConnectionsResponse>, Status> {
        super::forward(&self.guard, &GET_FOLLOWING, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_following(req).await }
        })
        .await
    }

    async fn get_followers(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<ConnectionsResponse>, Status> {
        super::forward(&self.guard, &GET_FOLLOWERS, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_followers(req).await }
        })
        .await
    }

    async fn get_requested(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<ConnectionsResponse>, Status> {
        super::forward(&self.guard, &GET_REQUESTED, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_requested(req).await }
        })
        .await
    }

    async fn get_pending(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<ConnectionsResponse>, Status> {
        super::forward(&self.guard, &GET_PENDING, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_pending(req).await }
        })
        .await
    }

    async fn block_user(&self, request: Request<BlockRequest>) -> Result<Response<Empty>, Status> {
        super::forward(&self.guard, &BLOCK_USER, request, |req| {
            let mut client = self.backend.clone();
            async move { client.block_user(req).await }
        })
        .await
    }

    async fn unblock_user(
        &self,
        request: Request<BlockRequest>,
    ) -> Result<Response<Empty>, Status> {
        super::forward(&self.guard, &UNBLOCK_USER, request, |req| {
            let mut client = self.backend.clone();
            async move { client.unblock_user(req).await }
        })
        .await
    }

    async fn is_blocked(
        &self,
        request: Request<BlockRequest>,
    ) -> Result<Response<IsBlockedResponse>, Status> {
        super::forward(&self.guard, &IS_BLOCKED, request, |req| {
            let mut client = self.backend.clone();
            async move { client.is_blocked(req).await }
        })
        .await
    }

    async fn is_blocked_any(
        &self,
        request: Request<BlockRequest>,
    ) -> Result<Response<IsBlockedResponse>, Status> {
        super::forward(&self.guard, &IS_BLOCKED_ANY, request, |req| {
            let mut client = self.backend.clone();
            async move { client.is_blocked_any(req).await }
        })
        .await
    }

    async fn get_blocked(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<BlockedUsersResponse>, Status> {
        super::forward(&self.guard, &GET_BLOCKED, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_blocked(req).await }
        })
        .await
    }

    async fn get_blocked_by(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<BlockedUsersResponse>, Status> {
        super::forward(&self.guard, &GET_BLOCKED_BY, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_blocked_by(req).await }
        })
        .await
    }

    async fn get_blocked_any(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<BlockedUsersResponse>, Status> {
        super::forward(&self.guard, &GET_BLOCKED_ANY, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_blocked_any(req).await }
        })
        .await
    }

    async fn set_message_notification(
        &self,
        request: Request<ConnectionPair>,
    ) -> Result<Response<ConnectionResponse>, Status> {
        super::forward(&self.guard, &SET_MESSAGE_NOTIFICATION, request, |req| {
            let mut client = self.backend.clone();
            async move { client.set_message_notification(req).await }
        })
        .await
    }

    async fn set_post_notification(
        &self,
        request: Request<ConnectionPair>,
    ) -> Result<Response<ConnectionResponse>, Status> {
        super::forward(&self.guard, &SET_POST_NOTIFICATION, request, |req| {
            let mut client = self.backend.clone();
            async move { client.set_post_notification(req).await }
        })
        .await
    }

    async fn set_comment_notification(
        &self,
        request: Request<ConnectionPair>,
    ) -> Result<Response<ConnectionResponse>, Status> {
        super::forward(&self.guard, &SET_COMMENT_NOTIFICATION, request, |req| {
            let mut client = self.backend.clone();
            async move { client.set_comment_notification(req).await }
        })
        .await
    }
}

use std::sync::Arc;

use tonic::transport::server::Router;
use tonic::transport::Server;

use crate::clients::Backends;
use crate::gateway::{ConnectionGateway, JobGateway, MessageGateway, PostGateway, UserGateway};
use crate::guard::Guard;
use crate::proto::connection::v1::connection_service_server::ConnectionServiceServer;
use crate::proto::job::v1::job_service_server::JobServiceServer;
use crate::proto::message::v1::message_service_server::MessageServiceServer;
use crate::proto::post::v1::post_service_server::PostServiceServer;
use crate::proto::user::v1::user_service_server::UserServiceServer;

/// Assembles the five gateway services into one tonic router. The caller
/// decides how to serve it: a TCP address in production, an in-process
/// listener in tests.
pub fn router(guard: Arc<Guard>, backends: Backends) -> Router {
    Server::builder()
        .add_service(UserServiceServer::new(UserGateway::new(
            guard.clone(),
            backends.users,
        )))
        .add_service(PostServiceServer::new(PostGateway::new(
            guard.clone(),
            backends.posts,
        )))
        .add_service(ConnectionServiceServer::new(ConnectionGateway::new(
            guard.clone(),
            backends.connections,
        )))
        .add_service(JobServiceServer::new(JobGateway::new(
            guard.clone(),
            backends.jobs,
        )))
        .add_service(MessageServiceServer::new(MessageGateway::new(
            guard,
            backends.messages,
        )))
}

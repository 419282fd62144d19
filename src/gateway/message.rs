use std::sync::Arc;

use tonic::transport::Channel;
use tonic::{Request, Response, Status};

use crate::guard::{Guard, OpPolicy};
use crate::proto::message::v1::message_service_client::MessageServiceClient;
use crate::proto::message::v1::message_service_server::MessageService;
use crate::proto::message::v1::{
    ChatIdRequest, ChatResponse, ChatsResponse, MessageResponse, MessagesResponse,
    NewChatRequest, NewMessageRequest, NotificationsResponse, UserIdRequest,
};

// Policy table. CreateMessage screens the message text itself; see the
// PayloadText impl for NewMessageRequest.
const GET_NOTIFICATIONS: OpPolicy =
    OpPolicy::requires("message.get_notifications", "notification_read");
const GET_MESSAGES: OpPolicy = OpPolicy::requires("message.get_messages", "message_read");
const CREATE_MESSAGE: OpPolicy =
    OpPolicy::requires("message.create_message", "message_write").screened();
const GET_CHATS: OpPolicy = OpPolicy::requires("message.get_chats", "chat_read");
const CREATE_CHAT: OpPolicy = OpPolicy::requires("message.create_chat", "chat_write");

pub struct MessageGateway {
    guard: Arc<Guard>,
    backend: MessageServiceClient<Channel>,
}

impl MessageGateway {
    pub fn new(guard: Arc<Guard>, backend: MessageServiceClient<Channel>) -> Self {
        Self { guard, backend }
    }
}

#[tonic::async_trait]
impl MessageService for MessageGateway {
    async fn get_notifications(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<NotificationsResponse>, Status> {
        super::forward(&self.guard, &GET_NOTIFICATIONS, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_notifications(req).await }
        })
        .await
    }

    async fn get_messages(
        &self,
        request: Request<ChatIdRequest>,
    ) -> Result<Response<MessagesResponse>, Status> {
        super::forward(&self.guard, &GET_MESSAGES, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_messages(req).await }
        })
        .await
    }

    async fn create_message(
        &self,
        request: Request<NewMessageRequest>,
    ) -> Result<Response<MessageResponse>, Status> {
        super::forward(&self.guard, &CREATE_MESSAGE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.create_message(req).await }
        })
        .await
    }

    async fn get_chats(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<ChatsResponse>, Status> {
        super::forward(&self.guard, &GET_CHATS, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_chats(req).await }
        })
        .await
    }

    async fn create_chat(
        &self,
        request: Request<NewChatRequest>,
    ) -> Result<Response<ChatResponse>, Status> {
        super::forward(&self.guard, &CREATE_CHAT, request, |req| {
            let mut client = self.backend.clone();
            async move { client.create_chat(req).await }
        })
        .await
    }
}

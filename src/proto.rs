//! Generated gRPC contracts for the five backend services, plus the small
//! adaptations the gateway needs on top of the raw message types.

use crate::guard::PayloadText;

/// Generated code for the user service contract.
pub mod user {
    pub mod v1 {
        tonic::include_proto!("portico.user.v1");
    }
}

/// Generated code for the post service contract.
pub mod post {
    pub mod v1 {
        tonic::include_proto!("portico.post.v1");
    }
}

/// Generated code for the connection service contract.
pub mod connection {
    pub mod v1 {
        tonic::include_proto!("portico.connection.v1");
    }
}

/// Generated code for the job service contract.
pub mod job {
    pub mod v1 {
        tonic::include_proto!("portico.job.v1");
    }
}

/// Generated code for the message service contract.
pub mod message {
    pub mod v1 {
        tonic::include_proto!("portico.message.v1");
    }
}

/// Request messages that carry the acting user's id. The gateway always
/// overwrites this field with the identity derived from the request
/// credential, so a caller-supplied value never reaches a backend.
pub trait StampIdentity {
    fn stamp_identity(&mut self, user_id: &str);
}

macro_rules! payload_text_as_debug {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PayloadText for $ty {
                fn payload_text(&self) -> String {
                    format!("{:?}", self)
                }
            }
        )+
    };
}

payload_text_as_debug!(
    user::v1::Empty,
    user::v1::UserIdRequest,
    user::v1::NewUserRequest,
    user::v1::UpdateUserRequest,
    user::v1::CredentialsRequest,
    user::v1::SearchRequest,
    user::v1::PasswordRecoveryRequest,
    user::v1::NewPasswordRequest,
    user::v1::TokenRequest,
    user::v1::NewExperienceRequest,
    post::v1::Empty,
    post::v1::PostIdRequest,
    post::v1::UserPostsRequest,
    post::v1::PostRequest,
    post::v1::CommentIdRequest,
    post::v1::PostCommentsRequest,
    post::v1::CommentRequest,
    post::v1::ReactionIdRequest,
    post::v1::PostReactionsRequest,
    post::v1::ReactionRequest,
    connection::v1::ConnectionRequest,
    connection::v1::ConnectionPair,
    connection::v1::UserIdRequest,
    connection::v1::BlockRequest,
    job::v1::Empty,
    job::v1::JobIdRequest,
    job::v1::JobRequest,
    job::v1::SearchRequest,
    message::v1::UserIdRequest,
    message::v1::ChatIdRequest,
    message::v1::NewChatRequest,
);

// CreateMessage screens only the message text, not the whole request.
impl PayloadText for message::v1::NewMessageRequest {
    fn payload_text(&self) -> String {
        self.message
            .as_ref()
            .map(|message| message.text.clone())
            .unwrap_or_default()
    }
}

macro_rules! stamp_logged_user_id {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl StampIdentity for $ty {
                fn stamp_identity(&mut self, user_id: &str) {
                    self.logged_user_id = user_id.to_string();
                }
            }
        )+
    };
}

stamp_logged_user_id!(
    post::v1::PostIdRequest,
    post::v1::UserPostsRequest,
    post::v1::CommentIdRequest,
    post::v1::PostCommentsRequest,
    post::v1::CommentRequest,
    post::v1::ReactionIdRequest,
    post::v1::ReactionRequest,
);

impl StampIdentity for job::v1::JobRequest {
    fn stamp_identity(&mut self, user_id: &str) {
        if let Some(job) = self.job.as_mut() {
            job.user_id = user_id.to_string();
        }
    }
}

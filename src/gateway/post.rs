use std::sync::Arc;

use tonic::transport::Channel;
use tonic::{Request, Response, Status};

use crate::guard::{Guard, OpPolicy};
use crate::proto::post::v1::post_service_client::PostServiceClient;
use crate::proto::post::v1::post_service_server::PostService;
use crate::proto::post::v1::{
    CommentIdRequest, CommentRequest, CommentResponse, CommentsResponse, Empty, PostCommentsRequest,
    PostIdRequest, PostReactionsRequest, PostRequest, PostResponse, PostsResponse,
    ReactionIdRequest, ReactionRequest, ReactionResponse, ReactionsResponse, UserPostsRequest,
};

// Policy table. Single-item reads are public but still stamp the caller's
// id; the catalog-wide listings are gated behind post_getAll.
const GET: OpPolicy = OpPolicy::open("post.get");
const GET_ALL: OpPolicy = OpPolicy::requires("post.get_all", "post_getAll");
const GET_ALL_FROM_USER: OpPolicy = OpPolicy::open("post.get_all_from_user");
const CREATE: OpPolicy = OpPolicy::requires("post.create", "post_write").screened();
const DELETE: OpPolicy = OpPolicy::requires("post.delete", "post_delete").screened();
const GET_COMMENT: OpPolicy = OpPolicy::open("post.get_comment");
const GET_ALL_COMMENTS: OpPolicy = OpPolicy::requires("post.get_all_comments", "post_getAll");
const GET_ALL_COMMENTS_FROM_POST: OpPolicy = OpPolicy::open("post.get_all_comments_from_post");
const CREATE_COMMENT: OpPolicy = OpPolicy::requires("post.create_comment", "post_write").screened();
const DELETE_COMMENT: OpPolicy = OpPolicy::requires("post.delete_comment", "post_delete").screened();
const GET_REACTION: OpPolicy = OpPolicy::open("post.get_reaction");
const GET_ALL_REACTIONS: OpPolicy = OpPolicy::requires("post.get_all_reactions", "post_getAll");
const GET_ALL_REACTIONS_FROM_POST: OpPolicy = OpPolicy::open("post.get_all_reactions_from_post");
const CREATE_REACTION: OpPolicy =
    OpPolicy::requires("post.create_reaction", "post_write").screened();
const DELETE_REACTION: OpPolicy = OpPolicy::requires("post.delete_reaction", "post_delete");

pub struct PostGateway {
    guard: Arc<Guard>,
    backend: PostServiceClient<Channel>,
}

impl PostGateway {
    pub fn new(guard: Arc<Guard>, backend: PostServiceClient<Channel>) -> Self {
        Self { guard, backend }
    }
}

#[tonic::async_trait]
impl PostService for PostGateway {
    async fn get(&self, request: Request<PostIdRequest>) -> Result<Response<PostResponse>, Status> {
        super::forward_stamped(&self.guard, &GET, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get(req).await }
        })
        .await
    }

    async fn get_all(&self, request: Request<Empty>) -> Result<Response<PostsResponse>, Status> {
        super::forward(&self.guard, &GET_ALL, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_all(req).await }
        })
        .await
    }

    async fn get_all_from_user(
        &self,
        request: Request<UserPostsRequest>,
    ) -> Result<Response<PostsResponse>, Status> {
        super::forward_stamped(&self.guard, &GET_ALL_FROM_USER, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_all_from_user(req).await }
        })
        .await
    }

    async fn create(
        &self,
        request: Request<PostRequest>,
    ) -> Result<Response<PostResponse>, Status> {
        super::forward(&self.guard, &CREATE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.create(req).await }
        })
        .await
    }

    async fn delete(&self, request: Request<PostIdRequest>) -> Result<Response<Empty>, Status> {
        super::forward_stamped(&self.guard, &DELETE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.delete(req).await }
        })
        .await
    }

    async fn get_comment(
        &self,
        request: Request<CommentIdRequest>,
    ) -> Result<Response<CommentResponse>, Status> {
        super::forward_stamped(&self.guard, &GET_COMMENT, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_comment(req).await }
        })
        .await
    }

    async fn get_all_comments(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<CommentsResponse>, Status> {
        super::forward(&self.guard, &GET_ALL_COMMENTS, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_all_comments(req).await }
        })
        .await
    }

    async fn get_all_comments_from_post(
        &self,
        request: Request<PostCommentsRequest>,
    ) -> Result<Response<CommentsResponse>, Status> {
        super::forward_stamped(&self.guard, &GET_ALL_COMMENTS_FROM_POST, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_all_comments_from_post(req).await }
        })
        .await
    }

    async fn create_comment(
        &self,
        request: Request<CommentRequest>,
    ) -> Result<Response<CommentResponse>, Status> {
        super::forward_stamped(&self.guard, &CREATE_COMMENT, request, |req| {
            let mut client = self.backend.clone();
            async move { client.create_comment(req).await }
        })
        .await
    }

    async fn delete_comment(
        &self,
        request: Request<CommentIdRequest>,
    ) -> Result<Response<Empty>, Status> {
        super::forward_stamped(&self.guard, &DELETE_COMMENT, request, |req| {
            let mut client = self.backend.clone();
            async move { client.delete_comment(req).await }
        })
        .await
    }

    async fn get_reaction(
        &self,
        request: Request<ReactionIdRequest>,
    ) -> Result<Response<ReactionResponse>, Status> {
        super::forward_stamped(&self.guard, &GET_REACTION, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_reaction(req).await }
        })
        .await
    }

    async fn get_all_reactions(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<ReactionsResponse>, Status> {
        super::forward(&self.guard, &GET_ALL_REACTIONS, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_all_reactions(req).await }
        })
        .await
    }

    async fn get_all_reactions_from_post(
        &self,
        request: Request<PostReactionsRequest>,
    ) -> Result<Response<ReactionsResponse>, Status> {
        super::forward(&self.guard, &GET_ALL_REACTIONS_FROM_POST, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_all_reactions_from_post(req).await }
        })
        .await
    }

    async fn create_reaction(
        &self,
        request: Request<ReactionRequest>,
    ) -> Result<Response<ReactionResponse>, Status> {
        super::forward_stamped(&self.guard, &CREATE_REACTION, request, |req| {
            let mut client = self.backend.clone();
            async move { client.create_reaction(req).await }
        })
        .await
    }

    async fn delete_reaction(
        &self,
        request: Request<ReactionIdRequest>,
    ) -> Result<Response<Empty>, Status> {
        super::forward_stamped(&self.guard, &DELETE_REACTION, request, |req| {
            let mut client = self.backend.clone();
            async move { client.delete_reaction(req).await }
        })
        .await
    }
}

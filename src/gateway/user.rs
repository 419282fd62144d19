use std::sync::Arc;

use tonic::transport::Channel;
use tonic::{Request, Response, Status};

use crate::guard::{Guard, OpPolicy};
use crate::proto::user::v1::user_service_client::UserServiceClient;
use crate::proto::user::v1::user_service_server::UserService;
use crate::proto::user::v1::{
    CredentialsRequest, Empty, ExperienceResponse, ExperiencesResponse, LoginResponse,
    NewExperienceRequest, NewPasswordRequest, NewUserRequest, PasswordRecoveryRequest,
    SearchRequest, TokenClaims, TokenRequest, UpdateUserRequest, UserIdRequest, UserResponse,
    UsersResponse,
};

// Policy table. Registration, login, lookup, and search stay public so the
// platform can be joined and browsed without an account; only the two
// self-mutating operations demand a valid session.
const GET: OpPolicy = OpPolicy::open("user.get");
const GET_ALL: OpPolicy = OpPolicy::open("user.get_all");
const REGISTER: OpPolicy = OpPolicy::open("user.register");
const REGISTER_ADMIN: OpPolicy = OpPolicy::open("user.register_admin");
const UPDATE: OpPolicy = OpPolicy::authenticated("user.update");
const DELETE: OpPolicy = OpPolicy::open("user.delete");
const LOGIN: OpPolicy = OpPolicy::open("user.login");
const SEARCH: OpPolicy = OpPolicy::open("user.search");
const RECOVER_PASSWORD: OpPolicy = OpPolicy::open("user.recover_password");
const UPDATE_PASSWORD: OpPolicy = OpPolicy::authenticated("user.update_password");
const VALIDATE_TOKEN: OpPolicy = OpPolicy::open("user.validate_token");
const VALIDATE_API_TOKEN: OpPolicy = OpPolicy::open("user.validate_api_token");
const GET_EXPERIENCE: OpPolicy = OpPolicy::open("user.get_experience");
const ADD_EXPERIENCE: OpPolicy = OpPolicy::open("user.add_experience");

pub struct UserGateway {
    guard: Arc<Guard>,
    backend: UserServiceClient<Channel>,
}

impl UserGateway {
    pub fn new(guard: Arc<Guard>, backend: UserServiceClient<Channel>) -> Self {
        Self { guard, backend }
    }
}

#[tonic::async_trait]
impl UserService for UserGateway {
    async fn get(&self, request: Request<UserIdRequest>) -> Result<Response<UserResponse>, Status> {
        super::forward(&self.guard, &GET, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get(req).await }
        })
        .await
    }

    async fn get_all(&self, request: Request<Empty>) -> Result<Response<UsersResponse>, Status> {
        super::forward(&self.guard, &GET_ALL, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_all(req).await }
        })
        .await
    }

    async fn register(
        &self,
        request: Request<NewUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        super::forward(&self.guard, &REGISTER, request, |req| {
            let mut client = self.backend.clone();
            async move { client.register(req).await }
        })
        .await
    }

    async fn register_admin(
        &self,
        request: Request<NewUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        super::forward(&self.guard, &REGISTER_ADMIN, request, |req| {
            let mut client = self.backend.clone();
            async move { client.register_admin(req).await }
        })
        .await
    }

    async fn update(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        super::forward(&self.guard, &UPDATE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.update(req).await }
        })
        .await
    }

    async fn delete(&self, request: Request<UserIdRequest>) -> Result<Response<Empty>, Status> {
        super::forward(&self.guard, &DELETE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.delete(req).await }
        })
        .await
    }

    async fn login(
        &self,
        request: Request<CredentialsRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        super::forward(&self.guard, &LOGIN, request, |req| {
            let mut client = self.backend.clone();
            async move { client.login(req).await }
        })
        .await
    }

    async fn search(
        &self,
        request: Request<SearchRequest>,
    ) -> Result<Response<UsersResponse>, Status> {
        super::forward(&self.guard, &SEARCH, request, |req| {
            let mut client = self.backend.clone();
            async move { client.search(req).await }
        })
        .await
    }

    async fn recover_password(
        &self,
        request: Request<PasswordRecoveryRequest>,
    ) -> Result<Response<Empty>, Status> {
        super::forward(&self.guard, &RECOVER_PASSWORD, request, |req| {
            let mut client = self.backend.clone();
            async move { client.recover_password(req).await }
        })
        .await
    }

    async fn update_password(
        &self,
        request: Request<NewPasswordRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        super::forward(&self.guard, &UPDATE_PASSWORD, request, |req| {
            let mut client = self.backend.clone();
            async move { client.update_password(req).await }
        })
        .await
    }

    async fn validate_token(
        &self,
        request: Request<TokenRequest>,
    ) -> Result<Response<TokenClaims>, Status> {
        super::forward(&self.guard, &VALIDATE_TOKEN, request, |req| {
            let mut client = self.backend.clone();
            async move { client.validate_token(req).await }
        })
        .await
    }

    async fn validate_api_token(
        &self,
        request: Request<TokenRequest>,
    ) -> Result<Response<TokenClaims>, Status> {
        super::forward(&self.guard, &VALIDATE_API_TOKEN, request, |req| {
            let mut client = self.backend.clone();
            async move { client.validate_api_token(req).await }
        })
        .await
    }

    async fn get_experience(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<ExperiencesResponse>, Status> {
        super::forward(&self.guard, &GET_EXPERIENCE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_experience(req).await }
        })
        .await
    }

    async fn add_experience(
        &self,
        request: Request<NewExperienceRequest>,
    ) -> Result<Response<ExperienceResponse>, Status> {
        super::forward(&self.guard, &ADD_EXPERIENCE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.add_experience(req).await }
        })
        .await
    }
}

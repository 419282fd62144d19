use std::sync::Arc;

use tonic::transport::Channel;
use tonic::{Request, Response, Status};

use crate::guard::{Guard, OpPolicy};
use crate::proto::job::v1::job_service_client::JobServiceClient;
use crate::proto::job::v1::job_service_server::JobService;
use crate::proto::job::v1::{Empty, JobIdRequest, JobRequest, JobResponse, JobsResponse, SearchRequest};

// Policy table. The board is publicly browsable and searchable; postings
// come from external integrations holding an API token, and the posted
// job is stamped with the token owner's id.
const GET: OpPolicy = OpPolicy::open("job.get");
const GET_ALL: OpPolicy = OpPolicy::open("job.get_all");
const CREATE: OpPolicy = OpPolicy::api_token("job.create").screened();
const DELETE: OpPolicy = OpPolicy::requires("job.delete", "job_delete");
const SEARCH: OpPolicy = OpPolicy::open("job.search").screened();

pub struct JobGateway {
    guard: Arc<Guard>,
    backend: JobServiceClient<Channel>,
}

impl JobGateway {
    pub fn new(guard: Arc<Guard>, backend: JobServiceClient<Channel>) -> Self {
        Self { guard, backend }
    }
}

#[tonic::async_trait]
impl JobService for JobGateway {
    async fn get(&self, request: Request<JobIdRequest>) -> Result<Response<JobResponse>, Status> {
        super::forward(&self.guard, &GET, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get(req).await }
        })
        .await
    }

    async fn get_all(&self, request: Request<Empty>) -> Result<Response<JobsResponse>, Status> {
        super::forward(&self.guard, &GET_ALL, request, |req| {
            let mut client = self.backend.clone();
            async move { client.get_all(req).await }
        })
        .await
    }

    async fn create(&self, request: Request<JobRequest>) -> Result<Response<JobResponse>, Status> {
        super::forward_stamped(&self.guard, &CREATE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.create(req).await }
        })
        .await
    }

    async fn delete(&self, request: Request<JobIdRequest>) -> Result<Response<Empty>, Status> {
        super::forward(&self.guard, &DELETE, request, |req| {
            let mut client = self.backend.clone();
            async move { client.delete(req).await }
        })
        .await
    }

    async fn search(
        &self,
        request: Request<SearchRequest>,
    ) -> Result<Response<JobsResponse>, Status> {
        super::forward(&self.guard, &SEARCH, request, |req| {
            let mut client = self.backend.clone();
            async move { client.search(req).await }
        })
        .await
    }
}

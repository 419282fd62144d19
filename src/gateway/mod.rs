use std::future::Future;

use tonic::{Request, Response, Status};

use crate::guard::{Guard, OpPolicy, PayloadText};
use crate::proto::StampIdentity;

pub mod connection;
pub mod job;
pub mod message;
pub mod post;
pub mod user;

pub use connection::ConnectionGateway;
pub use job::JobGateway;
pub use message::MessageGateway;
pub use post::PostGateway;
pub use user::UserGateway;

/// Runs the operation's policy, then hands the request message to the
/// backend call. The backend's response or error is returned untouched:
/// no retry, no rewrapping, no response transformation.
pub(crate) async fn forward<Req, Res, Fut, Call>(
    guard: &Guard,
    policy: &OpPolicy,
    request: Request<Req>,
    call: Call,
) -> Result<Response<Res>, Status>
where
    Req: PayloadText,
    Call: FnOnce(Req) -> Fut,
    Fut: Future<Output = Result<Response<Res>, Status>>,
{
    let payload = request.get_ref().payload_text();
    guard.check(policy, request.metadata(), &payload).await?;
    tracing::debug!("{}: forwarding to backend", policy.name);
    call(request.into_inner()).await
}

/// Like `forward`, but first overwrites the request's acting-user id with
/// the identity derived from the request credential. Public operations
/// resolve the identity leniently; when resolution fails the id is stamped
/// empty, so a caller-supplied value never survives in either case.
pub(crate) async fn forward_stamped<Req, Res, Fut, Call>(
    guard: &Guard,
    policy: &OpPolicy,
    request: Request<Req>,
    call: Call,
) -> Result<Response<Res>, Status>
where
    Req: PayloadText + StampIdentity,
    Call: FnOnce(Req) -> Fut,
    Fut: Future<Output = Result<Response<Res>, Status>>,
{
    let payload = request.get_ref().payload_text();
    let caller = match guard.check(policy, request.metadata(), &payload).await? {
        Some(caller) => Some(caller),
        None => guard.identify(request.metadata()).await,
    };
    let user_id = caller.map(|caller| caller.user_id).unwrap_or_default();

    let mut message = request.into_inner();
    message.stamp_identity(&user_id);
    tracing::debug!("{}: forwarding to backend", policy.name);
    call(message).await
}

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use portico_gateway::clients::{Backends, GrpcCredentialVerifier};
use portico_gateway::config::GatewayConfig;
use portico_gateway::guard::{Guard, PermissionTable};
use portico_gateway::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up service addresses etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env();
    tracing::info!("Starting Portico gateway on port {}", config.grpc_port);

    // All five channels come up before the listener does; an unreachable
    // backend aborts startup.
    let backends = Backends::connect(&config)
        .await
        .context("failed to connect to a backend service")?;

    let verifier = Arc::new(GrpcCredentialVerifier::new(backends.users.clone()));
    let guard = Arc::new(Guard::new(
        verifier,
        PermissionTable::new(config.role_permissions.clone()),
    ));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.grpc_port));
    tracing::info!("Gateway listening on {}", addr);

    server::router(guard, backends)
        .serve(addr)
        .await
        .context("gRPC server terminated")?;

    Ok(())
}

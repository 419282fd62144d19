use std::collections::HashMap;
use std::env;

/// Host/port pair for one backend service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendAddr {
    pub host: String,
    pub port: u16,
}

impl BackendAddr {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
        }
    }

    /// Endpoint URI for a tonic channel. Backends run in-cluster without
    /// TLS, so the scheme is plain http.
    pub fn uri(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Gateway configuration, read once at startup and passed explicitly to the
/// components that need it. There is no global config instance.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub grpc_port: u16,
    pub user_service: BackendAddr,
    pub post_service: BackendAddr,
    pub connection_service: BackendAddr,
    pub job_service: BackendAddr,
    pub message_service: BackendAddr,
    pub role_permissions: HashMap<String, Vec<String>>,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    /// Built-in configuration: localhost backends on their conventional
    /// ports and the default permission table.
    pub fn defaults() -> Self {
        Self {
            grpc_port: 8080,
            user_service: BackendAddr::new("localhost", 8085),
            post_service: BackendAddr::new("localhost", 8086),
            connection_service: BackendAddr::new("localhost", 8087),
            job_service: BackendAddr::new("localhost", 8088),
            message_service: BackendAddr::new("localhost", 8089),
            role_permissions: default_role_permissions(),
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("GATEWAY_GRPC_PORT") {
            self.grpc_port = v.parse().unwrap_or(self.grpc_port);
        }

        for (service, host_var, port_var) in [
            (&mut self.user_service, "USER_SERVICE_HOST", "USER_SERVICE_PORT"),
            (&mut self.post_service, "POST_SERVICE_HOST", "POST_SERVICE_PORT"),
            (
                &mut self.connection_service,
                "CONNECTION_SERVICE_HOST",
                "CONNECTION_SERVICE_PORT",
            ),
            (&mut self.job_service, "JOB_SERVICE_HOST", "JOB_SERVICE_PORT"),
            (
                &mut self.message_service,
                "MESSAGE_SERVICE_HOST",
                "MESSAGE_SERVICE_PORT",
            ),
        ] {
            if let Ok(v) = env::var(host_var) {
                service.host = v;
            }
            if let Ok(v) = env::var(port_var) {
                service.port = v.parse().unwrap_or(service.port);
            }
        }

        if let Ok(v) = env::var("ROLE_PERMISSIONS") {
            match parse_role_permissions(&v) {
                Ok(table) => self.role_permissions = table,
                Err(err) => {
                    tracing::warn!("Ignoring malformed ROLE_PERMISSIONS override: {}", err);
                }
            }
        }

        self
    }
}

/// `ROLE_PERMISSIONS` is a JSON object mapping role names to permission
/// lists, e.g. `{"ADMIN": ["post_write"], "USER": ["post_read"]}`.
fn parse_role_permissions(raw: &str) -> Result<HashMap<String, Vec<String>>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Built-in role -> permission table, used unless ROLE_PERMISSIONS is set.
/// Listing and deleting accounts stays admin-only.
fn default_role_permissions() -> HashMap<String, Vec<String>> {
    let admin = [
        "user_getAll",
        "user_read",
        "user_write",
        "user_delete",
        "post_read",
        "post_write",
        "post_delete",
        "post_getAll",
        "job_read",
        "job_write",
        "job_delete",
        "connection_read",
        "connection_write",
        "connection_delete",
        "block_read",
        "block_write",
        "message_read",
        "message_write",
        "chat_read",
        "chat_write",
        "notification_read",
    ];
    let user = [
        "user_read",
        "user_write",
        "post_read",
        "post_write",
        "post_delete",
        "job_read",
        "job_write",
        "job_delete",
        "connection_read",
        "connection_write",
        "connection_delete",
        "block_read",
        "block_write",
        "message_read",
        "message_write",
        "chat_read",
        "chat_write",
        "notification_read",
    ];

    let mut table = HashMap::new();
    table.insert("ADMIN".to_string(), to_owned(&admin));
    table.insert("USER".to_string(), to_owned(&user));
    table
}

fn to_owned(permissions: &[&str]) -> Vec<String> {
    permissions.iter().map(|p| p.to_string()).collect()
}

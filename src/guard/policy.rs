/// Access requirement for one exposed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Forwarded without authentication.
    Public,
    /// Caller must present a valid session token; no permission check.
    Authenticated,
    /// Caller must present a valid session token and hold the permission.
    Permission(&'static str),
    /// Caller must present a valid API token.
    ApiToken,
}

/// Guard policy for one operation. Each gateway module declares these as
/// consts, one per RPC, forming its policy table.
#[derive(Debug, Clone, Copy)]
pub struct OpPolicy {
    pub name: &'static str,
    pub access: Access,
    pub screen: bool,
}

impl OpPolicy {
    pub const fn open(name: &'static str) -> Self {
        Self {
            name,
            access: Access::Public,
            screen: false,
        }
    }

    pub const fn authenticated(name: &'static str) -> Self {
        Self {
            name,
            access: Access::Authenticated,
            screen: false,
        }
    }

    pub const fn requires(name: &'static str, permission: &'static str) -> Self {
        Self {
            name,
            access: Access::Permission(permission),
            screen: false,
        }
    }

    pub const fn api_token(name: &'static str) -> Self {
        Self {
            name,
            access: Access::ApiToken,
            screen: false,
        }
    }

    /// Puts the input screen in front of the access check.
    pub const fn screened(self) -> Self {
        Self {
            name: self.name,
            access: self.access,
            screen: true,
        }
    }
}

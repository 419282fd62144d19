use std::collections::HashMap;

/// Immutable role -> permission table, built once at startup from
/// configuration. A role absent from the table simply has no permissions;
/// lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct PermissionTable {
    roles: HashMap<String, Vec<String>>,
}

impl PermissionTable {
    pub fn new(roles: HashMap<String, Vec<String>>) -> Self {
        Self { roles }
    }

    /// Linear containment scan; permission lists are small enough that
    /// nothing fancier is warranted.
    pub fn allows(&self, role: &str, permission: &str) -> bool {
        self.roles
            .get(role)
            .map(|permissions| permissions.iter().any(|p| p == permission))
            .unwrap_or(false)
    }
}

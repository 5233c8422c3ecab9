use serde::{Deserialize, Serialize};

/// Viewer role used for display gating only; real authorization is enforced
/// by the remote API on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Employee,
}

impl Role {
    /// Resolve a role from the profile's group name.
    ///
    /// Only the exact string "Manager" grants the manager view. Everything
    /// else falls back to Employee; an unrecognized non-empty name is logged
    /// because the upstream API treating it as an employee is a permissive
    /// default, not a documented policy.
    pub fn from_group_name(name: Option<&str>) -> Role {
        match name {
            Some("Manager") => Role::Manager,
            Some("Employee") | None => Role::Employee,
            Some(other) => {
                if !other.is_empty() {
                    tracing::warn!("Unrecognized role group '{}', treating as Employee", other);
                }
                Role::Employee
            }
        }
    }

    pub fn is_manager(self) -> bool {
        matches!(self, Role::Manager)
    }
}

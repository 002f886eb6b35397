use thiserror::Error;

use crate::Role;

/// Access requirement attached to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Any authenticated principal.
    Authenticated,
    /// Principal must hold this role.
    Role(Role),
}

impl Access {
    pub fn admin() -> Self {
        Self::Role(Role::admin())
    }
}

impl core::fmt::Display for Access {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Access::Authenticated => f.write_str("authenticated"),
            Access::Role(role) => write!(f, "role={role}"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing role '{0}'")]
    MissingRole(Role),
}

/// Check an authenticated principal's roles against a route requirement.
///
/// Pure policy check: no IO, no panics.
pub fn authorize(roles: &[Role], required: &Access) -> Result<(), AuthzError> {
    match required {
        Access::Authenticated => Ok(()),
        Access::Role(role) if roles.contains(role) => Ok(()),
        Access::Role(role) => Err(AuthzError::MissingRole(role.clone())),
    }
}

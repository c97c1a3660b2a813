//! Caller roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of roles an address can hold.
///
/// Exactly one role per address. `User` is the implicit role of every
/// address with no stored assignment and is never persisted itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Operates the foundation account: initial issuance, fee parameters,
    /// denylist, role assignment.
    FoundationAdmin,
    /// Relays transfers on behalf of other parties and sweeps gas fees.
    GatewayAdmin,
    /// Ordinary user (no stored assignment).
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::FoundationAdmin => "foundation-admin",
            Role::GatewayAdmin => "gateway-admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

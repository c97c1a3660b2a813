//! Role and denylist storage traits.

use crate::StoreError;
use tessera_types::{Address, Role};

/// Trait for role assignment storage.
///
/// At most one role is stored per address; `Role::User` is the implicit
/// role of every address without a record and is never stored.
pub trait RoleStore {
    fn put_role(&self, address: &Address, role: Role) -> Result<(), StoreError>;

    /// The stored role assignment, or `None` for ordinary users.
    fn get_role(&self, address: &Address) -> Result<Option<Role>, StoreError>;
}

/// Trait for the per-address denylist flag.
pub trait DenyStore {
    fn put_denied(&self, address: &Address, denied: bool) -> Result<(), StoreError>;

    fn is_denied(&self, address: &Address) -> Result<bool, StoreError>;
}

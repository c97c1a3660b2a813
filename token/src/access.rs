//! Role resolution and denylist control.

use tracing::info;

use crate::error::TokenError;
use crate::events::{self, DenylistEvent, DENYLIST_EVENT};
use tessera_store::{DenyStore, EventSink, RoleStore};
use tessera_types::{Address, Role};

/// Resolves roles and denylist status, and applies the privileged
/// role/denylist mutations.
pub struct AccessControl<'a, S: RoleStore + DenyStore + EventSink> {
    store: &'a S,
}

impl<'a, S: RoleStore + DenyStore + EventSink> AccessControl<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The stored role, or `Role::User` when no assignment exists.
    pub fn resolve_role(&self, address: &Address) -> Result<Role, TokenError> {
        Ok(self.store.get_role(address)?.unwrap_or(Role::User))
    }

    /// Fail unless `address` holds exactly `expected`.
    pub fn require_role(&self, address: &Address, expected: Role) -> Result<(), TokenError> {
        let actual = self.resolve_role(address)?;
        if actual != expected {
            return Err(TokenError::Unauthorized(format!(
                "{address} holds role {actual}, operation requires {expected}"
            )));
        }
        Ok(())
    }

    pub fn is_denied(&self, address: &Address) -> Result<bool, TokenError> {
        Ok(self.store.is_denied(address)?)
    }

    /// Fail with `AccountDenied` when the address is denylisted.
    pub fn ensure_not_denied(&self, address: &Address) -> Result<(), TokenError> {
        if self.store.is_denied(address)? {
            return Err(TokenError::AccountDenied(address.clone()));
        }
        Ok(())
    }

    /// Denylist an address. Fails with `AlreadyDenied` when the flag is
    /// already set.
    pub fn deny(&self, caller: &Address, address: &Address) -> Result<(), TokenError> {
        self.require_role(caller, Role::FoundationAdmin)?;
        if self.store.is_denied(address)? {
            return Err(TokenError::AlreadyDenied(address.clone()));
        }
        self.store.put_denied(address, true)?;
        events::emit(
            self.store,
            DENYLIST_EVENT,
            &DenylistEvent {
                address: address.clone(),
                denied: true,
            },
        )?;
        info!(address = %address, "address denylisted");
        Ok(())
    }

    /// Remove an address from the denylist. Fails with `NotDenied` when the
    /// flag is not currently set.
    pub fn allow(&self, caller: &Address, address: &Address) -> Result<(), TokenError> {
        self.require_role(caller, Role::FoundationAdmin)?;
        if !self.store.is_denied(address)? {
            return Err(TokenError::NotDenied(address.clone()));
        }
        self.store.put_denied(address, false)?;
        events::emit(
            self.store,
            DENYLIST_EVENT,
            &DenylistEvent {
                address: address.clone(),
                denied: false,
            },
        )?;
        info!(address = %address, "address removed from denylist");
        Ok(())
    }

    /// Assign a role to an address. `Role::User` is the implicit unassigned
    /// state and cannot be stored; role assignments are not deleted.
    pub fn set_role(
        &self,
        caller: &Address,
        address: &Address,
        role: Role,
    ) -> Result<(), TokenError> {
        self.require_role(caller, Role::FoundationAdmin)?;
        if role == Role::User {
            return Err(TokenError::InvalidArgument(
                "the user role is implicit and cannot be assigned".to_string(),
            ));
        }
        self.store.put_role(address, role)?;
        info!(address = %address, role = %role, "role assigned");
        Ok(())
    }
}

//! Abstract storage and event traits for the tessera token ledger.
//!
//! The ledger core does not implement persistence, indexing, identity, or
//! event delivery; it consumes them as capabilities. Every backend (the
//! host's keyed store, an in-memory double for testing) implements these
//! traits, and the rest of the workspace depends only on the traits.
//!
//! The host execution layer treats all writes issued during one invocation
//! as an all-or-nothing unit: any error returned from the core aborts the
//! whole write-set, so no implementation needs internal rollback.

pub mod access;
pub mod allowance;
pub mod error;
pub mod event;
pub mod key;
pub mod meta;
pub mod output;

pub use access::{DenyStore, RoleStore};

/// Alias for a backend providing every collaborator capability.
///
/// Higher-level components (transfer engine, minter, fee router) coordinate
/// across several stores plus the event sink; this blanket trait saves them
/// from repeating the full bound.
pub trait Backend:
    output::OutputStore
    + allowance::AllowanceStore
    + access::RoleStore
    + access::DenyStore
    + meta::ParamStore
    + event::EventSink
{
}

impl<T> Backend for T where
    T: output::OutputStore
        + allowance::AllowanceStore
        + access::RoleStore
        + access::DenyStore
        + meta::ParamStore
        + event::EventSink
{
}
pub use allowance::AllowanceStore;
pub use error::StoreError;
pub use event::EventSink;
pub use key::composite_key;
pub use meta::ParamStore;
pub use output::{OutputRecord, OutputStore, OUTPUT_RECORD_TYPE};

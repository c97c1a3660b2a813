//! Event emission trait.

use crate::StoreError;

/// Trait for domain event delivery.
///
/// Fire-and-forget from the core's perspective: events are queued with the
/// invocation's write-set and delivered by the host after commit, so a
/// failed invocation emits nothing.
pub trait EventSink {
    fn emit(&self, name: &str, payload: &[u8]) -> Result<(), StoreError>;
}

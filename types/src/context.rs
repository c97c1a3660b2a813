//! Resolved invocation context.

use crate::address::Address;

/// Everything the identity collaborator resolves about one invocation.
///
/// The execution layer authenticates the transport credentials, assigns a
/// unique transaction id, and records which contract originated the call
/// chain. The core never sees raw credentials; it only sees this struct.
#[derive(Clone, Debug)]
pub struct CallContext {
    /// Authenticated caller address.
    pub caller: Address,
    /// Per-invocation unique identifier. Output keys created during this
    /// invocation are scoped by it, so distinct invocations never collide.
    pub tx_id: String,
    /// Name of the contract that originated the current call chain.
    pub initiating_contract: String,
    /// Name of this contract.
    pub own_contract: String,
}

impl CallContext {
    /// True when the invocation was addressed to this contract directly
    /// rather than arriving through a cross-contract call.
    pub fn is_direct_invocation(&self) -> bool {
        self.initiating_contract == self.own_contract
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_invocation() {
        let ctx = CallContext {
            caller: Address::zero(),
            tx_id: "tx-1".into(),
            initiating_contract: "tessera".into(),
            own_contract: "tessera".into(),
        };
        assert!(ctx.is_direct_invocation());
    }

    #[test]
    fn test_cross_contract_invocation() {
        let ctx = CallContext {
            caller: Address::zero(),
            tx_id: "tx-1".into(),
            initiating_contract: "bridge".into(),
            own_contract: "tessera".into(),
        };
        assert!(!ctx.is_direct_invocation());
    }
}

//! Transfer classification and execution.
//!
//! Every transfer is first classified into a [`Route`], a closed
//! description of who is debited, who is credited, and whether the gas fee
//! is split out, and then executed by one generic applier. The branches
//! themselves never touch the output ledger directly, which keeps each one
//! independently testable and the debit/credit code in one place.

use serde::Deserialize;
use tracing::{debug, info};

use crate::access::AccessControl;
use crate::error::TokenError;
use crate::events::{self, ApprovalEvent, TransferEvent, APPROVAL_EVENT, TRANSFER_EVENT};
use tessera_ledger::{AllowanceLedger, OutputLedger};
use tessera_store::Backend;
use tessera_types::{Address, Amount, CallContext, Role};

/// How a classified transfer moves value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// No value moves; the transfer record is still emitted.
    NoOp,
    /// Debit `from`, credit the full amount to `to`.
    Direct,
    /// Debit `from`, credit `amount − fee` to `to` and `fee` to the
    /// foundation.
    FeeSplit { fee: Amount },
}

/// A fully classified transfer, ready to execute.
#[derive(Clone, Debug)]
pub struct RoutedTransfer {
    pub route: Route,
    /// Authenticated caller.
    pub operator: Address,
    /// Effective sender after routing.
    pub from: Address,
    /// Effective destination after routing.
    pub to: Address,
    /// The original requested amount (pre-fee).
    pub amount: Amount,
}

/// Relay payload supplied by a gateway admin in place of a destination
/// address: names the party the gateway acted for.
#[derive(Debug, Deserialize)]
struct RelayPayload {
    account: String,
}

/// Classifies and executes transfers, approvals, and allowance spends.
pub struct TransferEngine<'a, S: Backend> {
    store: &'a S,
}

impl<'a, S: Backend> TransferEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn access(&self) -> AccessControl<'a, S> {
        AccessControl::new(self.store)
    }

    /// Transfer `amount` from the caller to `destination`.
    ///
    /// `destination` is a raw 40-hex address, except when the caller holds
    /// the gateway-admin role, in which case it is a JSON relay payload
    /// naming the real sender.
    pub fn transfer(
        &self,
        ctx: &CallContext,
        destination: &str,
        amount: &str,
    ) -> Result<(), TokenError> {
        let amount = Amount::parse(amount)?;
        let routed = self.classify(ctx, destination, amount)?;
        self.access().ensure_not_denied(&routed.from)?;
        self.access().ensure_not_denied(&routed.to)?;
        self.apply(ctx, &routed)?;
        info!(
            operator = %routed.operator,
            from = %routed.from,
            to = %routed.to,
            amount = %routed.amount,
            route = ?routed.route,
            "transfer applied"
        );
        Ok(())
    }

    /// Classify a transfer without executing it.
    ///
    /// Branches are evaluated in fixed priority order; the first match
    /// wins. Destination address format is enforced on every branch except
    /// the gateway relay, which is trusted to supply a structured payload.
    pub fn classify(
        &self,
        ctx: &CallContext,
        destination: &str,
        amount: Amount,
    ) -> Result<RoutedTransfer, TokenError> {
        let foundation = self.store.foundation()?.ok_or(TokenError::NotInitialized)?;
        let gas_fee = self.store.gas_fee()?.unwrap_or(Amount::ZERO);
        let role = self.access().resolve_role(&ctx.caller)?;

        // 1. Gateway relay: the destination argument carries the real
        //    sender; the gateway is reimbursed by crediting the foundation.
        if role == Role::GatewayAdmin {
            let payload: RelayPayload = serde_json::from_str(destination)
                .map_err(|e| TokenError::InvalidArgument(format!("relay payload: {e}")))?;
            let real_sender = Address::parse(&payload.account)?;
            let route = if real_sender == foundation {
                Route::NoOp
            } else {
                Route::Direct
            };
            return Ok(RoutedTransfer {
                route,
                operator: ctx.caller.clone(),
                from: real_sender,
                to: foundation,
                amount,
            });
        }

        // 2. Bridge-initiated: the call chain originates from the
        //    registered bridge contract; value moves from the bridge's own
        //    account.
        if let Some(bridge) = self.store.bridge_contract()? {
            if ctx.initiating_contract == bridge.as_str() {
                let dest = Address::parse(destination)?;
                if ctx.caller == foundation {
                    // Withdrawal: the foundation drains the bridge account.
                    return Ok(RoutedTransfer {
                        route: Route::Direct,
                        operator: ctx.caller.clone(),
                        from: bridge,
                        to: foundation,
                        amount,
                    });
                }
                if dest == bridge {
                    // The bridge is the effective sender on this branch.
                    return Err(TokenError::SelfTransfer);
                }
                if amount <= gas_fee {
                    return Err(TokenError::InvalidAmount(format!(
                        "amount {amount} must exceed the gas fee {gas_fee}"
                    )));
                }
                return Ok(RoutedTransfer {
                    route: Route::FeeSplit { fee: gas_fee },
                    operator: ctx.caller.clone(),
                    from: bridge,
                    to: dest,
                    amount,
                });
            }
        }

        let dest = Address::parse(destination)?;
        let sender = ctx.caller.clone();

        // Foundation-involved transfers are fee-free.
        if sender == foundation && dest == foundation {
            return Ok(RoutedTransfer {
                route: Route::NoOp,
                operator: sender.clone(),
                from: sender,
                to: dest,
                amount,
            });
        }
        if sender == foundation || dest == foundation {
            return Ok(RoutedTransfer {
                route: Route::Direct,
                operator: sender.clone(),
                from: sender,
                to: dest,
                amount,
            });
        }

        // 6. Ordinary user transfer: fee split.
        if sender == dest {
            return Err(TokenError::SelfTransfer);
        }
        if amount <= gas_fee {
            return Err(TokenError::InvalidAmount(format!(
                "amount {amount} must exceed the gas fee {gas_fee}"
            )));
        }
        Ok(RoutedTransfer {
            route: Route::FeeSplit { fee: gas_fee },
            operator: sender.clone(),
            from: sender,
            to: dest,
            amount,
        })
    }

    /// Execute a routed transfer: the debit, the credit leg(s), and the
    /// transfer record.
    fn apply(&self, ctx: &CallContext, routed: &RoutedTransfer) -> Result<(), TokenError> {
        let outputs = OutputLedger::new(self.store);
        match routed.route {
            Route::NoOp => {
                debug!(from = %routed.from, to = %routed.to, "pass-through transfer, no value moved");
            }
            Route::Direct => {
                outputs.debit(&routed.from, &ctx.tx_id, routed.amount)?;
                outputs.credit(&routed.to, &ctx.tx_id, routed.amount)?;
            }
            Route::FeeSplit { fee } => {
                let foundation = self.store.foundation()?.ok_or(TokenError::NotInitialized)?;
                let net = routed.amount.checked_sub(fee).ok_or(TokenError::Overflow)?;
                outputs.debit(&routed.from, &ctx.tx_id, routed.amount)?;
                if routed.to == foundation {
                    // Net and fee legs land on the same account; one merged
                    // output keeps the (owner, tx_id) key unique.
                    outputs.credit(&foundation, &ctx.tx_id, routed.amount)?;
                } else {
                    outputs.credit(&routed.to, &ctx.tx_id, net)?;
                    outputs.credit(&foundation, &ctx.tx_id, fee)?;
                }
            }
        }
        events::emit(
            self.store,
            TRANSFER_EVENT,
            &TransferEvent {
                operator: routed.operator.clone(),
                from: routed.from.clone(),
                to: routed.to.clone(),
                value: routed.amount,
            },
        )
    }

    /// Overwrite the caller's allowance for `spender` with `amount`.
    ///
    /// The approved amount may not exceed the caller's current balance at
    /// approval time, so an allowance is always spendable the moment it is
    /// written.
    pub fn approve(
        &self,
        ctx: &CallContext,
        spender: &str,
        amount: &str,
    ) -> Result<(), TokenError> {
        let spender = Address::parse(spender)?;
        let amount = Amount::parse(amount)?;
        let balance = OutputLedger::new(self.store).total_balance(&ctx.caller)?;
        if amount > balance {
            return Err(TokenError::InsufficientBalance {
                have: balance,
                need: amount,
            });
        }
        AllowanceLedger::new(self.store).set_allowance(&ctx.caller, &spender, amount)?;
        events::emit(
            self.store,
            APPROVAL_EVENT,
            &ApprovalEvent {
                owner: ctx.caller.clone(),
                spender,
                value: amount,
            },
        )
    }

    /// The remaining allowance for `(owner, spender)`, zero when none.
    pub fn allowance(&self, owner: &str, spender: &str) -> Result<Amount, TokenError> {
        let owner = Address::parse(owner)?;
        let spender = Address::parse(spender)?;
        Ok(AllowanceLedger::new(self.store).allowance(&owner, &spender)?)
    }

    /// Spend the caller's allowance to move `amount` from `owner` to
    /// `destination`.
    ///
    /// Allowance spends move the full amount with no gas-fee split; the
    /// fee models gas reimbursement for directly-submitted transfers and
    /// does not apply to delegated spends.
    pub fn transfer_from(
        &self,
        ctx: &CallContext,
        owner: &str,
        destination: &str,
        amount: &str,
    ) -> Result<(), TokenError> {
        let owner = Address::parse(owner)?;
        let dest = Address::parse(destination)?;
        let amount = Amount::parse(amount)?;
        if owner == dest {
            return Err(TokenError::SelfTransfer);
        }
        self.access().ensure_not_denied(&owner)?;
        self.access().ensure_not_denied(&dest)?;

        AllowanceLedger::new(self.store).spend_allowance(&owner, &ctx.caller, amount)?;
        let outputs = OutputLedger::new(self.store);
        outputs.debit(&owner, &ctx.tx_id, amount)?;
        outputs.credit(&dest, &ctx.tx_id, amount)?;
        events::emit(
            self.store,
            TRANSFER_EVENT,
            &TransferEvent {
                operator: ctx.caller.clone(),
                from: owner.clone(),
                to: dest.clone(),
                value: amount,
            },
        )?;
        info!(
            operator = %ctx.caller,
            owner = %owner,
            to = %dest,
            amount = %amount,
            "allowance spend applied"
        );
        Ok(())
    }
}

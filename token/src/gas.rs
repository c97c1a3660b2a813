//! Privileged sweep of accumulated gas-fee balances to the foundation.

use tracing::info;

use crate::access::AccessControl;
use crate::error::TokenError;
use crate::events::{self, FeeEvent, TransferEvent, FEE_CEILING_EVENT, GAS_FEE_EVENT, TRANSFER_EVENT};
use tessera_ledger::OutputLedger;
use tessera_store::Backend;
use tessera_types::{params::MAX_FEE_SWEEP, Address, Amount, CallContext, Role};

/// Sweeps gas-fee balances from user accounts to the foundation, and owns
/// the fee parameters.
///
/// Two privilege variants share one routing core: [`GasFeeRouter::sweep`]
/// resolves the gateway-admin role and honors the stored, configurable
/// ceiling; [`GasFeeRouter::sweep_fixed`] checks the configured gateway
/// address and uses the hardcoded [`MAX_FEE_SWEEP`] bound.
pub struct GasFeeRouter<'a, S: Backend> {
    store: &'a S,
}

impl<'a, S: Backend> GasFeeRouter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn access(&self) -> AccessControl<'a, S> {
        AccessControl::new(self.store)
    }

    /// Role-resolved sweep with the configurable ceiling.
    pub fn sweep(&self, ctx: &CallContext, account: &str, amount: &str) -> Result<(), TokenError> {
        self.access().require_role(&ctx.caller, Role::GatewayAdmin)?;
        let ceiling = self
            .store
            .fee_ceiling()?
            .unwrap_or(Amount::new(MAX_FEE_SWEEP));
        self.route(ctx, account, amount, ceiling)
    }

    /// Fixed-address sweep with the hardcoded ceiling.
    pub fn sweep_fixed(
        &self,
        ctx: &CallContext,
        account: &str,
        amount: &str,
    ) -> Result<(), TokenError> {
        let gateway = self
            .store
            .gateway_admin()?
            .ok_or(TokenError::NotInitialized)?;
        if ctx.caller != gateway {
            return Err(TokenError::Unauthorized(format!(
                "{} is not the gateway admin",
                ctx.caller
            )));
        }
        self.route(ctx, account, amount, Amount::new(MAX_FEE_SWEEP))
    }

    /// Shared sweep core: validate, guard, then move `amount` from the
    /// target account to the foundation.
    fn route(
        &self,
        ctx: &CallContext,
        account: &str,
        amount: &str,
        max: Amount,
    ) -> Result<(), TokenError> {
        let account = Address::parse(account)?;
        let amount = Amount::parse(amount)?;
        if amount.is_zero() {
            return Err(TokenError::InvalidAmount(
                "sweep amount must be positive".to_string(),
            ));
        }
        if amount > max {
            return Err(TokenError::InvalidAmount(format!(
                "sweep amount {amount} exceeds the maximum {max}"
            )));
        }
        self.access().ensure_not_denied(&ctx.caller)?;
        self.access().ensure_not_denied(&account)?;
        // A sweep must be addressed to this contract directly; a
        // cross-contract call cannot masquerade as one.
        if !ctx.is_direct_invocation() {
            return Err(TokenError::Unauthorized(format!(
                "sweep invoked through contract {}",
                ctx.initiating_contract
            )));
        }
        let foundation = self.store.foundation()?.ok_or(TokenError::NotInitialized)?;
        if account == foundation {
            // Fees already sit with the foundation.
            return Ok(());
        }

        let outputs = OutputLedger::new(self.store);
        outputs.debit(&account, &ctx.tx_id, amount)?;
        outputs.credit(&foundation, &ctx.tx_id, amount)?;
        events::emit(
            self.store,
            TRANSFER_EVENT,
            &TransferEvent {
                operator: ctx.caller.clone(),
                from: account.clone(),
                to: foundation.clone(),
                value: amount,
            },
        )?;
        info!(account = %account, amount = %amount, "gas fees swept to foundation");
        Ok(())
    }

    /// Update the gas fee deducted from ordinary and bridge transfers.
    pub fn set_gas_fee(&self, ctx: &CallContext, amount: &str) -> Result<(), TokenError> {
        self.access()
            .require_role(&ctx.caller, Role::FoundationAdmin)?;
        let amount = Amount::parse(amount)?;
        self.store.set_gas_fee(amount)?;
        events::emit(self.store, GAS_FEE_EVENT, &FeeEvent { value: amount })?;
        info!(fee = %amount, "gas fee updated");
        Ok(())
    }

    /// Update the per-sweep ceiling used by the role-resolved variant.
    pub fn set_fee_ceiling(&self, ctx: &CallContext, amount: &str) -> Result<(), TokenError> {
        self.access()
            .require_role(&ctx.caller, Role::FoundationAdmin)?;
        let amount = Amount::parse(amount)?;
        if amount.is_zero() {
            return Err(TokenError::InvalidAmount(
                "fee ceiling must be positive".to_string(),
            ));
        }
        self.store.set_fee_ceiling(amount)?;
        events::emit(self.store, FEE_CEILING_EVENT, &FeeEvent { value: amount })?;
        info!(ceiling = %amount, "fee ceiling updated");
        Ok(())
    }
}

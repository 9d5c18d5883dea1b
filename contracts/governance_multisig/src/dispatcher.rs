//! Action dispatcher
//!
//! Maps an approved transaction's action to the mutation it performs. Governance
//! parameters are changed in place after re-validation; everything else is
//! delegated to the token contract, which must already list this contract as
//! its authority.

use soroban_sdk::{Address, Env};

use crate::error::GovernanceError;
use crate::events;
use crate::registry;
use crate::token_admin::TokenAdminClient;
use crate::types::{Action, GovernanceState};

/// Apply `action` on behalf of transaction `tx_id`.
///
/// `state` is updated in place for parameter changes; the caller persists it.
pub fn dispatch(
    env: &Env,
    state: &mut GovernanceState,
    tx_id: u64,
    action: &Action,
) -> Result<(), GovernanceError> {
    match action {
        Action::SetRequiredApprovals(required) => {
            registry::validate_required_approvals(*required, state.signer_count())?;
            let old = state.required_approvals;
            state.required_approvals = *required;
            events::emit_required_approvals_updated(env, tx_id, old, *required);
        }
        Action::SetCooldownPeriod(period) => {
            registry::validate_cooldown_period(*period)?;
            let old = state.cooldown_period;
            state.cooldown_period = *period;
            events::emit_cooldown_period_updated(env, tx_id, old, *period);
        }
        Action::SetBlacklist(account, value) => {
            let token = linked_token(env, state)?;
            token_call(token.try_set_blacklist(&governance(env), account, value))?;
        }
        Action::SetWhitelist(account, value) => {
            let token = linked_token(env, state)?;
            token_call(token.try_set_whitelist(&governance(env), account, value))?;
        }
        Action::SetRestricted(account, value) => {
            let token = linked_token(env, state)?;
            token_call(token.try_set_restricted(&governance(env), account, value))?;
        }
        Action::SetNoSellLimit(account, value) => {
            let token = linked_token(env, state)?;
            token_call(token.try_set_no_sell_limit(&governance(env), account, value))?;
        }
        Action::SetLiquidityPool(pool, value) => {
            let token = linked_token(env, state)?;
            token_call(token.try_set_liquidity_pool(&governance(env), pool, value))?;
        }
        Action::Unpause => {
            let token = linked_token(env, state)?;
            token_call(token.try_emergency_unpause(&governance(env)))?;
        }
        Action::SetBridgeAddress(bridge) => {
            let token = linked_token(env, state)?;
            token_call(token.try_set_bridge_address(&governance(env), bridge))?;
        }
        Action::SetBondAddress(bond) => {
            let token = linked_token(env, state)?;
            token_call(token.try_set_bond_address(&governance(env), bond))?;
        }
    }

    Ok(())
}

/// Collapse the outcome of a `try_*` token call.
///
/// Token error codes live in a different namespace from `GovernanceError`, so
/// any failure reported by the token (or the host) becomes `TokenCallFailed`.
pub fn token_call<T, C, E>(result: Result<Result<T, C>, E>) -> Result<T, GovernanceError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        _ => Err(GovernanceError::TokenCallFailed),
    }
}

fn governance(env: &Env) -> Address {
    env.current_contract_address()
}

/// Client for the linked token, provided its authority is this contract
pub fn linked_token<'a>(
    env: &Env,
    state: &GovernanceState,
) -> Result<TokenAdminClient<'a>, GovernanceError> {
    let token = state
        .token_program
        .as_ref()
        .ok_or(GovernanceError::GovernanceNotLinked)?;
    let client = TokenAdminClient::new(env, token);

    match client.try_authority() {
        Ok(Ok(authority)) if authority == governance(env) => Ok(client),
        _ => Err(GovernanceError::GovernanceNotLinked),
    }
}

/// Whether the linked token currently lists this contract as its authority
pub fn is_linked(env: &Env, state: &GovernanceState) -> bool {
    linked_token(env, state).is_ok()
}

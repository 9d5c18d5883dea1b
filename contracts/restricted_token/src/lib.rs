#![no_std]

//! # NC Token Restricted Transfer Ledger
//!
//! A Soroban token ledger whose transfers pass through a restriction gate
//! (blacklist, emergency pause, rolling sell limit, restricted accounts) and
//! whose administrative surface is meant to be driven by the governance
//! multisig once authority has been handed over.
//!
//! ## Features
//! - Blacklist / whitelist / restricted / sell-limit exemption flags per account
//! - Liquidity-pool registry exempting pool deposits from the sell limit
//! - Rolling sell limit: 10% of the window-start balance per 24 hours
//! - Emergency pause blocking every transfer
//! - Two-step authority handover with a 7 day cooldown
//! - Governance-only mint and burn with an optional supply cap
//!
//! ## Security
//! - Every administrative call names its caller, which must equal the
//!   stored authority and must authorize the invocation
//! - After handover only the governance contract (invoking directly) can act
//! - Failed calls leave all records unchanged

use soroban_sdk::{contract, contractimpl, Address, Env};

mod error;
mod events;
mod gate;
mod storage;
mod types;

pub use error::TokenError;
pub use gate::TransferParties;
pub use storage::DataKey;
pub use types::{
    SellTracker, TokenState, DEFAULT_SELL_LIMIT_PERCENT, DEFAULT_SELL_LIMIT_PERIOD,
    GOVERNANCE_HANDOVER_COOLDOWN,
};

#[contract]
pub struct RestrictedToken;

#[contractimpl]
impl RestrictedToken {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the token with its first administrative authority
    ///
    /// # Arguments
    /// * `authority` - Initial administrator (usually a deployment keypair)
    /// * `max_supply` - Optional supply cap
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Token has already been initialized
    /// * `InvalidAmount` - Supply cap is not positive
    pub fn initialize(
        env: Env,
        authority: Address,
        max_supply: Option<i128>,
    ) -> Result<(), TokenError> {
        if storage::has_state(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        if let Some(cap) = max_supply {
            if cap <= 0 {
                return Err(TokenError::InvalidAmount);
            }
        }

        authority.require_auth();

        let state = TokenState {
            authority: authority.clone(),
            emergency_paused: false,
            sell_limit_percent: DEFAULT_SELL_LIMIT_PERCENT,
            sell_limit_period: DEFAULT_SELL_LIMIT_PERIOD,
            pending_governance: None,
            pending_governance_proposed_at: None,
            bridge_address: None,
            bond_address: None,
            max_supply,
            current_supply: 0,
            mint_revoked: false,
        };
        storage::set_state(&env, &state);

        events::emit_initialized(&env, &authority, max_supply);
        Ok(())
    }

    // ========================================================================
    // Authority Handover
    // ========================================================================

    /// Propose handing administrative authority to `new_authority`
    ///
    /// Only one proposal is tracked; proposing again replaces the target and
    /// restarts the cooldown.
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the current authority
    /// * `InvalidAccount` - `new_authority` is already the authority
    pub fn propose_governance_change(
        env: Env,
        caller: Address,
        new_authority: Address,
    ) -> Result<(), TokenError> {
        let mut state = require_authority(&env, &caller)?;

        if new_authority == state.authority {
            return Err(TokenError::InvalidAccount);
        }

        let now = env.ledger().timestamp();
        state.pending_governance = Some(new_authority.clone());
        state.pending_governance_proposed_at = Some(now);
        storage::set_state(&env, &state);

        events::emit_governance_proposed(
            &env,
            &state.authority,
            &new_authority,
            now.saturating_add(GOVERNANCE_HANDOVER_COOLDOWN),
        );
        Ok(())
    }

    /// Commit a proposed handover once the cooldown has elapsed
    ///
    /// Performed by the outgoing authority. Afterwards the caller has no
    /// administrative power left.
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the current authority
    /// * `ProposalMissing` - Nothing has been proposed
    /// * `MismatchedTarget` - `new_authority` differs from the proposal
    /// * `CooldownNotExpired` - 7 days have not passed since the proposal
    pub fn set_governance(
        env: Env,
        caller: Address,
        new_authority: Address,
    ) -> Result<(), TokenError> {
        let mut state = require_authority(&env, &caller)?;

        let (pending, proposed_at) = match (
            state.pending_governance.clone(),
            state.pending_governance_proposed_at,
        ) {
            (Some(pending), Some(proposed_at)) => (pending, proposed_at),
            _ => return Err(TokenError::ProposalMissing),
        };

        if pending != new_authority {
            return Err(TokenError::MismatchedTarget);
        }

        let executable_at = proposed_at
            .checked_add(GOVERNANCE_HANDOVER_COOLDOWN)
            .ok_or(TokenError::MathOverflow)?;
        if env.ledger().timestamp() < executable_at {
            return Err(TokenError::CooldownNotExpired);
        }

        let previous = state.authority.clone();
        state.authority = new_authority;
        state.pending_governance = None;
        state.pending_governance_proposed_at = None;
        storage::set_state(&env, &state);

        events::emit_governance_changed(&env, &previous, &state.authority);
        Ok(())
    }

    /// Withdraw a pending handover proposal
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the current authority
    /// * `ProposalMissing` - Nothing has been proposed
    pub fn cancel_governance_change(env: Env, caller: Address) -> Result<(), TokenError> {
        let mut state = require_authority(&env, &caller)?;

        let pending = state
            .pending_governance
            .take()
            .ok_or(TokenError::ProposalMissing)?;
        state.pending_governance_proposed_at = None;
        storage::set_state(&env, &state);

        events::emit_governance_cancelled(&env, &state.authority, &pending);
        Ok(())
    }

    // ========================================================================
    // Administrative Surface
    // ========================================================================

    /// Set or clear the emergency pause
    pub fn set_emergency_pause(env: Env, caller: Address, value: bool) -> Result<(), TokenError> {
        let mut state = require_authority(&env, &caller)?;
        state.emergency_paused = value;
        storage::set_state(&env, &state);

        events::emit_pause_changed(&env, value);
        Ok(())
    }

    /// Clear the emergency pause
    pub fn emergency_unpause(env: Env, caller: Address) -> Result<(), TokenError> {
        Self::set_emergency_pause(env, caller, false)
    }

    /// Blacklist or unblacklist `account`; blacklisted parties cannot send or receive
    pub fn set_blacklist(
        env: Env,
        caller: Address,
        account: Address,
        value: bool,
    ) -> Result<(), TokenError> {
        require_authority(&env, &caller)?;
        storage::set_flag(&env, &DataKey::Blacklist(account.clone()), value);
        events::emit_blacklist_changed(&env, &account, value);
        Ok(())
    }

    /// Whitelist `account`, exempting it from the sell limit
    pub fn set_whitelist(
        env: Env,
        caller: Address,
        account: Address,
        value: bool,
    ) -> Result<(), TokenError> {
        require_authority(&env, &caller)?;
        storage::set_flag(&env, &DataKey::Whitelist(account.clone()), value);
        events::emit_whitelist_changed(&env, &account, value);
        Ok(())
    }

    /// Restrict `account` from sending or receiving
    pub fn set_restricted(
        env: Env,
        caller: Address,
        account: Address,
        value: bool,
    ) -> Result<(), TokenError> {
        require_authority(&env, &caller)?;
        storage::set_flag(&env, &DataKey::Restricted(account.clone()), value);
        events::emit_restricted_changed(&env, &account, value);
        Ok(())
    }

    /// Exempt `account` from the sell limit
    pub fn set_no_sell_limit(
        env: Env,
        caller: Address,
        account: Address,
        value: bool,
    ) -> Result<(), TokenError> {
        require_authority(&env, &caller)?;
        storage::set_flag(&env, &DataKey::NoSellLimit(account.clone()), value);
        events::emit_no_sell_limit_changed(&env, &account, value);
        Ok(())
    }

    /// Mark or unmark `pool` as a liquidity pool
    ///
    /// # Errors
    /// * `InvalidAccount` - `pool` is this token contract
    pub fn set_liquidity_pool(
        env: Env,
        caller: Address,
        pool: Address,
        value: bool,
    ) -> Result<(), TokenError> {
        require_authority(&env, &caller)?;
        if pool == env.current_contract_address() {
            return Err(TokenError::InvalidAccount);
        }
        storage::set_flag(&env, &DataKey::LiquidityPool(pool.clone()), value);
        events::emit_liquidity_pool_changed(&env, &pool, value);
        Ok(())
    }

    /// Record the bridge contract address
    pub fn set_bridge_address(env: Env, caller: Address, bridge: Address) -> Result<(), TokenError> {
        let mut state = require_authority(&env, &caller)?;
        let previous = state.bridge_address.replace(bridge.clone());
        storage::set_state(&env, &state);

        events::emit_bridge_changed(&env, previous, &bridge);
        Ok(())
    }

    /// Record the bond contract address
    pub fn set_bond_address(env: Env, caller: Address, bond: Address) -> Result<(), TokenError> {
        let mut state = require_authority(&env, &caller)?;
        let previous = state.bond_address.replace(bond.clone());
        storage::set_state(&env, &state);

        events::emit_bond_changed(&env, previous, &bond);
        Ok(())
    }

    // ========================================================================
    // Supply
    // ========================================================================

    /// Mint `amount` to `to`
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the authority
    /// * `MintAuthorityRevoked` - Minting has been permanently disabled
    /// * `Paused` - Emergency pause is active
    /// * `Blacklisted` - Recipient is blacklisted
    /// * `InvalidAmount` - Amount is not positive
    /// * `SupplyCapExceeded` - Mint would exceed `max_supply`
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        let mut state = require_authority(&env, &caller)?;

        if state.mint_revoked {
            return Err(TokenError::MintAuthorityRevoked);
        }
        if state.emergency_paused {
            return Err(TokenError::Paused);
        }
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }
        if storage::get_flag(&env, &DataKey::Blacklist(to.clone())) {
            return Err(TokenError::Blacklisted);
        }

        let new_supply = state
            .current_supply
            .checked_add(amount)
            .ok_or(TokenError::MathOverflow)?;
        if let Some(cap) = state.max_supply {
            if new_supply > cap {
                return Err(TokenError::SupplyCapExceeded);
            }
        }

        let balance = storage::get_balance(&env, &to)
            .checked_add(amount)
            .ok_or(TokenError::MathOverflow)?;
        storage::set_balance(&env, &to, balance);

        state.current_supply = new_supply;
        storage::set_state(&env, &state);

        events::emit_minted(&env, &to, amount, new_supply);
        Ok(())
    }

    /// Burn `amount` from `from`
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the authority
    /// * `Paused` - Emergency pause is active
    /// * `InvalidAmount` - Amount is not positive
    /// * `InsufficientBalance` - `from` holds less than `amount`
    pub fn burn(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), TokenError> {
        let mut state = require_authority(&env, &caller)?;

        if state.emergency_paused {
            return Err(TokenError::Paused);
        }
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let balance = storage::get_balance(&env, &from);
        if balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        storage::set_balance(&env, &from, balance - amount);

        state.current_supply = state
            .current_supply
            .checked_sub(amount)
            .ok_or(TokenError::MathOverflow)?;
        storage::set_state(&env, &state);

        events::emit_burned(&env, &from, amount, state.current_supply);
        Ok(())
    }

    /// Permanently disable minting
    pub fn revoke_mint_authority(env: Env, caller: Address) -> Result<(), TokenError> {
        let mut state = require_authority(&env, &caller)?;

        if state.emergency_paused {
            return Err(TokenError::Paused);
        }

        state.mint_revoked = true;
        storage::set_state(&env, &state);

        events::emit_mint_revoked(&env, &caller);
        Ok(())
    }

    // ========================================================================
    // Transfers
    // ========================================================================

    /// Transfer `amount` from `from` to `to` through the transfer gate
    ///
    /// # Errors
    /// * `Blacklisted` - Sender or recipient is blacklisted
    /// * `Paused` - Emergency pause is active
    /// * `SellLimitExceeded` - Rolling sell limit would be exceeded
    /// * `Restricted` - Sender or recipient is restricted
    /// * `InvalidAmount` - Amount is negative
    /// * `InsufficientBalance` - Sender holds less than `amount`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        let state = storage::get_state(&env)?;

        from.require_auth();

        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }

        let parties = TransferParties {
            sender_blacklisted: storage::get_flag(&env, &DataKey::Blacklist(from.clone())),
            recipient_blacklisted: storage::get_flag(&env, &DataKey::Blacklist(to.clone())),
            sender_whitelisted: storage::get_flag(&env, &DataKey::Whitelist(from.clone())),
            sender_no_sell_limit: storage::get_flag(&env, &DataKey::NoSellLimit(from.clone())),
            sender_restricted: storage::get_flag(&env, &DataKey::Restricted(from.clone())),
            recipient_restricted: storage::get_flag(&env, &DataKey::Restricted(to.clone())),
            recipient_is_pool: storage::get_flag(&env, &DataKey::LiquidityPool(to.clone())),
        };

        let from_balance = storage::get_balance(&env, &from);
        let tracker = gate::check_transfer(
            &state,
            &parties,
            storage::get_sell_tracker(&env, &from),
            from_balance,
            amount,
            env.ledger().timestamp(),
        )?;

        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }

        if let Some(tracker) = tracker {
            storage::set_sell_tracker(&env, &from, &tracker);
        }

        if from != to {
            let to_balance = storage::get_balance(&env, &to)
                .checked_add(amount)
                .ok_or(TokenError::MathOverflow)?;
            storage::set_balance(&env, &from, from_balance - amount);
            storage::set_balance(&env, &to, to_balance);
        }

        events::emit_transferred(&env, &from, &to, amount);
        Ok(())
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    /// Full token state
    pub fn get_state(env: Env) -> Result<TokenState, TokenError> {
        storage::get_state(&env)
    }

    /// Current administrative authority
    pub fn authority(env: Env) -> Result<Address, TokenError> {
        Ok(storage::get_state(&env)?.authority)
    }

    /// Whether the emergency pause is active
    pub fn is_paused(env: Env) -> Result<bool, TokenError> {
        Ok(storage::get_state(&env)?.emergency_paused)
    }

    /// Balance of `account` (zero if it never held tokens)
    pub fn balance(env: Env, account: Address) -> i128 {
        storage::get_balance(&env, &account)
    }

    /// Tokens currently in circulation
    pub fn total_supply(env: Env) -> Result<i128, TokenError> {
        Ok(storage::get_state(&env)?.current_supply)
    }

    /// Check if `account` is blacklisted
    pub fn is_blacklisted(env: Env, account: Address) -> bool {
        storage::get_flag(&env, &DataKey::Blacklist(account))
    }

    /// Check if `account` is whitelisted
    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        storage::get_flag(&env, &DataKey::Whitelist(account))
    }

    /// Check if `account` is restricted
    pub fn is_restricted(env: Env, account: Address) -> bool {
        storage::get_flag(&env, &DataKey::Restricted(account))
    }

    /// Check if `account` is exempt from the sell limit
    pub fn has_no_sell_limit(env: Env, account: Address) -> bool {
        storage::get_flag(&env, &DataKey::NoSellLimit(account))
    }

    /// Check if `pool` is a registered liquidity pool
    pub fn is_liquidity_pool(env: Env, pool: Address) -> bool {
        storage::get_flag(&env, &DataKey::LiquidityPool(pool))
    }

    /// Sell window of `account`, if it has sold under the limit
    pub fn get_sell_tracker(env: Env, account: Address) -> Option<SellTracker> {
        storage::get_sell_tracker(&env, &account)
    }
}

/// Load state and check that `caller` is the authority and has signed
fn require_authority(env: &Env, caller: &Address) -> Result<TokenState, TokenError> {
    let state = storage::get_state(env)?;
    if *caller != state.authority {
        return Err(TokenError::Unauthorized);
    }
    caller.require_auth();
    Ok(state)
}

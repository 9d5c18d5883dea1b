//! Storage keys and helpers for the restricted token contract

use soroban_sdk::{contracttype, Address, Env};

use crate::error::TokenError;
use crate::types::{SellTracker, TokenState};

/// Storage keys for the token contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Token-wide state (instance storage)
    State,
    /// Blacklist flag per account (persistent storage)
    Blacklist(Address),
    /// Whitelist flag per account (persistent storage)
    Whitelist(Address),
    /// Restriction flag per account (persistent storage)
    Restricted(Address),
    /// Sell-limit exemption per account (persistent storage)
    NoSellLimit(Address),
    /// Liquidity pool marker per address (persistent storage)
    LiquidityPool(Address),
    /// Rolling sell-limit tracker per sender (persistent storage)
    SellTracker(Address),
    /// Token balance per account (persistent storage)
    Balance(Address),
}

// ============================================================================
// State Helpers
// ============================================================================

pub fn has_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::State)
}

pub fn get_state(env: &Env) -> Result<TokenState, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_state(env: &Env, state: &TokenState) {
    env.storage().instance().set(&DataKey::State, state);
}

// ============================================================================
// Account Flag Helpers
// ============================================================================

/// Read a boolean account flag, absent records read as `false`
pub fn get_flag(env: &Env, key: &DataKey) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(key)
        .unwrap_or(false)
}

pub fn set_flag(env: &Env, key: &DataKey, value: bool) {
    env.storage().persistent().set(key, &value);
}

// ============================================================================
// Sell Tracker Helpers
// ============================================================================

pub fn get_sell_tracker(env: &Env, account: &Address) -> Option<SellTracker> {
    env.storage()
        .persistent()
        .get(&DataKey::SellTracker(account.clone()))
}

pub fn set_sell_tracker(env: &Env, account: &Address, tracker: &SellTracker) {
    env.storage()
        .persistent()
        .set(&DataKey::SellTracker(account.clone()), tracker);
}

// ============================================================================
// Balance Helpers
// ============================================================================

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get::<DataKey, i128>(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(account.clone()), &amount);
}

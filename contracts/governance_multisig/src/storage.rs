//! Storage keys and helpers for the Governance Multisig contract

use soroban_sdk::{contracttype, Address, Env};

use crate::error::GovernanceError;
use crate::types::{GovernanceState, Transaction};

/// Storage keys for the governance contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Governance state singleton (instance storage)
    Governance,
    /// A queued transaction (persistent storage)
    Transaction(u64),
    /// Role membership for an account (persistent storage)
    Role(Address, u32),
}

// ============================================================================
// Governance State Helpers
// ============================================================================

/// Check if the contract is initialized
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Governance)
}

/// Get the governance state
pub fn get_state(env: &Env) -> Result<GovernanceState, GovernanceError> {
    env.storage()
        .instance()
        .get(&DataKey::Governance)
        .ok_or(GovernanceError::NotInitialized)
}

/// Set the governance state
pub fn set_state(env: &Env, state: &GovernanceState) {
    env.storage().instance().set(&DataKey::Governance, state);
}

// ============================================================================
// Transaction Helpers
// ============================================================================

/// Get a transaction by ID
pub fn get_transaction(env: &Env, id: u64) -> Result<Transaction, GovernanceError> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(id))
        .ok_or(GovernanceError::TransactionNotFound)
}

/// Set a transaction
pub fn set_transaction(env: &Env, transaction: &Transaction) {
    env.storage()
        .persistent()
        .set(&DataKey::Transaction(transaction.id), transaction);
}

// ============================================================================
// Role Helpers
// ============================================================================

pub fn has_role(env: &Env, account: &Address, role: u32) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::Role(account.clone(), role))
        .unwrap_or(false)
}

pub fn set_role(env: &Env, account: &Address, role: u32, value: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::Role(account.clone(), role), &value);
}

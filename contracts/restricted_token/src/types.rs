//! Data types for the restricted token contract

use soroban_sdk::{contracttype, Address};

/// Default share of the window-start balance that may be sold per window
pub const DEFAULT_SELL_LIMIT_PERCENT: u32 = 10;

/// Default rolling sell-limit window (24 hours)
pub const DEFAULT_SELL_LIMIT_PERIOD: u64 = 24 * 60 * 60;

/// Delay between proposing and committing an authority handover (7 days)
pub const GOVERNANCE_HANDOVER_COOLDOWN: u64 = 7 * 24 * 60 * 60;

/// Token-wide administrative state
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenState {
    /// Administrative authority (the governance contract after handover)
    pub authority: Address,
    /// Total transfer block while set
    pub emergency_paused: bool,
    /// Percentage of the window-start balance sellable per window
    pub sell_limit_percent: u32,
    /// Length of the rolling sell-limit window in seconds
    pub sell_limit_period: u64,
    /// Authority proposed by the current authority, if any
    pub pending_governance: Option<Address>,
    /// When the pending authority was proposed
    pub pending_governance_proposed_at: Option<u64>,
    /// Bridge contract address (set through governance)
    pub bridge_address: Option<Address>,
    /// Bond contract address (set through governance)
    pub bond_address: Option<Address>,
    /// Supply cap, `None` for unlimited
    pub max_supply: Option<i128>,
    /// Tokens currently in circulation
    pub current_supply: i128,
    /// Once set, minting is permanently disabled
    pub mint_revoked: bool,
}

/// Rolling sell-limit accounting for one sender
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellTracker {
    /// Start of the current window
    pub window_start: u64,
    /// Sender balance captured when the window opened
    pub window_start_balance: i128,
    /// Amount sent within the current window
    pub sold_in_window: i128,
}

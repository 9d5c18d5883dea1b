//! Error types for the restricted token contract

use soroban_sdk::contracterror;

/// Token contract errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the token authority
    Unauthorized = 3,
    /// Sender or recipient is blacklisted
    Blacklisted = 4,
    /// Sender or recipient is restricted
    Restricted = 5,
    /// Emergency pause is active
    Paused = 6,
    /// Transfer would exceed the rolling sell limit
    SellLimitExceeded = 7,
    /// No governance change has been proposed
    ProposalMissing = 8,
    /// Proposed authority does not match the one being committed
    MismatchedTarget = 9,
    /// Governance handover cooldown has not elapsed
    CooldownNotExpired = 10,
    /// Sender balance is lower than the transfer amount
    InsufficientBalance = 11,
    /// Amount is negative (or zero where a positive amount is required)
    InvalidAmount = 12,
    /// Arithmetic overflow
    MathOverflow = 13,
    /// Mint would push supply above the configured cap
    SupplyCapExceeded = 14,
    /// Mint authority has been permanently revoked
    MintAuthorityRevoked = 15,
    /// Address is not acceptable for this operation
    InvalidAccount = 16,
}

//! Data types for the Governance Multisig contract

use soroban_sdk::{contracttype, Address, String, Vec};

/// Smallest allowed approval threshold
pub const MIN_REQUIRED_APPROVALS: u32 = 2;

/// Largest allowed signer set
pub const MAX_SIGNERS: u32 = 10;

/// Smallest allowed cooldown (30 minutes)
pub const MIN_COOLDOWN_SECONDS: u64 = 30 * 60;

/// Largest allowed cooldown (30 days)
pub const MAX_COOLDOWN_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Longest accepted rejection reason, in bytes
pub const MAX_REJECTION_REASON_LEN: u32 = 256;

pub const ROLE_ADMIN: u32 = 1;
pub const ROLE_SIGNER: u32 = 2;
pub const ROLE_APPROVER: u32 = 3;
pub const ROLE_MANAGER: u32 = 4;

/// Lifecycle of a queued transaction
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TransactionStatus {
    /// Waiting for approvals
    Pending = 0,
    /// Threshold reached, waiting for the cooldown
    Approved = 1,
    /// Action has been applied
    Executed = 2,
    /// Rejected by a signer
    Rejected = 3,
}

/// Administrative action carried by a transaction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    SetBlacklist(Address, bool),
    SetWhitelist(Address, bool),
    SetRestricted(Address, bool),
    SetNoSellLimit(Address, bool),
    SetLiquidityPool(Address, bool),
    Unpause,
    SetRequiredApprovals(u32),
    SetCooldownPeriod(u64),
    SetBridgeAddress(Address),
    SetBondAddress(Address),
}

impl Action {
    /// Whether the action is carried out by the token contract
    pub fn is_delegated(&self) -> bool {
        !matches!(
            self,
            Action::SetRequiredApprovals(_) | Action::SetCooldownPeriod(_)
        )
    }

    /// Account or address the action points at, if any
    pub fn target(&self) -> Option<&Address> {
        match self {
            Action::SetBlacklist(account, _)
            | Action::SetWhitelist(account, _)
            | Action::SetRestricted(account, _)
            | Action::SetNoSellLimit(account, _)
            | Action::SetLiquidityPool(account, _)
            | Action::SetBridgeAddress(account)
            | Action::SetBondAddress(account) => Some(account),
            Action::Unpause | Action::SetRequiredApprovals(_) | Action::SetCooldownPeriod(_) => {
                None
            }
        }
    }
}

/// Governance configuration and signer set
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernanceState {
    /// Administrative authority (not necessarily a signer)
    pub authority: Address,
    /// Ordered signer set, at most `MAX_SIGNERS`
    pub signers: Vec<Address>,
    /// M-of-N threshold
    pub required_approvals: u32,
    /// Delay between reaching the threshold and execution
    pub cooldown_period: u64,
    /// Next transaction ID to hand out
    pub next_transaction_id: u64,
    /// Linked token contract
    pub token_program: Option<Address>,
    pub token_program_set: bool,
    /// Linked presale contract
    pub presale_program: Option<Address>,
    pub presale_program_set: bool,
}

/// A queued governance transaction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub action: Action,
    pub status: TransactionStatus,
    /// Signer who queued the transaction
    pub initiator: Address,
    /// Distinct signers who approved, in approval order
    pub approvals: Vec<Address>,
    pub approval_count: u32,
    pub queued_at: u64,
    /// Set once, when the threshold is first reached
    pub approved_at: Option<u64>,
    pub executed_at: Option<u64>,
    /// Empty unless rejected
    pub rejection_reason: String,
    pub rejector: Option<Address>,
}

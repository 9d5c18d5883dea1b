//! Error types for the Governance Multisig contract

use soroban_sdk::contracterror;

/// Governance contract errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GovernanceError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Initial signer set, threshold or cooldown is invalid
    ConfigInvalid = 3,
    /// Caller is not the governance authority
    Unauthorized = 4,
    /// Caller is not an authorized signer
    NotAuthorizedSigner = 5,
    /// Approver is not an authorized signer
    ApproverNotAuthorized = 6,
    /// Signer has already approved this transaction
    AlreadyApproved = 7,
    /// Rejection requires a reason
    EmptyRejectionReason = 8,
    /// Rejection reason exceeds the maximum length
    RejectionReasonTooLong = 9,
    /// Cooldown since approval has not elapsed
    CooldownNotExpired = 10,
    /// Transaction with given ID was not found
    TransactionNotFound = 11,
    /// Transaction has not reached the approval threshold
    TransactionNotApproved = 12,
    /// Transaction has already been executed
    TransactionAlreadyExecuted = 13,
    /// Transaction has been rejected
    TransactionRejected = 14,
    /// Token program can only be set once
    TokenProgramAlreadySet = 15,
    /// Presale program can only be set once
    PresaleProgramAlreadySet = 16,
    /// Token program has not been set
    TokenProgramNotSet = 17,
    /// Token authority is not this governance contract
    GovernanceNotLinked = 18,
    /// Required approvals below the minimum of two
    RequiredApprovalsTooLow = 19,
    /// Required approvals above the signer count
    RequiredApprovalsTooHigh = 20,
    /// Cooldown period below the minimum
    CooldownPeriodTooLow = 21,
    /// Cooldown period above the maximum
    CooldownPeriodTooHigh = 22,
    /// Address is not acceptable for this operation
    InvalidAccount = 23,
    /// Role code is not recognised
    InvalidRole = 24,
    /// The token contract rejected a delegated call
    TokenCallFailed = 25,
}

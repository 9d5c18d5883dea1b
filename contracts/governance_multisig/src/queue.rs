//! Transaction queue state machine
//!
//! ```text
//! Pending --approve (>= threshold)--> Approved --execute (after cooldown)--> Executed
//! Pending | Approved --reject--> Rejected
//! ```
//!
//! Executed and Rejected are terminal. The functions here only move a
//! `Transaction` record between states; membership checks and persistence
//! happen in the contract entry points.

use soroban_sdk::{Address, Env, String, Vec};

use crate::error::GovernanceError;
use crate::types::{Action, Transaction, TransactionStatus, MAX_REJECTION_REASON_LEN};

pub fn new_transaction(
    env: &Env,
    id: u64,
    action: Action,
    initiator: Address,
    now: u64,
) -> Transaction {
    Transaction {
        id,
        action,
        status: TransactionStatus::Pending,
        initiator,
        approvals: Vec::new(env),
        approval_count: 0,
        queued_at: now,
        approved_at: None,
        executed_at: None,
        rejection_reason: String::from_str(env, ""),
        rejector: None,
    }
}

fn ensure_not_terminal(transaction: &Transaction) -> Result<(), GovernanceError> {
    match transaction.status {
        TransactionStatus::Executed => Err(GovernanceError::TransactionAlreadyExecuted),
        TransactionStatus::Rejected => Err(GovernanceError::TransactionRejected),
        TransactionStatus::Pending | TransactionStatus::Approved => Ok(()),
    }
}

/// Record an approval. Returns `true` when this approval crossed the threshold.
///
/// Approvals arriving after the threshold are recorded but never move
/// `approved_at`.
pub fn record_approval(
    transaction: &mut Transaction,
    approver: &Address,
    required_approvals: u32,
    now: u64,
) -> Result<bool, GovernanceError> {
    ensure_not_terminal(transaction)?;

    if transaction.approvals.iter().any(|a| a == *approver) {
        return Err(GovernanceError::AlreadyApproved);
    }

    transaction.approvals.push_back(approver.clone());
    transaction.approval_count = transaction.approvals.len();

    if transaction.status == TransactionStatus::Pending
        && transaction.approval_count >= required_approvals
    {
        transaction.status = TransactionStatus::Approved;
        transaction.approved_at = Some(now);
        return Ok(true);
    }

    Ok(false)
}

pub fn record_rejection(
    transaction: &mut Transaction,
    rejector: &Address,
    reason: String,
) -> Result<(), GovernanceError> {
    ensure_not_terminal(transaction)?;

    if reason.len() == 0 {
        return Err(GovernanceError::EmptyRejectionReason);
    }
    if reason.len() > MAX_REJECTION_REASON_LEN {
        return Err(GovernanceError::RejectionReasonTooLong);
    }

    transaction.status = TransactionStatus::Rejected;
    transaction.rejection_reason = reason;
    transaction.rejector = Some(rejector.clone());
    Ok(())
}

/// Earliest timestamp at which an approved transaction may execute
pub fn executable_at(transaction: &Transaction, cooldown_period: u64) -> Option<u64> {
    transaction
        .approved_at
        .map(|approved_at| approved_at.saturating_add(cooldown_period))
}

pub fn ensure_executable(
    transaction: &Transaction,
    cooldown_period: u64,
    now: u64,
) -> Result<(), GovernanceError> {
    match transaction.status {
        TransactionStatus::Executed => return Err(GovernanceError::TransactionAlreadyExecuted),
        TransactionStatus::Pending | TransactionStatus::Rejected => {
            return Err(GovernanceError::TransactionNotApproved)
        }
        TransactionStatus::Approved => {}
    }

    let ready_at =
        executable_at(transaction, cooldown_period).ok_or(GovernanceError::TransactionNotApproved)?;
    if now < ready_at {
        return Err(GovernanceError::CooldownNotExpired);
    }
    Ok(())
}

pub fn mark_executed(transaction: &mut Transaction, now: u64) {
    transaction.status = TransactionStatus::Executed;
    transaction.executed_at = Some(now);
}

use soroban_sdk::{contractevent, Address, Env, String};

use crate::types::Action;

#[contractevent(topics = ["NCGovernance", "INIT"])]
struct GovernanceInitialized {
    authority: Address,
    signers_count: u32,
    required_approvals: u32,
    cooldown_period: u64,
}

#[contractevent(topics = ["NCGovernance", "TOKEN_SET"])]
struct TokenProgramSet {
    token: Address,
}

#[contractevent(topics = ["NCGovernance", "PRESALE_SET"])]
struct PresaleProgramSet {
    presale: Address,
}

#[contractevent(topics = ["NCGovernance", "QUEUED"])]
struct TransactionQueued {
    tx_id: u64,
    initiator: Address,
    action: Action,
}

#[contractevent(topics = ["NCGovernance", "APPROVED"])]
struct TransactionApproved {
    tx_id: u64,
    approver: Address,
    approval_count: u32,
    required_approvals: u32,
}

#[contractevent(topics = ["NCGovernance", "THRESHOLD"])]
struct ThresholdReached {
    tx_id: u64,
    executable_at: u64,
}

#[contractevent(topics = ["NCGovernance", "REJECTED"])]
struct TransactionRejected {
    tx_id: u64,
    rejector: Address,
    reason: String,
}

#[contractevent(topics = ["NCGovernance", "EXECUTED"])]
struct TransactionExecuted {
    tx_id: u64,
    action: Action,
}

#[contractevent(topics = ["NCGovernance", "APPROVALS_UPD"])]
struct RequiredApprovalsUpdated {
    tx_id: u64,
    old: u32,
    new: u32,
}

#[contractevent(topics = ["NCGovernance", "COOLDOWN_UPD"])]
struct CooldownPeriodUpdated {
    tx_id: u64,
    old: u64,
    new: u64,
}

#[contractevent(topics = ["NCGovernance", "EMERGENCY"])]
struct EmergencyPauseToggled {
    signer: Address,
    paused: bool,
}

#[contractevent(topics = ["NCGovernance", "ROLE_GRANT"])]
struct RoleGranted {
    account: Address,
    role: u32,
    granted_by: Address,
}

#[contractevent(topics = ["NCGovernance", "ROLE_REVOKE"])]
struct RoleRevoked {
    account: Address,
    role: u32,
    revoked_by: Address,
}

pub fn emit_initialized(
    env: &Env,
    authority: &Address,
    signers_count: u32,
    required_approvals: u32,
    cooldown_period: u64,
) {
    GovernanceInitialized {
        authority: authority.clone(),
        signers_count,
        required_approvals,
        cooldown_period,
    }
    .publish(env);
}

pub fn emit_token_program_set(env: &Env, token: &Address) {
    TokenProgramSet {
        token: token.clone(),
    }
    .publish(env);
}

pub fn emit_presale_program_set(env: &Env, presale: &Address) {
    PresaleProgramSet {
        presale: presale.clone(),
    }
    .publish(env);
}

pub fn emit_queued(env: &Env, tx_id: u64, initiator: &Address, action: &Action) {
    TransactionQueued {
        tx_id,
        initiator: initiator.clone(),
        action: action.clone(),
    }
    .publish(env);
}

pub fn emit_approved(
    env: &Env,
    tx_id: u64,
    approver: &Address,
    approval_count: u32,
    required_approvals: u32,
) {
    TransactionApproved {
        tx_id,
        approver: approver.clone(),
        approval_count,
        required_approvals,
    }
    .publish(env);
}

pub fn emit_threshold_reached(env: &Env, tx_id: u64, executable_at: u64) {
    ThresholdReached {
        tx_id,
        executable_at,
    }
    .publish(env);
}

pub fn emit_rejected(env: &Env, tx_id: u64, rejector: &Address, reason: &String) {
    TransactionRejected {
        tx_id,
        rejector: rejector.clone(),
        reason: reason.clone(),
    }
    .publish(env);
}

pub fn emit_executed(env: &Env, tx_id: u64, action: &Action) {
    TransactionExecuted {
        tx_id,
        action: action.clone(),
    }
    .publish(env);
}

pub fn emit_required_approvals_updated(env: &Env, tx_id: u64, old: u32, new: u32) {
    RequiredApprovalsUpdated { tx_id, old, new }.publish(env);
}

pub fn emit_cooldown_period_updated(env: &Env, tx_id: u64, old: u64, new: u64) {
    CooldownPeriodUpdated { tx_id, old, new }.publish(env);
}

pub fn emit_emergency_pause(env: &Env, signer: &Address, paused: bool) {
    EmergencyPauseToggled {
        signer: signer.clone(),
        paused,
    }
    .publish(env);
}

pub fn emit_role_granted(env: &Env, account: &Address, role: u32, granted_by: &Address) {
    RoleGranted {
        account: account.clone(),
        role,
        granted_by: granted_by.clone(),
    }
    .publish(env);
}

pub fn emit_role_revoked(env: &Env, account: &Address, role: u32, revoked_by: &Address) {
    RoleRevoked {
        account: account.clone(),
        role,
        revoked_by: revoked_by.clone(),
    }
    .publish(env);
}

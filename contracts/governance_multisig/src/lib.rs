#![no_std]

//! # NC Token Multisig Governance
//!
//! A Soroban smart contract that gates every sensitive administrative action of
//! the NC token behind a queue / approve / cooldown / execute protocol. Once the
//! token's authority has been handed over to this contract, the only way to
//! change blacklist, whitelist, restriction, sell-limit exemption, liquidity
//! pool or pause state is through an approved, cooled-down transaction.
//!
//! ## Features
//! - M-of-N approvals from a fixed signer set (2 <= M <= N <= 10)
//! - Global cooldown between reaching the threshold and execution
//! - Any single signer may reject a transaction before it executes
//! - Governance parameters (threshold, cooldown) change only via the queue
//! - Single-signer emergency pause; queued, thresholded unpause
//! - Event emission for every transition
//!
//! ## Security
//! - Transactions execute at most once, only from Approved, only after cooldown
//! - Delegated actions require the token to list this contract as authority
//! - Parameter changes are re-validated at execution time
//! - Failed calls leave every record unchanged

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod dispatcher;
mod error;
mod events;
mod queue;
mod registry;
mod storage;
pub mod token_admin;
mod types;

pub use error::GovernanceError;
pub use storage::DataKey;
pub use token_admin::{TokenAdmin, TokenAdminClient};
pub use types::{
    Action, GovernanceState, Transaction, TransactionStatus, MAX_COOLDOWN_SECONDS,
    MAX_REJECTION_REASON_LEN, MAX_SIGNERS, MIN_COOLDOWN_SECONDS, MIN_REQUIRED_APPROVALS,
    ROLE_ADMIN, ROLE_APPROVER, ROLE_MANAGER, ROLE_SIGNER,
};

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct GovernanceMultisig;

#[contractimpl]
impl GovernanceMultisig {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the governance contract
    ///
    /// # Arguments
    /// * `authority` - Administrative authority (sets the program links)
    /// * `signers` - Fixed signer set
    /// * `required_approvals` - Number of approvals required (M-of-N)
    /// * `cooldown_period` - Seconds between reaching the threshold and execution
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Contract has already been initialized
    /// * `ConfigInvalid` - Signer set, threshold or cooldown out of bounds
    pub fn initialize(
        env: Env,
        authority: Address,
        signers: Vec<Address>,
        required_approvals: u32,
        cooldown_period: u64,
    ) -> Result<(), GovernanceError> {
        if storage::is_initialized(&env) {
            return Err(GovernanceError::AlreadyInitialized);
        }

        registry::validate_config(&signers, required_approvals, cooldown_period)?;

        authority.require_auth();

        let state = GovernanceState {
            authority: authority.clone(),
            signers: signers.clone(),
            required_approvals,
            cooldown_period,
            next_transaction_id: 1,
            token_program: None,
            token_program_set: false,
            presale_program: None,
            presale_program_set: false,
        };
        storage::set_state(&env, &state);

        events::emit_initialized(
            &env,
            &authority,
            signers.len(),
            required_approvals,
            cooldown_period,
        );

        Ok(())
    }

    /// Link the token contract (one-way)
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the governance authority
    /// * `TokenProgramAlreadySet` - Token has already been linked
    /// * `InvalidAccount` - `token` is this contract
    pub fn set_token_program(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), GovernanceError> {
        let mut state = require_authority(&env, &caller)?;

        if state.token_program_set {
            return Err(GovernanceError::TokenProgramAlreadySet);
        }
        if token == env.current_contract_address() {
            return Err(GovernanceError::InvalidAccount);
        }

        state.token_program = Some(token.clone());
        state.token_program_set = true;
        storage::set_state(&env, &state);

        events::emit_token_program_set(&env, &token);
        Ok(())
    }

    /// Link the presale contract (one-way)
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the governance authority
    /// * `PresaleProgramAlreadySet` - Presale has already been linked
    /// * `InvalidAccount` - `presale` is this contract
    pub fn set_presale_program(
        env: Env,
        caller: Address,
        presale: Address,
    ) -> Result<(), GovernanceError> {
        let mut state = require_authority(&env, &caller)?;

        if state.presale_program_set {
            return Err(GovernanceError::PresaleProgramAlreadySet);
        }
        if presale == env.current_contract_address() {
            return Err(GovernanceError::InvalidAccount);
        }

        state.presale_program = Some(presale.clone());
        state.presale_program_set = true;
        storage::set_state(&env, &state);

        events::emit_presale_program_set(&env, &presale);
        Ok(())
    }

    // ========================================================================
    // Transaction Queue
    // ========================================================================

    /// Queue an action for approval
    ///
    /// # Returns
    /// The new transaction ID
    ///
    /// # Errors
    /// * `NotAuthorizedSigner` - Initiator is not a signer
    /// * `TokenProgramNotSet` - Delegated action without a linked token
    /// * `InvalidAccount` - Action targets this contract, or registers the token as a pool
    /// * `RequiredApprovalsTooLow` / `RequiredApprovalsTooHigh` - Invalid threshold
    /// * `CooldownPeriodTooLow` / `CooldownPeriodTooHigh` - Invalid cooldown
    pub fn queue_transaction(
        env: Env,
        initiator: Address,
        action: Action,
    ) -> Result<u64, GovernanceError> {
        let mut state = storage::get_state(&env)?;

        initiator.require_auth();

        if !state.is_signer(&initiator) {
            return Err(GovernanceError::NotAuthorizedSigner);
        }

        match &action {
            Action::SetRequiredApprovals(required) => {
                registry::validate_required_approvals(*required, state.signer_count())?;
            }
            Action::SetCooldownPeriod(period) => {
                registry::validate_cooldown_period(*period)?;
            }
            _ => {
                if !state.token_program_set {
                    return Err(GovernanceError::TokenProgramNotSet);
                }
            }
        }
        if let Some(target) = action.target() {
            if *target == env.current_contract_address() {
                return Err(GovernanceError::InvalidAccount);
            }
        }
        // The token refuses to register itself as a pool
        if let Action::SetLiquidityPool(pool, _) = &action {
            if state.token_program.as_ref() == Some(pool) {
                return Err(GovernanceError::InvalidAccount);
            }
        }

        let id = state.next_transaction_id;
        state.next_transaction_id = id + 1;

        let now = env.ledger().timestamp();
        let transaction = queue::new_transaction(&env, id, action, initiator.clone(), now);

        storage::set_transaction(&env, &transaction);
        storage::set_state(&env, &state);

        events::emit_queued(&env, id, &initiator, &transaction.action);
        Ok(id)
    }

    /// Queue clearing the token's emergency pause
    pub fn queue_unpause(env: Env, initiator: Address) -> Result<u64, GovernanceError> {
        Self::queue_transaction(env, initiator, Action::Unpause)
    }

    /// Queue adding `account` to (or removing it from) the token blacklist
    pub fn queue_set_blacklist(
        env: Env,
        initiator: Address,
        account: Address,
        value: bool,
    ) -> Result<u64, GovernanceError> {
        Self::queue_transaction(env, initiator, Action::SetBlacklist(account, value))
    }

    /// Queue a whitelist change for `account`
    pub fn queue_set_whitelist(
        env: Env,
        initiator: Address,
        account: Address,
        value: bool,
    ) -> Result<u64, GovernanceError> {
        Self::queue_transaction(env, initiator, Action::SetWhitelist(account, value))
    }

    /// Queue a restriction change for `account`
    pub fn queue_set_restricted(
        env: Env,
        initiator: Address,
        account: Address,
        value: bool,
    ) -> Result<u64, GovernanceError> {
        Self::queue_transaction(env, initiator, Action::SetRestricted(account, value))
    }

    /// Queue a sell-limit exemption change for `account`
    pub fn queue_set_no_sell_limit(
        env: Env,
        initiator: Address,
        account: Address,
        value: bool,
    ) -> Result<u64, GovernanceError> {
        Self::queue_transaction(env, initiator, Action::SetNoSellLimit(account, value))
    }

    /// Queue registering or unregistering `pool` as a liquidity pool
    pub fn queue_set_liquidity_pool(
        env: Env,
        initiator: Address,
        pool: Address,
        value: bool,
    ) -> Result<u64, GovernanceError> {
        Self::queue_transaction(env, initiator, Action::SetLiquidityPool(pool, value))
    }

    /// Queue a new approval threshold
    pub fn queue_set_required_approvals(
        env: Env,
        initiator: Address,
        required: u32,
    ) -> Result<u64, GovernanceError> {
        Self::queue_transaction(env, initiator, Action::SetRequiredApprovals(required))
    }

    /// Queue a new cooldown period, in seconds
    pub fn queue_set_cooldown_period(
        env: Env,
        initiator: Address,
        period: u64,
    ) -> Result<u64, GovernanceError> {
        Self::queue_transaction(env, initiator, Action::SetCooldownPeriod(period))
    }

    /// Queue a new bridge address on the token
    pub fn queue_set_bridge_address(
        env: Env,
        initiator: Address,
        bridge: Address,
    ) -> Result<u64, GovernanceError> {
        Self::queue_transaction(env, initiator, Action::SetBridgeAddress(bridge))
    }

    /// Queue a new bond address on the token
    pub fn queue_set_bond_address(
        env: Env,
        initiator: Address,
        bond: Address,
    ) -> Result<u64, GovernanceError> {
        Self::queue_transaction(env, initiator, Action::SetBondAddress(bond))
    }

    /// Approve a queued transaction
    ///
    /// The approval that first brings the count to the threshold moves the
    /// transaction to Approved and starts the cooldown. Later approvals are
    /// recorded but do not restart it.
    ///
    /// # Errors
    /// * `ApproverNotAuthorized` - Approver is not a signer
    /// * `TransactionNotFound` - Transaction does not exist
    /// * `TransactionAlreadyExecuted` / `TransactionRejected` - Transaction is final
    /// * `AlreadyApproved` - Approver has already approved
    pub fn approve(env: Env, approver: Address, tx_id: u64) -> Result<(), GovernanceError> {
        let state = storage::get_state(&env)?;

        approver.require_auth();

        if !state.is_signer(&approver) {
            return Err(GovernanceError::ApproverNotAuthorized);
        }

        let mut transaction = storage::get_transaction(&env, tx_id)?;
        let now = env.ledger().timestamp();
        let crossed =
            queue::record_approval(&mut transaction, &approver, state.required_approvals, now)?;
        storage::set_transaction(&env, &transaction);

        events::emit_approved(
            &env,
            tx_id,
            &approver,
            transaction.approval_count,
            state.required_approvals,
        );
        if crossed {
            let executable_at = now.saturating_add(state.cooldown_period);
            events::emit_threshold_reached(&env, tx_id, executable_at);
        }

        Ok(())
    }

    /// Reject a transaction that has not executed yet
    ///
    /// A single signer is enough, even after other signers approved and even
    /// while the cooldown is running.
    ///
    /// # Errors
    /// * `NotAuthorizedSigner` - Rejector is not a signer
    /// * `TransactionNotFound` - Transaction does not exist
    /// * `TransactionAlreadyExecuted` / `TransactionRejected` - Transaction is final
    /// * `EmptyRejectionReason` / `RejectionReasonTooLong` - Invalid reason
    pub fn reject(
        env: Env,
        rejector: Address,
        tx_id: u64,
        reason: String,
    ) -> Result<(), GovernanceError> {
        let state = storage::get_state(&env)?;

        rejector.require_auth();

        if !state.is_signer(&rejector) {
            return Err(GovernanceError::NotAuthorizedSigner);
        }

        let mut transaction = storage::get_transaction(&env, tx_id)?;
        queue::record_rejection(&mut transaction, &rejector, reason)?;
        storage::set_transaction(&env, &transaction);

        events::emit_rejected(&env, tx_id, &rejector, &transaction.rejection_reason);
        Ok(())
    }

    /// Execute an approved transaction once its cooldown has elapsed
    ///
    /// Anyone may trigger execution; the approvals are the authorization.
    ///
    /// # Errors
    /// * `TransactionNotFound` - Transaction does not exist
    /// * `TransactionAlreadyExecuted` - Transaction has already executed
    /// * `TransactionNotApproved` - Transaction is pending or rejected
    /// * `CooldownNotExpired` - Cooldown since approval has not elapsed
    /// * `GovernanceNotLinked` - Token authority is not this contract
    /// * `TokenCallFailed` - Token rejected the delegated call
    /// * parameter validation errors for threshold / cooldown changes
    pub fn execute(env: Env, tx_id: u64) -> Result<(), GovernanceError> {
        let mut state = storage::get_state(&env)?;
        let mut transaction = storage::get_transaction(&env, tx_id)?;
        let now = env.ledger().timestamp();

        queue::ensure_executable(&transaction, state.cooldown_period, now)?;

        dispatcher::dispatch(&env, &mut state, tx_id, &transaction.action)?;

        queue::mark_executed(&mut transaction, now);
        storage::set_transaction(&env, &transaction);
        if !transaction.action.is_delegated() {
            storage::set_state(&env, &state);
        }

        events::emit_executed(&env, tx_id, &transaction.action);
        Ok(())
    }

    // ========================================================================
    // Emergency Pause
    // ========================================================================

    /// Flip the token's emergency pause without queueing
    ///
    /// Any single signer may call this. It toggles: calling it on a paused
    /// token unpauses it.
    ///
    /// # Returns
    /// The new pause state
    ///
    /// # Errors
    /// * `NotAuthorizedSigner` - Caller is not a signer
    /// * `TokenProgramNotSet` - No token linked
    /// * `GovernanceNotLinked` - Token authority is not this contract
    /// * `TokenCallFailed` - Token rejected the pause change
    pub fn emergency_pause(env: Env, caller: Address) -> Result<bool, GovernanceError> {
        let state = storage::get_state(&env)?;

        caller.require_auth();

        if !state.is_signer(&caller) {
            return Err(GovernanceError::NotAuthorizedSigner);
        }
        if !state.token_program_set {
            return Err(GovernanceError::TokenProgramNotSet);
        }

        let token = dispatcher::linked_token(&env, &state)?;
        let paused = !dispatcher::token_call(token.try_is_paused())?;
        dispatcher::token_call(
            token.try_set_emergency_pause(&env.current_contract_address(), &paused),
        )?;

        events::emit_emergency_pause(&env, &caller, paused);
        Ok(paused)
    }

    // ========================================================================
    // Roles
    // ========================================================================

    /// Grant `role` to `account`
    ///
    /// # Errors
    /// * `NotAuthorizedSigner` - Caller is not a signer
    /// * `Unauthorized` - Caller is granting to itself
    /// * `InvalidRole` - Unknown role code
    pub fn grant_role(
        env: Env,
        caller: Address,
        account: Address,
        role: u32,
    ) -> Result<(), GovernanceError> {
        let state = storage::get_state(&env)?;

        caller.require_auth();

        if !state.is_signer(&caller) {
            return Err(GovernanceError::NotAuthorizedSigner);
        }
        if account == caller {
            return Err(GovernanceError::Unauthorized);
        }
        validate_role(role)?;

        storage::set_role(&env, &account, role, true);
        events::emit_role_granted(&env, &account, role, &caller);
        Ok(())
    }

    /// Revoke `role` from `account`
    ///
    /// # Errors
    /// * `NotAuthorizedSigner` - Caller is not a signer
    /// * `InvalidRole` - Unknown role code
    /// * `InvalidAccount` - `account` does not hold `role`
    pub fn revoke_role(
        env: Env,
        caller: Address,
        account: Address,
        role: u32,
    ) -> Result<(), GovernanceError> {
        let state = storage::get_state(&env)?;

        caller.require_auth();

        if !state.is_signer(&caller) {
            return Err(GovernanceError::NotAuthorizedSigner);
        }
        validate_role(role)?;
        if !storage::has_role(&env, &account, role) {
            return Err(GovernanceError::InvalidAccount);
        }

        storage::set_role(&env, &account, role, false);
        events::emit_role_revoked(&env, &account, role, &caller);
        Ok(())
    }

    /// Check if `account` holds `role`
    pub fn has_role(env: Env, account: Address, role: u32) -> bool {
        storage::has_role(&env, &account, role)
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    /// Get the full governance state
    pub fn get_state(env: Env) -> Result<GovernanceState, GovernanceError> {
        storage::get_state(&env)
    }

    /// Get transaction details by ID
    pub fn get_transaction(env: Env, tx_id: u64) -> Result<Transaction, GovernanceError> {
        storage::get_transaction(&env, tx_id)
    }

    /// Get the signers that approved a transaction
    pub fn get_transaction_approvals(
        env: Env,
        tx_id: u64,
    ) -> Result<Vec<Address>, GovernanceError> {
        Ok(storage::get_transaction(&env, tx_id)?.approvals)
    }

    /// Earliest execution time of an approved transaction
    pub fn get_executable_at(env: Env, tx_id: u64) -> Result<Option<u64>, GovernanceError> {
        let state = storage::get_state(&env)?;
        let transaction = storage::get_transaction(&env, tx_id)?;
        Ok(queue::executable_at(&transaction, state.cooldown_period))
    }

    /// Check if an address is a signer
    pub fn is_signer(env: Env, address: Address) -> bool {
        match storage::get_state(&env) {
            Ok(state) => state.is_signer(&address),
            Err(_) => false,
        }
    }

    /// Check if an address is the governance authority
    pub fn has_authority(env: Env, address: Address) -> bool {
        match storage::get_state(&env) {
            Ok(state) => state.has_authority(&address),
            Err(_) => false,
        }
    }

    /// Get all signer addresses
    pub fn get_signers(env: Env) -> Result<Vec<Address>, GovernanceError> {
        Ok(storage::get_state(&env)?.signers)
    }

    /// Get the current approval threshold
    pub fn get_required_approvals(env: Env) -> Result<u32, GovernanceError> {
        Ok(storage::get_state(&env)?.required_approvals)
    }

    /// Get the current cooldown period
    pub fn get_cooldown_period(env: Env) -> Result<u64, GovernanceError> {
        Ok(storage::get_state(&env)?.cooldown_period)
    }

    /// Get the linked token contract, if set
    pub fn token_program(env: Env) -> Result<Option<Address>, GovernanceError> {
        Ok(storage::get_state(&env)?.token_program)
    }

    /// Get the linked presale contract, if set
    pub fn presale_program(env: Env) -> Result<Option<Address>, GovernanceError> {
        Ok(storage::get_state(&env)?.presale_program)
    }

    /// Whether the linked token lists this contract as its authority
    pub fn is_token_linked(env: Env) -> Result<bool, GovernanceError> {
        let state = storage::get_state(&env)?;
        Ok(dispatcher::is_linked(&env, &state))
    }
}

/// Load state and check that `caller` is the authority and has signed
fn require_authority(env: &Env, caller: &Address) -> Result<GovernanceState, GovernanceError> {
    let state = storage::get_state(env)?;
    if !state.has_authority(caller) {
        return Err(GovernanceError::Unauthorized);
    }
    caller.require_auth();
    Ok(state)
}

fn validate_role(role: u32) -> Result<(), GovernanceError> {
    match role {
        ROLE_ADMIN | ROLE_SIGNER | ROLE_APPROVER | ROLE_MANAGER => Ok(()),
        _ => Err(GovernanceError::InvalidRole),
    }
}

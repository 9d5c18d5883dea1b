//! Authorization registry
//!
//! Signer membership, authority checks and the invariants every governance
//! configuration must satisfy:
//!
//! - `1 <= signers.len() <= MAX_SIGNERS`, no duplicates
//! - `MIN_REQUIRED_APPROVALS <= required_approvals <= signers.len()`
//! - `MIN_COOLDOWN_SECONDS <= cooldown_period <= MAX_COOLDOWN_SECONDS`

use soroban_sdk::{Address, Vec};

use crate::error::GovernanceError;
use crate::types::{
    GovernanceState, MAX_COOLDOWN_SECONDS, MAX_SIGNERS, MIN_COOLDOWN_SECONDS,
    MIN_REQUIRED_APPROVALS,
};

impl GovernanceState {
    /// Linear scan of the (small, bounded) signer set
    pub fn is_signer(&self, address: &Address) -> bool {
        self.signers.iter().any(|signer| signer == *address)
    }

    /// Authority is distinct from signer membership
    pub fn has_authority(&self, address: &Address) -> bool {
        self.authority == *address
    }

    pub fn signer_count(&self) -> u32 {
        self.signers.len()
    }
}

pub fn validate_signers(signers: &Vec<Address>) -> Result<(), GovernanceError> {
    if signers.is_empty() || signers.len() > MAX_SIGNERS {
        return Err(GovernanceError::ConfigInvalid);
    }

    for (i, signer) in signers.iter().enumerate() {
        if signers.iter().skip(i + 1).any(|other| other == signer) {
            return Err(GovernanceError::ConfigInvalid);
        }
    }

    Ok(())
}

pub fn validate_required_approvals(
    required_approvals: u32,
    signer_count: u32,
) -> Result<(), GovernanceError> {
    if required_approvals < MIN_REQUIRED_APPROVALS {
        return Err(GovernanceError::RequiredApprovalsTooLow);
    }
    if required_approvals > signer_count {
        return Err(GovernanceError::RequiredApprovalsTooHigh);
    }
    Ok(())
}

pub fn validate_cooldown_period(cooldown_period: u64) -> Result<(), GovernanceError> {
    if cooldown_period < MIN_COOLDOWN_SECONDS {
        return Err(GovernanceError::CooldownPeriodTooLow);
    }
    if cooldown_period > MAX_COOLDOWN_SECONDS {
        return Err(GovernanceError::CooldownPeriodTooHigh);
    }
    Ok(())
}

/// Validate a complete configuration; any violation is `ConfigInvalid`
pub fn validate_config(
    signers: &Vec<Address>,
    required_approvals: u32,
    cooldown_period: u64,
) -> Result<(), GovernanceError> {
    validate_signers(signers)?;
    validate_required_approvals(required_approvals, signers.len())
        .map_err(|_| GovernanceError::ConfigInvalid)?;
    validate_cooldown_period(cooldown_period).map_err(|_| GovernanceError::ConfigInvalid)?;
    Ok(())
}

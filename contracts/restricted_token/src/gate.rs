//! Transfer gate
//!
//! Consulted on every transfer before balances move. The checks run in a fixed
//! order and the first failure aborts the transfer:
//!
//! 1. blacklist (sender or recipient), for any amount
//! 2. emergency pause
//! 3. rolling sell limit, unless the sender is exempt, whitelisted, or the
//!    recipient is a registered liquidity pool
//! 4. restriction (sender or recipient); whitelisting never bypasses it
//!
//! The gate is a pure function over a snapshot of the relevant records. It
//! returns the sell tracker to persist when the sell limit applied.

use crate::error::TokenError;
use crate::types::{SellTracker, TokenState};

/// Per-account flags relevant to a single transfer
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransferParties {
    pub sender_blacklisted: bool,
    pub recipient_blacklisted: bool,
    pub sender_whitelisted: bool,
    pub sender_no_sell_limit: bool,
    pub sender_restricted: bool,
    pub recipient_restricted: bool,
    pub recipient_is_pool: bool,
}

impl TransferParties {
    fn sell_limit_exempt(&self) -> bool {
        self.sender_no_sell_limit || self.sender_whitelisted || self.recipient_is_pool
    }
}

/// Run every transfer check.
///
/// `tracker` is the sender's stored tracker (if any) and `sender_balance` the
/// balance before this transfer; it becomes the window-start balance whenever a
/// new window opens. Returns `Some(tracker)` to persist when the sell limit
/// was applied, `None` for exempt transfers.
pub fn check_transfer(
    state: &TokenState,
    parties: &TransferParties,
    tracker: Option<SellTracker>,
    sender_balance: i128,
    amount: i128,
    now: u64,
) -> Result<Option<SellTracker>, TokenError> {
    if parties.sender_blacklisted || parties.recipient_blacklisted {
        return Err(TokenError::Blacklisted);
    }

    if state.emergency_paused {
        return Err(TokenError::Paused);
    }

    let updated = if parties.sell_limit_exempt() {
        None
    } else {
        Some(apply_sell_limit(state, tracker, sender_balance, amount, now)?)
    };

    if parties.sender_restricted || parties.recipient_restricted {
        return Err(TokenError::Restricted);
    }

    Ok(updated)
}

/// Roll the window if it expired, then charge `amount` against it
pub fn apply_sell_limit(
    state: &TokenState,
    tracker: Option<SellTracker>,
    sender_balance: i128,
    amount: i128,
    now: u64,
) -> Result<SellTracker, TokenError> {
    let mut tracker = match tracker {
        Some(t) if now.saturating_sub(t.window_start) < state.sell_limit_period => t,
        _ => SellTracker {
            window_start: now,
            window_start_balance: sender_balance,
            sold_in_window: 0,
        },
    };

    let limit = tracker
        .window_start_balance
        .checked_mul(state.sell_limit_percent as i128)
        .map(|v| v / 100)
        .ok_or(TokenError::MathOverflow)?;

    let new_total = tracker
        .sold_in_window
        .checked_add(amount)
        .ok_or(TokenError::MathOverflow)?;

    if new_total > limit {
        return Err(TokenError::SellLimitExceeded);
    }

    tracker.sold_in_window = new_total;
    Ok(tracker)
}

use soroban_sdk::{contractevent, Address, Env};

#[contractevent(topics = ["NCToken", "INIT"])]
struct TokenInitialized {
    authority: Address,
    max_supply: Option<i128>,
}

#[contractevent(topics = ["NCToken", "GOV_PROPOSED"])]
struct GovernanceChangeProposed {
    current: Address,
    proposed: Address,
    executable_at: u64,
}

#[contractevent(topics = ["NCToken", "GOV_CANCELLED"])]
struct GovernanceChangeCancelled {
    authority: Address,
    proposed: Address,
}

#[contractevent(topics = ["NCToken", "GOV_SET"])]
struct GovernanceChanged {
    previous: Address,
    authority: Address,
}

#[contractevent(topics = ["NCToken", "PAUSE"])]
struct EmergencyPauseChanged {
    paused: bool,
}

#[contractevent(topics = ["NCToken", "BLACKLIST"])]
struct BlacklistChanged {
    account: Address,
    is_blacklisted: bool,
}

#[contractevent(topics = ["NCToken", "WHITELIST"])]
struct WhitelistChanged {
    account: Address,
    is_whitelisted: bool,
}

#[contractevent(topics = ["NCToken", "RESTRICTED"])]
struct RestrictedChanged {
    account: Address,
    is_restricted: bool,
}

#[contractevent(topics = ["NCToken", "NO_SELL_LIMIT"])]
struct NoSellLimitChanged {
    account: Address,
    has_exemption: bool,
}

#[contractevent(topics = ["NCToken", "LIQUIDITY_POOL"])]
struct LiquidityPoolChanged {
    pool: Address,
    is_pool: bool,
}

#[contractevent(topics = ["NCToken", "BRIDGE_SET"])]
struct BridgeAddressChanged {
    previous: Option<Address>,
    bridge: Address,
}

#[contractevent(topics = ["NCToken", "BOND_SET"])]
struct BondAddressChanged {
    previous: Option<Address>,
    bond: Address,
}

#[contractevent(topics = ["NCToken", "MINT"])]
struct TokenMinted {
    recipient: Address,
    amount: i128,
    supply: i128,
}

#[contractevent(topics = ["NCToken", "BURN"])]
struct TokenBurned {
    from: Address,
    amount: i128,
    supply: i128,
}

#[contractevent(topics = ["NCToken", "MINT_REVOKED"])]
struct MintAuthorityRevoked {
    authority: Address,
}

#[contractevent(topics = ["NCToken", "TRANSFER"])]
struct Transferred {
    from: Address,
    to: Address,
    amount: i128,
}

pub fn emit_initialized(env: &Env, authority: &Address, max_supply: Option<i128>) {
    TokenInitialized {
        authority: authority.clone(),
        max_supply,
    }
    .publish(env);
}

pub fn emit_governance_proposed(
    env: &Env,
    current: &Address,
    proposed: &Address,
    executable_at: u64,
) {
    GovernanceChangeProposed {
        current: current.clone(),
        proposed: proposed.clone(),
        executable_at,
    }
    .publish(env);
}

pub fn emit_governance_cancelled(env: &Env, authority: &Address, proposed: &Address) {
    GovernanceChangeCancelled {
        authority: authority.clone(),
        proposed: proposed.clone(),
    }
    .publish(env);
}

pub fn emit_governance_changed(env: &Env, previous: &Address, authority: &Address) {
    GovernanceChanged {
        previous: previous.clone(),
        authority: authority.clone(),
    }
    .publish(env);
}

pub fn emit_pause_changed(env: &Env, paused: bool) {
    EmergencyPauseChanged { paused }.publish(env);
}

pub fn emit_blacklist_changed(env: &Env, account: &Address, value: bool) {
    BlacklistChanged {
        account: account.clone(),
        is_blacklisted: value,
    }
    .publish(env);
}

pub fn emit_whitelist_changed(env: &Env, account: &Address, value: bool) {
    WhitelistChanged {
        account: account.clone(),
        is_whitelisted: value,
    }
    .publish(env);
}

pub fn emit_restricted_changed(env: &Env, account: &Address, value: bool) {
    RestrictedChanged {
        account: account.clone(),
        is_restricted: value,
    }
    .publish(env);
}

pub fn emit_no_sell_limit_changed(env: &Env, account: &Address, value: bool) {
    NoSellLimitChanged {
        account: account.clone(),
        has_exemption: value,
    }
    .publish(env);
}

pub fn emit_liquidity_pool_changed(env: &Env, pool: &Address, value: bool) {
    LiquidityPoolChanged {
        pool: pool.clone(),
        is_pool: value,
    }
    .publish(env);
}

pub fn emit_bridge_changed(env: &Env, previous: Option<Address>, bridge: &Address) {
    BridgeAddressChanged {
        previous,
        bridge: bridge.clone(),
    }
    .publish(env);
}

pub fn emit_bond_changed(env: &Env, previous: Option<Address>, bond: &Address) {
    BondAddressChanged {
        previous,
        bond: bond.clone(),
    }
    .publish(env);
}

pub fn emit_minted(env: &Env, recipient: &Address, amount: i128, supply: i128) {
    TokenMinted {
        recipient: recipient.clone(),
        amount,
        supply,
    }
    .publish(env);
}

pub fn emit_burned(env: &Env, from: &Address, amount: i128, supply: i128) {
    TokenBurned {
        from: from.clone(),
        amount,
        supply,
    }
    .publish(env);
}

pub fn emit_mint_revoked(env: &Env, authority: &Address) {
    MintAuthorityRevoked {
        authority: authority.clone(),
    }
    .publish(env);
}

pub fn emit_transferred(env: &Env, from: &Address, to: &Address, amount: i128) {
    Transferred {
        from: from.clone(),
        to: to.clone(),
        amount,
    }
    .publish(env);
}

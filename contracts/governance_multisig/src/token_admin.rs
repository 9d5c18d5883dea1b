//! Administrative surface of the governed token contract
//!
//! Every mutating call names the caller, which the token checks against its
//! stored authority. The governance contract passes its own address; because
//! it invokes the token directly, the host treats that address as having
//! authorized the call.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "TokenAdminClient")]
pub trait TokenAdmin {
    fn authority(env: Env) -> Address;
    fn is_paused(env: Env) -> bool;

    fn set_emergency_pause(env: Env, caller: Address, value: bool);
    fn emergency_unpause(env: Env, caller: Address);

    fn set_blacklist(env: Env, caller: Address, account: Address, value: bool);
    fn set_whitelist(env: Env, caller: Address, account: Address, value: bool);
    fn set_restricted(env: Env, caller: Address, account: Address, value: bool);
    fn set_no_sell_limit(env: Env, caller: Address, account: Address, value: bool);
    fn set_liquidity_pool(env: Env, caller: Address, pool: Address, value: bool);

    fn set_bridge_address(env: Env, caller: Address, bridge: Address);
    fn set_bond_address(env: Env, caller: Address, bond: Address);
}

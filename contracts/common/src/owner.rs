//! Single-owner authority.
//!
//! The owner is written once at initialization. Callers authenticate the
//! address with `require_auth()` before asking [`is_owner`].

use soroban_sdk::{symbol_short, Address, Env, Symbol};

const OWNER: Symbol = symbol_short!("OWNER");

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Returns `false` when no owner is recorded.
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *caller,
        None => false,
    }
}

//! Address gates for deposit, withdraw and claim.
//!
//! Both gates store one boolean per flagged address under their own key
//! prefix. They differ only in what membership means:
//!
//! - [`Blacklist`] – everyone is allowed unless flagged.
//! - [`Whitelist`] – nobody is allowed unless flagged.
//!
//! Only an owner-checked contract entry point should call
//! [`AccessGate::set_member`].

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::extend_persistent;

pub trait AccessGate {
    /// Storage prefix for membership entries.
    const PREFIX: Symbol;
    /// `true` when membership grants access, `false` when it denies it.
    const MEMBERS_ALLOWED: bool;

    fn is_member(env: &Env, addr: &Address) -> bool {
        let key = (Self::PREFIX, addr.clone());
        let member: Option<bool> = env.storage().persistent().get(&key);
        if member.is_some() {
            extend_persistent(env, &key);
        }
        member.unwrap_or(false)
    }

    fn is_allowed(env: &Env, addr: &Address) -> bool {
        Self::is_member(env, addr) == Self::MEMBERS_ALLOWED
    }

    /// Flags or unflags `addr`. Setting the current value again leaves
    /// storage as it was.
    fn set_member(env: &Env, addr: &Address, flag: bool) {
        let key = (Self::PREFIX, addr.clone());
        if flag {
            env.storage().persistent().set(&key, &true);
            extend_persistent(env, &key);
        } else {
            env.storage().persistent().remove(&key);
        }
    }
}

/// Deny-by-exception gate.
pub struct Blacklist;

impl AccessGate for Blacklist {
    const PREFIX: Symbol = symbol_short!("BLKLIST");
    const MEMBERS_ALLOWED: bool = false;
}

/// Allow-by-exception gate.
pub struct Whitelist;

impl AccessGate for Whitelist {
    const PREFIX: Symbol = symbol_short!("WHTLIST");
    const MEMBERS_ALLOWED: bool = true;
}

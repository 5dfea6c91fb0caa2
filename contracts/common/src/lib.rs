//! Shared plumbing for the VEMP staking contracts.
//!
//! This crate provides:
//! - [`owner`]: the single-owner gate guarding admin entry points.
//! - [`access_gate`]: blacklist / whitelist membership over persistent storage.
//! - [`token_io`]: token pulls that verify the received amount, and payouts
//!   that skip zero transfers.
//! - [`extend_persistent`] and [`extend_instance`]: TTL bumps.

#![no_std]

use soroban_sdk::{Env, IntoVal, Val};

pub mod access_gate;
pub mod owner;
pub mod token_io;

pub use access_gate::{AccessGate, Blacklist, Whitelist};

// ── TTL constants ────────────────────────────────────────────────────────────

pub const TTL_THRESHOLD: u32 = 5_184_000;
pub const TTL_EXTEND_TO: u32 = 10_368_000;

/// Keeps a persistent entry alive for another `TTL_EXTEND_TO` ledgers once it
/// drops below `TTL_THRESHOLD`.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Same policy for the contract instance (config and ledger record).
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

#[cfg(test)]
mod test;

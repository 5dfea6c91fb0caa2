//! Block-indexed reward accrual shared by the VEMP pool and vault contracts.
//!
//! The crate is pure bookkeeping: it never touches contract storage and
//! never moves tokens. Contracts load a [`RewardLedger`] and the relevant
//! [`UserAccount`]s, run a transition, persist the results and only then
//! perform transfers.
//!
//! ## Modules
//!
//! - [`schedule`]: reward rate, start/end blocks and the multiplier
//! - [`accumulator`]: pool totals and the `acc_reward_per_share` advance
//! - [`account`]: per-user stake and reward debt
//! - [`engine`]: deposit / withdraw / claim / reassign transitions
//! - [`math`]: 256-bit multiply-then-divide

#![no_std]

pub mod account;
pub mod accumulator;
pub mod engine;
pub mod math;
pub mod schedule;

pub use account::UserAccount;
pub use accumulator::{compute_acc_reward_per_share, PoolState, PRECISION};
pub use engine::RewardLedger;
pub use math::mul_div;
pub use schedule::{get_multiplier, RewardSchedule};

/// Errors raised by ledger transitions.
///
/// Contracts map these into their own error enums, so the codes here only
/// need to be stable within this crate.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Negative rate or budget, or a non-positive deposit.
    InvalidAmount = 1,
    /// Withdrawal larger than the account's stake.
    InsufficientBalance = 2,
    /// A checked multiplication or addition left the `i128` range.
    Overflow = 3,
}

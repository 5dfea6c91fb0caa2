#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based test suite for the reward ledger.
//!
//! Run with:
//!
//! ```bash
//! cargo test -p reward_core --test property
//! ```
//!
//! To increase the number of generated cases:
//!
//! ```bash
//! PROPTEST_CASES=1024 cargo test -p reward_core --test property
//! ```

mod accumulator;
mod conservation;
mod magnitude;

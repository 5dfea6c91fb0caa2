//! Invariants of the accumulator advance:
//! - `acc_reward_per_share` never decreases as blocks move forward
//! - an empty pool never accrues and never divides by zero
//! - settling twice in the same block equals settling once
//! - the read-only simulation agrees with the real advance

use proptest::prelude::*;
use reward_core::{RewardLedger, RewardSchedule, UserAccount};

fn ledger(rate: i128, budget: Option<i128>) -> RewardLedger {
    RewardLedger::new(RewardSchedule::new(rate, 0, 0, budget).unwrap())
}

proptest! {
    #[test]
    fn prop_accumulator_is_monotonic(
        rate in 0i128..1_000_000,
        stake in 1i128..1_000_000_000,
        gaps in prop::collection::vec(0u32..500, 1..40),
        budget in prop::option::of(0i128..100_000_000),
    ) {
        let mut ledger = ledger(rate, budget);
        let mut user = UserAccount::default();
        ledger.deposit(&mut user, stake, 0).unwrap();

        let mut block = 0u32;
        let mut previous = ledger.pool.acc_reward_per_share;
        for gap in gaps {
            block += gap;
            ledger.update_pool(block).unwrap();
            prop_assert!(ledger.pool.acc_reward_per_share >= previous);
            previous = ledger.pool.acc_reward_per_share;
        }
    }

    #[test]
    fn prop_empty_pool_never_accrues(
        rate in 0i128..i128::from(u64::MAX),
        blocks in prop::collection::vec(0u32..u32::MAX, 1..20),
    ) {
        let mut ledger = ledger(rate, None);
        let mut sorted = blocks;
        sorted.sort_unstable();
        for block in sorted {
            prop_assert!(ledger.update_pool(block).is_ok());
            prop_assert_eq!(ledger.pool.acc_reward_per_share, 0);
            prop_assert_eq!(ledger.schedule.allocated, 0);
        }
    }

    #[test]
    fn prop_update_pool_is_idempotent(
        rate in 0i128..1_000_000,
        stake in 1i128..1_000_000_000,
        block in 0u32..1_000_000,
    ) {
        let mut ledger = ledger(rate, None);
        let mut user = UserAccount::default();
        ledger.deposit(&mut user, stake, 0).unwrap();

        let mut once = ledger.clone();
        once.update_pool(block).unwrap();
        let mut twice = ledger;
        twice.update_pool(block).unwrap();
        twice.update_pool(block).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_simulation_matches_settlement(
        rate in 0i128..1_000_000,
        stake in 1i128..1_000_000_000,
        deposit_block in 0u32..1_000,
        elapsed in 0u32..1_000_000,
    ) {
        let mut ledger = ledger(rate, None);
        let mut user = UserAccount::default();
        ledger.deposit(&mut user, stake, deposit_block).unwrap();

        let at = deposit_block + elapsed;
        let predicted = ledger.pending_reward(&user, at).unwrap();
        let paid = ledger.claim(&mut user, at).unwrap();
        prop_assert_eq!(predicted, paid);
    }

    #[test]
    fn prop_frozen_rate_freezes_pending(
        rate in 1i128..1_000_000,
        stake in 1i128..1_000_000,
        before in 1u32..1_000,
        after in 1u32..1_000_000,
    ) {
        let mut ledger = ledger(rate, None);
        let mut user = UserAccount::default();
        ledger.deposit(&mut user, stake, 0).unwrap();

        ledger.set_reward_per_block(0, before).unwrap();
        let frozen = ledger.pending_reward(&user, before).unwrap();
        prop_assert_eq!(ledger.pending_reward(&user, before + after).unwrap(), frozen);
    }
}

//! Extreme magnitudes: arithmetic either succeeds with a non-negative
//! pending reward or reports `Overflow`. It never wraps or panics.

use proptest::prelude::*;
use reward_core::{LedgerError, RewardLedger, RewardSchedule, UserAccount, PRECISION};

proptest! {
    #[test]
    fn prop_extreme_values_never_wrap(
        rate in 0i128..=i128::MAX,
        stake in 1i128..=i128::MAX,
        elapsed in 0u32..=u32::MAX,
    ) {
        let mut ledger = RewardLedger::new(RewardSchedule::new(rate, 0, 0, None).unwrap());
        let mut user = UserAccount::default();
        ledger.deposit(&mut user, stake, 0).unwrap();
        let before = ledger.clone();

        match ledger.claim(&mut user, elapsed) {
            Ok(payout) => {
                prop_assert!(payout >= 0);
                prop_assert!(ledger.pool.acc_reward_per_share >= before.pool.acc_reward_per_share);
            }
            Err(err) => {
                prop_assert_eq!(err, LedgerError::Overflow);
                prop_assert_eq!(ledger, before);
            }
        }
    }

    /// Realistic 7-decimal supplies stay well inside `i128`.
    #[test]
    fn prop_realistic_values_never_overflow(
        rate in 0i128..=1_000_000_000_000_000_000,
        stake in 1i128..=1_000_000_000_000_000_000,
        elapsed in 0u32..=1_000_000,
    ) {
        let mut ledger = RewardLedger::new(RewardSchedule::new(rate, 0, 0, None).unwrap());
        let mut user = UserAccount::default();
        ledger.deposit(&mut user, stake, 0).unwrap();

        let payout = ledger.claim(&mut user, elapsed);
        prop_assert!(payout.is_ok());
        let expected = rate * i128::from(elapsed);
        // Sole staker: the accumulator floor loses at most stake / PRECISION,
        // the settlement floor one more unit.
        let payout = payout.unwrap();
        prop_assert!(payout <= expected);
        prop_assert!(expected - payout <= stake / PRECISION + 1);
    }

    /// A dust stake left alone drives the accumulator up; a later large
    /// deposit must still settle.
    #[test]
    fn prop_dust_stake_does_not_block_large_deposit(
        rate in 0i128..=1_000_000_000_000,
        dust in 1i128..=100,
        idle in 0u32..=5_000_000,
        large in 1i128..=1_000_000_000_000_000_000,
        after in 0u32..=1_000_000,
    ) {
        let mut ledger = RewardLedger::new(RewardSchedule::new(rate, 0, 0, None).unwrap());
        let mut small = UserAccount::default();
        let mut big = UserAccount::default();
        ledger.deposit(&mut small, dust, 0).unwrap();

        prop_assert_eq!(ledger.deposit(&mut big, large, idle), Ok(0));

        let end = idle + after;
        let payout = ledger.claim(&mut big, end);
        prop_assert!(payout.is_ok());
        let payout = payout.unwrap();
        prop_assert!(payout >= 0);
        prop_assert!(payout <= rate * i128::from(after));
        prop_assert!(ledger.pending_reward(&small, end).is_ok());
    }
}

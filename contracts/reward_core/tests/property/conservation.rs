//! Conservation: everything paid out plus everything still pending equals
//! what the schedule credited to the accumulator, up to one rounding unit
//! per settlement and per accumulator advance.

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use reward_core::{RewardLedger, RewardSchedule, UserAccount};

const USERS: usize = 3;

#[derive(Arbitrary, Clone, Debug)]
enum Op {
    Deposit {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
        #[proptest(strategy = "1i128..1_000_000")]
        amount: i128,
    },
    Withdraw {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
        /// Percentage of the current stake to withdraw.
        #[proptest(strategy = "0i128..=100")]
        percent: i128,
    },
    Claim {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
    },
    Mine {
        #[proptest(strategy = "0u32..50")]
        blocks: u32,
    },
    SetRate {
        #[proptest(strategy = "0i128..1_000_000")]
        rate: i128,
    },
}

proptest! {
    #[test]
    fn prop_rewards_are_conserved(
        rate in 0i128..1_000_000,
        budget in prop::option::of(0i128..500_000_000),
        ops in prop::collection::vec(any::<Op>(), 1..60),
    ) {
        let mut ledger = RewardLedger::new(RewardSchedule::new(rate, 0, 0, budget).unwrap());
        let mut users = vec![UserAccount::default(); USERS];
        let mut block = 0u32;
        let mut paid = 0i128;

        for op in &ops {
            match op.clone() {
                Op::Deposit { user, amount } => {
                    paid += ledger.deposit(&mut users[user], amount, block).unwrap();
                }
                Op::Withdraw { user, percent } => {
                    let amount = users[user].amount * percent / 100;
                    paid += ledger.withdraw(&mut users[user], amount, block).unwrap();
                }
                Op::Claim { user } => {
                    paid += ledger.claim(&mut users[user], block).unwrap();
                }
                Op::Mine { blocks } => block += blocks,
                Op::SetRate { rate } => {
                    ledger.set_reward_per_block(rate, block).unwrap();
                }
            }

            let staked: i128 = users.iter().map(|u| u.amount).sum();
            prop_assert_eq!(staked, ledger.pool.total_staked);
        }

        ledger.update_pool(block).unwrap();
        let pending: i128 = users
            .iter()
            .map(|u| ledger.pending_reward(u, block).unwrap())
            .sum();

        let distributed = paid + pending;
        let allocated = ledger.schedule.allocated;
        let tolerance = 2 * ops.len() as i128 + USERS as i128;
        prop_assert!(
            (distributed - allocated).abs() <= tolerance,
            "distributed {} vs allocated {} (tolerance {})",
            distributed,
            allocated,
            tolerance
        );
        if let Some(budget) = budget {
            prop_assert!(allocated <= budget);
        }
    }
}

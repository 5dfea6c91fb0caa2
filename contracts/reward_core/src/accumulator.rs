use soroban_sdk::contracttype;

use crate::{mul_div, LedgerError, RewardLedger};

/// Fixed-point scaling factor for `acc_reward_per_share`.
///
/// 10^12 keeps twelve fractional digits, enough for 7-decimal Stellar
/// amounts without letting `amount × acc` leave `i128` for realistic stakes.
pub const PRECISION: i128 = 1_000_000_000_000;

/// Pool-wide stake and accumulated reward per staked unit.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    pub total_staked: i128,
    /// Cumulative reward per staked unit since inception, scaled by
    /// [`PRECISION`]. Never decreases.
    pub acc_reward_per_share: i128,
}

/// Adds `reward` spread over `total_staked` to the stored accumulator.
///
/// ```text
/// acc' = acc + reward × PRECISION / total_staked
/// ```
///
/// An empty pool returns `stored` unchanged.
pub fn compute_acc_reward_per_share(
    stored: i128,
    reward: i128,
    total_staked: i128,
) -> Result<i128, LedgerError> {
    if total_staked <= 0 {
        return Ok(stored);
    }
    let delta = mul_div(reward, PRECISION, total_staked)?;
    stored.checked_add(delta).ok_or(LedgerError::Overflow)
}

impl RewardLedger {
    /// Advances the accumulator to `current_block`.
    ///
    /// A no-op when `current_block <= last_reward_block`, so repeated calls
    /// within one block leave state untouched. Blocks that pass with nothing
    /// staked are skipped without emitting reward.
    pub fn update_pool(&mut self, current_block: u32) -> Result<(), LedgerError> {
        if current_block <= self.schedule.last_reward_block {
            return Ok(());
        }

        let (acc, reward) = self.accrue(current_block)?;
        let allocated = self
            .schedule
            .allocated
            .checked_add(reward)
            .ok_or(LedgerError::Overflow)?;

        self.pool.acc_reward_per_share = acc;
        self.schedule.allocated = allocated;
        self.schedule.last_reward_block = current_block;
        Ok(())
    }

    /// The accumulator value `update_pool(current_block)` would produce,
    /// without mutating anything.
    pub fn accumulator_at(&self, current_block: u32) -> Result<i128, LedgerError> {
        if current_block <= self.schedule.last_reward_block {
            return Ok(self.pool.acc_reward_per_share);
        }
        self.accrue(current_block).map(|(acc, _)| acc)
    }

    fn accrue(&self, current_block: u32) -> Result<(i128, i128), LedgerError> {
        let stored = self.pool.acc_reward_per_share;
        if self.pool.total_staked == 0 {
            return Ok((stored, 0));
        }
        let reward = self
            .schedule
            .reward_between(self.schedule.last_reward_block, current_block)?;
        let acc = compute_acc_reward_per_share(stored, reward, self.pool.total_staked)?;
        Ok((acc, reward))
    }
}

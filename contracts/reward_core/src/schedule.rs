use soroban_sdk::contracttype;

use crate::LedgerError;

/// Number of reward-eligible blocks in `[from, to)`.
///
/// With an `end_block` configured, blocks at or past it earn nothing.
pub fn get_multiplier(from: u32, to: u32, end_block: Option<u32>) -> u32 {
    if to <= from {
        return 0;
    }
    match end_block {
        None => to - from,
        Some(end) if from >= end => 0,
        Some(end) => to.min(end) - from,
    }
}

/// Emission parameters plus the block the accumulator was last advanced to.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardSchedule {
    /// Reward units emitted per block across the whole pool.
    pub reward_per_block: i128,
    pub start_block: u32,
    pub last_reward_block: u32,
    /// Total reward this schedule may ever emit. `None` emits indefinitely.
    pub reward_budget: Option<i128>,
    /// Reward already credited to the accumulator.
    pub allocated: i128,
    /// First block that no longer earns rewards; derived from the budget.
    pub end_block: Option<u32>,
}

impl RewardSchedule {
    /// Builds a schedule whose accumulator starts at
    /// `max(start_block, current_block)`.
    pub fn new(
        reward_per_block: i128,
        start_block: u32,
        current_block: u32,
        reward_budget: Option<i128>,
    ) -> Result<Self, LedgerError> {
        if reward_per_block < 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if matches!(reward_budget, Some(budget) if budget < 0) {
            return Err(LedgerError::InvalidAmount);
        }

        let mut schedule = Self {
            reward_per_block,
            start_block,
            last_reward_block: start_block.max(current_block),
            reward_budget,
            allocated: 0,
            end_block: None,
        };
        schedule.recompute_end_block();
        Ok(schedule)
    }

    pub fn multiplier(&self, from: u32, to: u32) -> u32 {
        get_multiplier(from, to, self.end_block)
    }

    /// Reward emitted over `[from, to)` at the current rate.
    pub fn reward_between(&self, from: u32, to: u32) -> Result<i128, LedgerError> {
        i128::from(self.multiplier(from, to))
            .checked_mul(self.reward_per_block)
            .ok_or(LedgerError::Overflow)
    }

    /// Budget not yet credited to the accumulator, if a budget is in force.
    pub fn remaining_budget(&self) -> Option<i128> {
        self.reward_budget
            .map(|budget| budget.saturating_sub(self.allocated).max(0))
    }

    /// Replaces the rate and re-derives the end block from
    /// `last_reward_block`. Callers settle the accumulator first; see
    /// [`crate::RewardLedger::set_reward_per_block`].
    pub(crate) fn set_reward_per_block(&mut self, new_rate: i128) -> Result<i128, LedgerError> {
        if new_rate < 0 {
            return Err(LedgerError::InvalidAmount);
        }
        let old_rate = self.reward_per_block;
        self.reward_per_block = new_rate;
        self.recompute_end_block();
        Ok(old_rate)
    }

    fn recompute_end_block(&mut self) {
        let from = self.last_reward_block;
        let rate = self.reward_per_block;
        self.end_block = self.remaining_budget().map(|remaining| {
            if rate == 0 {
                return from;
            }
            let blocks = u32::try_from(remaining / rate).unwrap_or(u32::MAX);
            from.saturating_add(blocks)
        });
    }
}

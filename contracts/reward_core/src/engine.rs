use soroban_sdk::contracttype;

use crate::{LedgerError, PoolState, RewardSchedule, UserAccount};

/// The schedule and pool totals, persisted together as one record.
///
/// Every transition settles the accumulator to the supplied block before
/// touching any account, and works on copies so that an error leaves both
/// the ledger and the accounts exactly as they were. The returned payout is
/// what the caller must transfer once the new state is stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardLedger {
    pub schedule: RewardSchedule,
    pub pool: PoolState,
}

impl RewardLedger {
    pub fn new(schedule: RewardSchedule) -> Self {
        Self {
            schedule,
            pool: PoolState::default(),
        }
    }

    /// Reward `account` could claim at `current_block`. Read-only.
    pub fn pending_reward(
        &self,
        account: &UserAccount,
        current_block: u32,
    ) -> Result<i128, LedgerError> {
        account.pending(self.accumulator_at(current_block)?)
    }

    /// Adds `amount` to the account's stake, settling its pending reward.
    pub fn deposit(
        &mut self,
        account: &mut UserAccount,
        amount: i128,
        current_block: u32,
    ) -> Result<i128, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let mut ledger = self.clone();
        let mut next = account.clone();
        ledger.update_pool(current_block)?;
        let acc = ledger.pool.acc_reward_per_share;

        let payout = if next.amount > 0 { next.pending(acc)? } else { 0 };
        next.amount = next
            .amount
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        ledger.pool.total_staked = ledger
            .pool
            .total_staked
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        next.checkpoint(acc)?;

        *self = ledger;
        *account = next;
        Ok(payout)
    }

    /// Removes `amount` from the account's stake, settling its pending
    /// reward. A zero amount only harvests.
    pub fn withdraw(
        &mut self,
        account: &mut UserAccount,
        amount: i128,
        current_block: u32,
    ) -> Result<i128, LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > account.amount {
            return Err(LedgerError::InsufficientBalance);
        }

        let mut ledger = self.clone();
        let mut next = account.clone();
        ledger.update_pool(current_block)?;
        let acc = ledger.pool.acc_reward_per_share;

        let payout = next.pending(acc)?;
        next.amount -= amount;
        ledger.pool.total_staked = ledger
            .pool
            .total_staked
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;
        next.checkpoint(acc)?;

        *self = ledger;
        *account = next;
        Ok(payout)
    }

    /// Settles the account's pending reward without changing its stake.
    pub fn claim(
        &mut self,
        account: &mut UserAccount,
        current_block: u32,
    ) -> Result<i128, LedgerError> {
        let mut ledger = self.clone();
        let mut next = account.clone();
        ledger.update_pool(current_block)?;
        let acc = ledger.pool.acc_reward_per_share;

        let payout = next.pending(acc)?;
        next.checkpoint(acc)?;

        *self = ledger;
        *account = next;
        Ok(payout)
    }

    /// Moves the whole stake of `from` onto `to`.
    ///
    /// `from` is settled and zeroed; `to.amount` is overwritten with the
    /// moved stake rather than added to. Total stake is unchanged. Returns
    /// the reward owed to `from`.
    pub fn reassign(
        &mut self,
        from: &mut UserAccount,
        to: &mut UserAccount,
        current_block: u32,
    ) -> Result<i128, LedgerError> {
        let mut ledger = self.clone();
        let mut old = from.clone();
        let mut new = to.clone();
        ledger.update_pool(current_block)?;
        let acc = ledger.pool.acc_reward_per_share;

        let payout = old.pending(acc)?;
        new.amount = old.amount;
        old.amount = 0;
        old.checkpoint(acc)?;
        new.checkpoint(acc)?;

        *self = ledger;
        *from = old;
        *to = new;
        Ok(payout)
    }

    /// Changes the emission rate, returning the previous one.
    ///
    /// The accumulator is settled at the old rate up to `current_block`
    /// first, so the new rate only applies from `current_block` onward.
    pub fn set_reward_per_block(
        &mut self,
        new_rate: i128,
        current_block: u32,
    ) -> Result<i128, LedgerError> {
        let mut ledger = self.clone();
        ledger.update_pool(current_block)?;
        let old_rate = ledger.schedule.set_reward_per_block(new_rate)?;
        *self = ledger;
        Ok(old_rate)
    }
}

use soroban_sdk::contracttype;

use crate::{mul_div, LedgerError, PRECISION};

/// A depositor's stake and the share of the accumulator already settled.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserAccount {
    pub amount: i128,
    /// `amount × acc_reward_per_share / PRECISION` at the last checkpoint.
    pub reward_debt: i128,
}

impl UserAccount {
    /// Total reward attributable to the current stake at accumulator `acc`.
    pub fn accrued(&self, acc_reward_per_share: i128) -> Result<i128, LedgerError> {
        mul_div(self.amount, acc_reward_per_share, PRECISION)
    }

    /// Reward earned since the last checkpoint.
    pub fn pending(&self, acc_reward_per_share: i128) -> Result<i128, LedgerError> {
        let accrued = self.accrued(acc_reward_per_share)?;
        accrued
            .checked_sub(self.reward_debt)
            .map(|pending| pending.max(0))
            .ok_or(LedgerError::Overflow)
    }

    /// Marks everything accrued so far as settled.
    pub fn checkpoint(&mut self, acc_reward_per_share: i128) -> Result<(), LedgerError> {
        self.reward_debt = self.accrued(acc_reward_per_share)?;
        Ok(())
    }
}

#![no_std]

//! Direct VEMP staking pool.
//!
//! Depositors stake the reward token itself and earn a share of a fixed
//! per-block emission proportional to their stake. Blacklisted addresses can
//! neither deposit nor withdraw. Rewards are paid out of whatever the
//! contract holds beyond the staked principal.

pub mod events;
mod storage;

use common::{owner, token_io, AccessGate, Blacklist};
use reward_core::{get_multiplier, LedgerError, PoolState, RewardLedger, RewardSchedule, UserAccount};
use soroban_sdk::{
    contract, contractimpl, log, symbol_short, Address, Env, Symbol, Vec,
};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PoolError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the pool owner.
    Unauthorized = 3,
    /// Caller is on the blacklist.
    Blacklisted = 4,
    InvalidInput = 5,
    /// The contract did not receive exactly the declared deposit.
    AmountMismatch = 6,
    /// Batch arguments of different lengths.
    LengthMismatch = 7,
    InsufficientBalance = 8,
    Overflow = 9,
}

impl From<LedgerError> for PoolError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidAmount => PoolError::InvalidInput,
            LedgerError::InsufficientBalance => PoolError::InsufficientBalance,
            LedgerError::Overflow => PoolError::Overflow,
        }
    }
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct VempPoolContract;

#[contractimpl]
impl VempPoolContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `token`            – SAC address of the token staked and paid out.
    /// * `reward_per_block` – reward emitted per ledger across all stakers.
    /// * `start_block`      – first ledger that earns rewards (0 = now).
    /// * `reward_budget`    – total emission cap; `None` emits indefinitely.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        reward_per_block: i128,
        start_block: u32,
        reward_budget: Option<i128>,
    ) -> Result<(), PoolError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(PoolError::AlreadyInitialized);
        }

        let schedule = RewardSchedule::new(
            reward_per_block,
            start_block,
            env.ledger().sequence(),
            reward_budget,
        )?;

        owner::set_owner(&env, &admin);
        storage::set_token(&env, &token);
        storage::set_ledger(&env, &RewardLedger::new(schedule));
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, admin, token, reward_per_block, start_block);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Stake `amount` tokens.
    ///
    /// Any reward pending on the existing stake is paid out in the same call.
    pub fn deposit(env: Env, user: Address, amount: i128) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        user.require_auth();
        Self::require_not_blacklisted(&env, &user)?;

        if amount <= 0 {
            return Err(PoolError::InvalidInput);
        }

        let token = storage::get_token(&env)?;
        let mut ledger = storage::get_ledger(&env)?;
        let mut account = storage::get_user(&env, &user);

        let pending = ledger.deposit(&mut account, amount, env.ledger().sequence())?;

        storage::set_ledger(&env, &ledger);
        storage::set_user(&env, &user, &account);

        if !token_io::receive_exact(&env, &token, &user, amount) {
            return Err(PoolError::AmountMismatch);
        }
        Self::pay_reward(&env, &token, &user, pending, ledger.pool.total_staked);

        events::publish_deposit(&env, user, amount);

        Ok(())
    }

    /// Unstake `amount` tokens and collect pending reward. Zero only
    /// collects.
    pub fn withdraw(env: Env, user: Address, amount: i128) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        user.require_auth();
        Self::require_not_blacklisted(&env, &user)?;

        let token = storage::get_token(&env)?;
        let mut ledger = storage::get_ledger(&env)?;
        let mut account = storage::get_user(&env, &user);

        let pending = ledger.withdraw(&mut account, amount, env.ledger().sequence())?;

        storage::set_ledger(&env, &ledger);
        storage::set_user(&env, &user, &account);

        token_io::send(&env, &token, &user, amount);
        Self::pay_reward(&env, &token, &user, pending, ledger.pool.total_staked);

        events::publish_withdraw(&env, user, amount);

        Ok(())
    }

    /// Advance the reward accumulator to the current ledger.
    pub fn update_pool(env: Env) -> Result<(), PoolError> {
        let mut ledger = storage::get_ledger(&env)?;
        ledger.update_pool(env.ledger().sequence())?;
        storage::set_ledger(&env, &ledger);
        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Reward `user` could collect right now. Does not mutate state.
    pub fn pending_reward(env: Env, user: Address) -> Result<i128, PoolError> {
        let ledger = storage::get_ledger(&env)?;
        let account = storage::get_user(&env, &user);
        Ok(ledger.pending_reward(&account, env.ledger().sequence())?)
    }

    pub fn user_info(env: Env, user: Address) -> UserAccount {
        storage::get_user(&env, &user)
    }

    pub fn pool_info(env: Env) -> Result<PoolState, PoolError> {
        storage::get_ledger(&env).map(|ledger| ledger.pool)
    }

    pub fn reward_schedule(env: Env) -> Result<RewardSchedule, PoolError> {
        storage::get_ledger(&env).map(|ledger| ledger.schedule)
    }

    pub fn total_staked(env: Env) -> i128 {
        storage::get_ledger(&env)
            .map(|ledger| ledger.pool.total_staked)
            .unwrap_or(0)
    }

    pub fn reward_per_block(env: Env) -> i128 {
        storage::get_ledger(&env)
            .map(|ledger| ledger.schedule.reward_per_block)
            .unwrap_or(0)
    }

    pub fn start_block(env: Env) -> u32 {
        storage::get_ledger(&env)
            .map(|ledger| ledger.schedule.start_block)
            .unwrap_or(0)
    }

    pub fn end_block(env: Env) -> Option<u32> {
        storage::get_ledger(&env)
            .ok()
            .and_then(|ledger| ledger.schedule.end_block)
    }

    /// Reward-eligible ledgers in `[from, to)`.
    pub fn get_multiplier(env: Env, from: u32, to: u32) -> u32 {
        let end_block = Self::end_block(env);
        get_multiplier(from, to, end_block)
    }

    /// Tokens held beyond the staked principal.
    pub fn reward_reserve(env: Env) -> Result<i128, PoolError> {
        let token = storage::get_token(&env)?;
        let ledger = storage::get_ledger(&env)?;
        Ok(Self::reserve(&env, &token, ledger.pool.total_staked))
    }

    pub fn is_blacklisted(env: Env, addr: Address) -> bool {
        Blacklist::is_member(&env, &addr)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, PoolError> {
        owner::get_owner(&env).ok_or(PoolError::NotInitialized)
    }

    pub fn get_token(env: Env) -> Result<Address, PoolError> {
        storage::get_token(&env)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Update the reward emission rate.
    ///
    /// The accumulator is settled at the old rate up to the current ledger
    /// before the rate changes, so elapsed ledgers are never repriced.
    pub fn update_reward_per_block(
        env: Env,
        caller: Address,
        new_rate: i128,
    ) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let mut ledger = storage::get_ledger(&env)?;
        let old_rate = ledger.set_reward_per_block(new_rate, env.ledger().sequence())?;
        storage::set_ledger(&env, &ledger);

        events::publish_reward_per_block(&env, old_rate, new_rate);

        Ok(())
    }

    pub fn blacklist_address(
        env: Env,
        caller: Address,
        addr: Address,
        flag: bool,
    ) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        Blacklist::set_member(&env, &addr, flag);
        events::publish_blacklist_updated(&env, addr, flag);

        Ok(())
    }

    /// Batch form of `blacklist_address`; `addrs[i]` takes `flags[i]`.
    pub fn blacklist_addresses(
        env: Env,
        caller: Address,
        addrs: Vec<Address>,
        flags: Vec<bool>,
    ) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if addrs.len() != flags.len() {
            return Err(PoolError::LengthMismatch);
        }

        for (addr, flag) in addrs.iter().zip(flags.iter()) {
            Blacklist::set_member(&env, &addr, flag);
            events::publish_blacklist_updated(&env, addr, flag);
        }

        Ok(())
    }

    /// Top up the reward reserve. Only the owner may send reward tokens.
    pub fn fund_rewards(env: Env, sender: Address, amount: i128) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        sender.require_auth();
        Self::require_owner(&env, &sender)?;

        if amount <= 0 {
            return Err(PoolError::InvalidInput);
        }

        let token = storage::get_token(&env)?;
        if !token_io::receive_exact(&env, &token, &sender, amount) {
            return Err(PoolError::AmountMismatch);
        }

        events::publish_rewards_funded(&env, sender, amount);

        Ok(())
    }

    /// Withdraw unallocated reward tokens. Staked principal is never
    /// available to the owner.
    pub fn withdraw_tokens_by_admin(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(PoolError::InvalidInput);
        }

        let token = storage::get_token(&env)?;
        let ledger = storage::get_ledger(&env)?;
        if amount > Self::reserve(&env, &token, ledger.pool.total_staked) {
            return Err(PoolError::InsufficientBalance);
        }

        token_io::send(&env, &token, &to, amount);
        events::publish_admin_withdrawal(&env, to, amount);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), PoolError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(PoolError::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), PoolError> {
        if !owner::is_owner(env, caller) {
            return Err(PoolError::Unauthorized);
        }
        Ok(())
    }

    fn require_not_blacklisted(env: &Env, user: &Address) -> Result<(), PoolError> {
        if !Blacklist::is_allowed(env, user) {
            return Err(PoolError::Blacklisted);
        }
        Ok(())
    }

    fn reserve(env: &Env, token: &Address, total_staked: i128) -> i128 {
        token_io::held_balance(env, token)
            .saturating_sub(total_staked)
            .max(0)
    }

    /// Pays `pending` out of the reserve, capped at what the reserve holds.
    fn pay_reward(env: &Env, token: &Address, to: &Address, pending: i128, total_staked: i128) {
        let paid = pending.min(Self::reserve(env, token, total_staked));
        if paid < pending {
            log!(env, "reward reserve short", pending, paid);
        }
        token_io::send(env, token, to, paid);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

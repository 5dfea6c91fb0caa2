#![no_std]

//! VEMP reward vault.
//!
//! A single nominated receiver holds the entire stake, so every emitted
//! reward accrues to it. Whitelisted addresses may trigger the claim on its
//! behalf; the owner can reassign the stake to a new receiver at any time.

pub mod events;
mod storage;

use common::{owner, token_io, AccessGate, Whitelist};
use reward_core::{get_multiplier, LedgerError, PoolState, RewardLedger, RewardSchedule, UserAccount};
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, Symbol};

const INITIALIZED: Symbol = symbol_short!("INIT");

/// Stake credited to the receiver at initialization: one whole token at
/// 7 decimals.
pub const RECEIVER_STAKE: i128 = 10_000_000;

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VaultError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotWhitelisted = 4,
    InvalidInput = 5,
    /// The vault itself cannot hold the stake.
    InvalidReceiver = 6,
    SameReceiver = 7,
    InsufficientBalance = 8,
    Overflow = 9,
    AmountMismatch = 10,
}

impl From<LedgerError> for VaultError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidAmount => VaultError::InvalidInput,
            LedgerError::InsufficientBalance => VaultError::InsufficientBalance,
            LedgerError::Overflow => VaultError::Overflow,
        }
    }
}

#[contract]
pub struct VempVaultContract;

#[contractimpl]
impl VempVaultContract {
    /// Bootstrap the vault and credit `receiver` with [`RECEIVER_STAKE`].
    pub fn initialize(
        env: Env,
        admin: Address,
        receiver: Address,
        reward_token: Address,
        reward_per_block: i128,
        start_block: u32,
        reward_budget: Option<i128>,
    ) -> Result<(), VaultError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(VaultError::AlreadyInitialized);
        }
        if receiver == env.current_contract_address() {
            return Err(VaultError::InvalidReceiver);
        }

        let current_block = env.ledger().sequence();
        let schedule = RewardSchedule::new(reward_per_block, start_block, current_block, reward_budget)?;
        let mut ledger = RewardLedger::new(schedule);
        let mut account = UserAccount::default();
        ledger.deposit(&mut account, RECEIVER_STAKE, current_block)?;

        owner::set_owner(&env, &admin);
        storage::set_reward_token(&env, &reward_token);
        storage::set_receiver(&env, &receiver);
        storage::set_ledger(&env, &ledger);
        storage::set_user(&env, &receiver, &account);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(
            &env,
            admin,
            receiver,
            reward_token,
            reward_per_block,
            start_block,
        );

        Ok(())
    }

    // ── Claiming ────────────────────────────────────────────────────────────

    /// Pay out the reward pending for `user`.
    ///
    /// Only whitelisted callers may claim. The reward goes to the claim
    /// destination when one is set, otherwise to `user`. Returns the amount
    /// actually transferred.
    pub fn claim_pending_reward(env: Env, user: Address) -> Result<i128, VaultError> {
        Self::require_initialized(&env)?;
        user.require_auth();
        if !Whitelist::is_allowed(&env, &user) {
            return Err(VaultError::NotWhitelisted);
        }

        let token = storage::get_reward_token(&env)?;
        let mut ledger = storage::get_ledger(&env)?;
        let mut account = storage::get_user(&env, &user);

        let pending = ledger.claim(&mut account, env.ledger().sequence())?;

        storage::set_ledger(&env, &ledger);
        storage::set_user(&env, &user, &account);

        let destination = storage::get_claim_destination(&env).unwrap_or_else(|| user.clone());
        let paid = Self::pay_reward(&env, &token, &destination, pending);

        events::publish_claim(&env, user, destination, paid);

        Ok(paid)
    }

    /// Advance the reward accumulator to the current ledger.
    pub fn update_pool(env: Env) -> Result<(), VaultError> {
        let mut ledger = storage::get_ledger(&env)?;
        ledger.update_pool(env.ledger().sequence())?;
        storage::set_ledger(&env, &ledger);
        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn pending_reward(env: Env, user: Address) -> Result<i128, VaultError> {
        let ledger = storage::get_ledger(&env)?;
        let account = storage::get_user(&env, &user);
        Ok(ledger.pending_reward(&account, env.ledger().sequence())?)
    }

    pub fn user_info(env: Env, user: Address) -> UserAccount {
        storage::get_user(&env, &user)
    }

    pub fn pool_info(env: Env) -> Result<PoolState, VaultError> {
        storage::get_ledger(&env).map(|ledger| ledger.pool)
    }

    pub fn reward_schedule(env: Env) -> Result<RewardSchedule, VaultError> {
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

    pub fn get_multiplier(env: Env, from: u32, to: u32) -> u32 {
        let end_block = Self::end_block(env);
        get_multiplier(from, to, end_block)
    }

    pub fn receiver(env: Env) -> Result<Address, VaultError> {
        storage::get_receiver(&env)
    }

    pub fn claim_destination(env: Env) -> Option<Address> {
        storage::get_claim_destination(&env)
    }

    pub fn is_whitelisted(env: Env, addr: Address) -> bool {
        Whitelist::is_member(&env, &addr)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, VaultError> {
        owner::get_owner(&env).ok_or(VaultError::NotInitialized)
    }

    pub fn get_reward_token(env: Env) -> Result<Address, VaultError> {
        storage::get_reward_token(&env)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Move the whole stake to `new_receiver`.
    ///
    /// The outgoing receiver is paid what it earned up to this ledger; the
    /// incoming one starts from zero pending.
    pub fn update_receiver(
        env: Env,
        caller: Address,
        new_receiver: Address,
    ) -> Result<(), VaultError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if new_receiver == env.current_contract_address() {
            return Err(VaultError::InvalidReceiver);
        }
        let old_receiver = storage::get_receiver(&env)?;
        if new_receiver == old_receiver {
            return Err(VaultError::SameReceiver);
        }

        let token = storage::get_reward_token(&env)?;
        let mut ledger = storage::get_ledger(&env)?;
        let mut old_account = storage::get_user(&env, &old_receiver);
        let mut new_account = storage::get_user(&env, &new_receiver);

        let pending = ledger.reassign(&mut old_account, &mut new_account, env.ledger().sequence())?;

        storage::set_ledger(&env, &ledger);
        storage::set_user(&env, &old_receiver, &old_account);
        storage::set_user(&env, &new_receiver, &new_account);
        storage::set_receiver(&env, &new_receiver);

        Self::pay_reward(&env, &token, &old_receiver, pending);

        events::publish_receiver_updated(&env, old_receiver, new_receiver);

        Ok(())
    }

    /// Redirect claimed rewards to `destination`; `None` pays the claimer.
    pub fn set_claim_destination(
        env: Env,
        caller: Address,
        destination: Option<Address>,
    ) -> Result<(), VaultError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        storage::set_claim_destination(&env, &destination);
        events::publish_claim_destination_updated(&env, destination);

        Ok(())
    }

    pub fn update_reward_per_block(
        env: Env,
        caller: Address,
        new_rate: i128,
    ) -> Result<(), VaultError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let mut ledger = storage::get_ledger(&env)?;
        let old_rate = ledger.set_reward_per_block(new_rate, env.ledger().sequence())?;
        storage::set_ledger(&env, &ledger);

        events::publish_reward_per_block(&env, old_rate, new_rate);

        Ok(())
    }

    pub fn whitelist_address(
        env: Env,
        caller: Address,
        addr: Address,
        flag: bool,
    ) -> Result<(), VaultError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        Whitelist::set_member(&env, &addr, flag);
        events::publish_whitelist_updated(&env, addr, flag);

        Ok(())
    }

    /// Top up the reward balance. Only the owner may send reward tokens.
    pub fn fund_rewards(env: Env, sender: Address, amount: i128) -> Result<(), VaultError> {
        Self::require_initialized(&env)?;
        sender.require_auth();
        Self::require_owner(&env, &sender)?;

        if amount <= 0 {
            return Err(VaultError::InvalidInput);
        }

        let token = storage::get_reward_token(&env)?;
        if !token_io::receive_exact(&env, &token, &sender, amount) {
            return Err(VaultError::AmountMismatch);
        }

        events::publish_rewards_funded(&env, sender, amount);

        Ok(())
    }

    /// Withdraw reward tokens held by the vault.
    pub fn withdraw_tokens_by_admin(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), VaultError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(VaultError::InvalidInput);
        }

        let token = storage::get_reward_token(&env)?;
        if amount > token_io::held_balance(&env, &token) {
            return Err(VaultError::InsufficientBalance);
        }

        token_io::send(&env, &token, &to, amount);
        events::publish_admin_withdrawal(&env, to, amount);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), VaultError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(VaultError::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), VaultError> {
        if !owner::is_owner(env, caller) {
            return Err(VaultError::Unauthorized);
        }
        Ok(())
    }

    /// Sends `pending` capped at the vault's balance; returns what was sent.
    fn pay_reward(env: &Env, token: &Address, to: &Address, pending: i128) -> i128 {
        let paid = pending.min(token_io::held_balance(env, token)).max(0);
        if paid < pending {
            log!(env, "vault balance short", pending, paid);
        }
        token_io::send(env, token, to, paid);
        paid
    }
}

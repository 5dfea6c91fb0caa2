use common::{extend_instance, extend_persistent};
use reward_core::{RewardLedger, UserAccount};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::PoolError;

const LEDGER: Symbol = symbol_short!("LEDGER");
const TOKEN: Symbol = symbol_short!("TOKEN");

// Per-user persistent storage uses tuple keys: (prefix, user_address)
const USER: Symbol = symbol_short!("USER");

pub fn get_ledger(env: &Env) -> Result<RewardLedger, PoolError> {
    env.storage()
        .instance()
        .get(&LEDGER)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_ledger(env: &Env, ledger: &RewardLedger) {
    env.storage().instance().set(&LEDGER, ledger);
    extend_instance(env);
}

pub fn get_token(env: &Env) -> Result<Address, PoolError> {
    env.storage()
        .instance()
        .get(&TOKEN)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&TOKEN, token);
}

pub fn get_user(env: &Env, user: &Address) -> UserAccount {
    let key = (USER, user.clone());
    let account: Option<UserAccount> = env.storage().persistent().get(&key);
    if account.is_some() {
        extend_persistent(env, &key);
    }
    account.unwrap_or_default()
}

pub fn set_user(env: &Env, user: &Address, account: &UserAccount) {
    let key = (USER, user.clone());
    if *account == UserAccount::default() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, account);
    extend_persistent(env, &key);
}

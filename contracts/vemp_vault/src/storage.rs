use common::{extend_instance, extend_persistent};
use reward_core::{RewardLedger, UserAccount};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::VaultError;

const LEDGER: Symbol = symbol_short!("LEDGER");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const RECEIVER: Symbol = symbol_short!("RECEIVER");
const CLAIM_DESTINATION: Symbol = symbol_short!("CLM_DST");

// Per-user persistent storage uses tuple keys: (prefix, user_address)
const USER: Symbol = symbol_short!("USER");

pub fn get_ledger(env: &Env) -> Result<RewardLedger, VaultError> {
    env.storage()
        .instance()
        .get(&LEDGER)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_ledger(env: &Env, ledger: &RewardLedger) {
    env.storage().instance().set(&LEDGER, ledger);
    extend_instance(env);
}

pub fn get_reward_token(env: &Env) -> Result<Address, VaultError> {
    env.storage()
        .instance()
        .get(&REWARD_TOKEN)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_reward_token(env: &Env, token: &Address) {
    env.storage().instance().set(&REWARD_TOKEN, token);
}

pub fn get_receiver(env: &Env) -> Result<Address, VaultError> {
    env.storage()
        .instance()
        .get(&RECEIVER)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_receiver(env: &Env, receiver: &Address) {
    env.storage().instance().set(&RECEIVER, receiver);
}

pub fn get_claim_destination(env: &Env) -> Option<Address> {
    env.storage().instance().get(&CLAIM_DESTINATION)
}

pub fn set_claim_destination(env: &Env, destination: &Option<Address>) {
    match destination {
        Some(addr) => env.storage().instance().set(&CLAIM_DESTINATION, addr),
        None => env.storage().instance().remove(&CLAIM_DESTINATION),
    }
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

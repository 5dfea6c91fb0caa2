//! Token movements in and out of the calling contract.
//!
//! Contracts call these only after their own bookkeeping is stored.

use soroban_sdk::{token, Address, Env};

/// The calling contract's balance of `token`.
pub fn held_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

/// Pulls `amount` of `token` from `from` into the calling contract.
///
/// Returns `false` when the contract's balance did not rise by exactly
/// `amount`, e.g. for tokens that charge a transfer fee. The caller must
/// reject the operation in that case.
pub fn receive_exact(env: &Env, token: &Address, from: &Address, amount: i128) -> bool {
    let client = token::Client::new(env, token);
    let this = env.current_contract_address();

    let before = client.balance(&this);
    client.transfer(from, &this, &amount);
    let after = client.balance(&this);

    after.checked_sub(before) == Some(amount)
}

/// Sends `amount` of `token` from the calling contract to `to`.
/// Zero or negative amounts are skipped.
pub fn send(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
}

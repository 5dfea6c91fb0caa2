#![allow(deprecated)] // soroban-sdk 25 deprecates events().publish in favour of #[contractevent]

use soroban_sdk::{symbol_short, Address, Env};

// Event data tuples keep the field order consumers index by.

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    receiver: Address,
    reward_token: Address,
    reward_per_block: i128,
    start_block: u32,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        (admin, receiver, reward_token, reward_per_block, start_block),
    );
}

pub fn publish_claim(env: &Env, user: Address, destination: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIM"), user.clone()),
        (user, destination, amount),
    );
}

pub fn publish_reward_per_block(env: &Env, old_rate: i128, new_rate: i128) {
    env.events()
        .publish((symbol_short!("RWD_RATE"),), (old_rate, new_rate));
}

pub fn publish_whitelist_updated(env: &Env, addr: Address, flag: bool) {
    env.events()
        .publish((symbol_short!("WL_UPD"), addr.clone()), (addr, flag));
}

pub fn publish_receiver_updated(env: &Env, old_receiver: Address, new_receiver: Address) {
    env.events().publish(
        (symbol_short!("RCV_UPD"),),
        (old_receiver, new_receiver),
    );
}

pub fn publish_claim_destination_updated(env: &Env, destination: Option<Address>) {
    env.events()
        .publish((symbol_short!("CLM_DST"),), (destination,));
}

pub fn publish_rewards_funded(env: &Env, sender: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("FUNDED"), sender.clone()), (sender, amount));
}

pub fn publish_admin_withdrawal(env: &Env, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("ADM_WDRW"), to.clone()), (to, amount));
}

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};
use vemp_pool::{VempPoolContract, VempPoolContractClient};

const FUNDED: i128 = 1_000_000_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { amount: u64 },
    Withdraw { amount: u64 },
    Mine { blocks: u16 },
    SetRate { rate: u32 },
    Blacklist { flag: bool },
    AdminWithdraw { amount: u64 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(1);

    let admin = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(VempPoolContract, ());
    let client = VempPoolContractClient::new(&env, &contract_id);
    client.initialize(&admin, &token, &1_000i128, &0u32, &Some(FUNDED));

    let asset = StellarAssetClient::new(&env, &token);
    asset.mint(&admin, &FUNDED);
    client.fund_rewards(&admin, &FUNDED);

    let mut users = vec![];
    for _ in 0..4 {
        let user = Address::generate(&env);
        asset.mint(&user, &FUNDED);
        users.push(user);
    }

    // Looking for host panics; rejected calls are expected.
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Deposit { amount } => {
                let _ = client.try_deposit(caller, &(amount as i128));
            }
            FuzzAction::Withdraw { amount } => {
                let _ = client.try_withdraw(caller, &(amount as i128));
            }
            FuzzAction::Mine { blocks } => {
                let next = env.ledger().sequence().saturating_add(blocks as u32);
                env.ledger().set_sequence_number(next);
            }
            FuzzAction::SetRate { rate } => {
                let _ = client.try_update_reward_per_block(&admin, &(rate as i128));
            }
            FuzzAction::Blacklist { flag } => {
                let _ = client.try_blacklist_address(&admin, caller, &flag);
            }
            FuzzAction::AdminWithdraw { amount } => {
                let _ = client.try_withdraw_tokens_by_admin(&admin, &admin, &(amount as i128));
            }
        }

        let staked: i128 = users.iter().map(|u| client.user_info(u).amount).sum();
        assert_eq!(staked, client.total_staked());
        assert!(client.reward_reserve() >= 0);
    }
});

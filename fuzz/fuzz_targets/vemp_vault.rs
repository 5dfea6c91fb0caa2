#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};
use vemp_vault::{VempVaultContract, VempVaultContractClient, RECEIVER_STAKE};

const FUNDED: i128 = 1_000_000_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Claim { who: u8 },
    UpdateReceiver { who: u8 },
    Whitelist { who: u8, flag: bool },
    Mine { blocks: u16 },
    SetRate { rate: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(1);

    let admin = Address::generate(&env);
    let mut users = vec![];
    for _ in 0..4 {
        users.push(Address::generate(&env));
    }
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(VempVaultContract, ());
    let client = VempVaultContractClient::new(&env, &contract_id);
    client.initialize(&admin, &users[0], &token, &1_000i128, &0u32, &None);

    StellarAssetClient::new(&env, &token).mint(&admin, &FUNDED);
    client.fund_rewards(&admin, &FUNDED);

    let pick = |who: u8| &users[who as usize % users.len()];

    for action in actions {
        match action {
            FuzzAction::Claim { who } => {
                let _ = client.try_claim_pending_reward(pick(who));
            }
            FuzzAction::UpdateReceiver { who } => {
                let _ = client.try_update_receiver(&admin, pick(who));
            }
            FuzzAction::Whitelist { who, flag } => {
                let _ = client.try_whitelist_address(&admin, pick(who), &flag);
            }
            FuzzAction::Mine { blocks } => {
                let next = env.ledger().sequence().saturating_add(blocks as u32);
                env.ledger().set_sequence_number(next);
            }
            FuzzAction::SetRate { rate } => {
                let _ = client.try_update_reward_per_block(&admin, &(rate as i128));
            }
        }

        // The whole stake always sits with exactly the current receiver.
        let receiver = client.receiver();
        assert_eq!(client.user_info(&receiver).amount, RECEIVER_STAKE);
        let staked: i128 = users.iter().map(|u| client.user_info(u).amount).sum();
        assert_eq!(staked, RECEIVER_STAKE);
    }
});

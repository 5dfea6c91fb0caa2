#![allow(clippy::unwrap_used, clippy::expect_used)]
extern crate std;

use soroban_sdk::{
    contract, contractimpl,
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use fee_token::{FeeToken, FeeTokenClient};

use crate::{owner, token_io, AccessGate, Blacklist, Whitelist};

/// Token that keeps 1% of every transfer, so the recipient is credited
/// less than the amount sent.
mod fee_token {
    use soroban_sdk::{contract, contractimpl, Address, Env, MuxedAddress};

    #[contract]
    pub struct FeeToken;

    #[contractimpl]
    impl FeeToken {
        pub fn mint(env: Env, to: Address, amount: i128) {
            let balance = Self::balance(env.clone(), to.clone());
            env.storage().persistent().set(&to, &(balance + amount));
        }

        pub fn balance(env: Env, id: Address) -> i128 {
            env.storage().persistent().get(&id).unwrap_or(0)
        }

        pub fn transfer(env: Env, from: Address, to: MuxedAddress, amount: i128) {
            from.require_auth();
            let to = to.address();
            let fee = amount / 100;

            let from_balance = Self::balance(env.clone(), from.clone());
            env.storage().persistent().set(&from, &(from_balance - amount));
            let to_balance = Self::balance(env.clone(), to.clone());
            env.storage()
                .persistent()
                .set(&to, &(to_balance + amount - fee));
        }
    }
}

/// Bare contract giving the helpers a storage context.
#[contract]
pub struct Host;

#[contractimpl]
impl Host {
    pub fn ping() -> u32 {
        1
    }
}

fn setup() -> (Env, Address) {
    let env = Env::default();
    env.mock_all_auths_allowing_non_root_auth();
    let host = env.register(Host, ());
    (env, host)
}

// ── Owner ────────────────────────────────────────────────────────────────────

#[test]
fn test_owner_unset_rejects_everyone() {
    let (env, host) = setup();
    let anyone = Address::generate(&env);
    env.as_contract(&host, || {
        assert_eq!(owner::get_owner(&env), None);
        assert!(!owner::is_owner(&env, &anyone));
    });
}

#[test]
fn test_owner_matches_only_recorded_address() {
    let (env, host) = setup();
    let admin = Address::generate(&env);
    let other = Address::generate(&env);
    env.as_contract(&host, || {
        owner::set_owner(&env, &admin);
        assert!(owner::is_owner(&env, &admin));
        assert!(!owner::is_owner(&env, &other));
    });
}

// ── Access gates ─────────────────────────────────────────────────────────────

#[test]
fn test_blacklist_defaults_to_allowed() {
    let (env, host) = setup();
    let user = Address::generate(&env);
    env.as_contract(&host, || {
        assert!(Blacklist::is_allowed(&env, &user));
        Blacklist::set_member(&env, &user, true);
        assert!(!Blacklist::is_allowed(&env, &user));
        Blacklist::set_member(&env, &user, false);
        assert!(Blacklist::is_allowed(&env, &user));
    });
}

#[test]
fn test_whitelist_defaults_to_denied() {
    let (env, host) = setup();
    let user = Address::generate(&env);
    env.as_contract(&host, || {
        assert!(!Whitelist::is_allowed(&env, &user));
        Whitelist::set_member(&env, &user, true);
        assert!(Whitelist::is_allowed(&env, &user));
    });
}

#[test]
fn test_gate_toggle_is_idempotent() {
    let (env, host) = setup();
    let user = Address::generate(&env);
    env.as_contract(&host, || {
        Whitelist::set_member(&env, &user, true);
        Whitelist::set_member(&env, &user, true);
        assert!(Whitelist::is_member(&env, &user));
        Whitelist::set_member(&env, &user, false);
        Whitelist::set_member(&env, &user, false);
        assert!(!Whitelist::is_member(&env, &user));
    });
}

#[test]
fn test_gates_do_not_share_membership() {
    let (env, host) = setup();
    let user = Address::generate(&env);
    env.as_contract(&host, || {
        Blacklist::set_member(&env, &user, true);
        assert!(!Whitelist::is_member(&env, &user));
    });
}

// ── Token I/O ────────────────────────────────────────────────────────────────

#[test]
fn test_receive_exact_and_send() {
    let (env, host) = setup();
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let user = Address::generate(&env);
    StellarAssetClient::new(&env, &token).mint(&user, &500);

    env.as_contract(&host, || {
        assert!(token_io::receive_exact(&env, &token, &user, 200));
        assert_eq!(token_io::held_balance(&env, &token), 200);

        token_io::send(&env, &token, &user, 50);
        token_io::send(&env, &token, &user, 0);
        assert_eq!(token_io::held_balance(&env, &token), 150);
    });

    assert_eq!(TokenClient::new(&env, &token).balance(&user), 350);
}

#[test]
fn test_receive_exact_detects_short_transfer() {
    let (env, host) = setup();
    let token = env.register(FeeToken, ());
    let user = Address::generate(&env);
    FeeTokenClient::new(&env, &token).mint(&user, &1_000);

    env.as_contract(&host, || {
        assert!(!token_io::receive_exact(&env, &token, &user, 1_000));
        assert_eq!(token_io::held_balance(&env, &token), 990);
    });
}

#![cfg(test)]

use super::*;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{symbol_short, vec, Address, Env, IntoVal};

const NFT_ID_1: u64 = 11111;
const NFT_ID_2: u64 = 22222;

/// Registers and initializes the contract; returns `(env, client, owner)`.
fn setup() -> (Env, PausableNftContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PausableNftContract, ());
    let client = PausableNftContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner);

    (env, client, owner)
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_initialize() {
    let (_env, client, owner) = setup();

    assert_eq!(client.owner(), owner);
    assert!(!client.paused());
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_double_initialize_rejected() {
    let (env, client, _owner) = setup();

    let other = Address::generate(&env);
    assert_eq!(
        client.try_initialize(&other),
        Err(Ok(NftError::AlreadyInitialized))
    );
}

#[test]
fn test_mint_before_initialize_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PausableNftContract, ());
    let client = PausableNftContractClient::new(&env, &contract_id);
    let someone = Address::generate(&env);

    assert_eq!(
        client.try_mint(&someone, &someone, &NFT_ID_1),
        Err(Ok(NftError::NotInitialized))
    );
    assert_eq!(client.try_owner(), Err(Ok(NftError::NotInitialized)));
    assert!(!client.paused());
    assert_eq!(client.balance_of(&someone), 0);
}

// ============================================================================
// Minting
// ============================================================================

#[test]
fn test_mint_assigns_owner_and_balance() {
    let (env, client, owner) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&owner, &alice, &NFT_ID_1);

    assert_eq!(client.balance_of(&alice), 1);
    assert_eq!(client.balance_of(&owner), 0);
    assert_eq!(client.balance_of(&bob), 0);
    assert_eq!(client.owner_of(&NFT_ID_1), Some(alice));
    assert_eq!(client.owner_of(&NFT_ID_2), None);
    assert_eq!(client.total_supply(), 1);
}

#[test]
fn test_mint_multiple_to_same_account() {
    let (env, client, owner) = setup();
    let alice = Address::generate(&env);

    client.mint(&owner, &alice, &1);
    client.mint(&owner, &alice, &2);
    client.mint(&owner, &alice, &3);

    assert_eq!(client.balance_of(&alice), 3);
    assert_eq!(client.total_supply(), 3);
}

#[test]
fn test_duplicate_mint_rejected() {
    let (env, client, owner) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&owner, &alice, &NFT_ID_1);

    // Same id to a different holder must also be refused.
    assert_eq!(
        client.try_mint(&owner, &alice, &NFT_ID_1),
        Err(Ok(NftError::DuplicateToken))
    );
    assert_eq!(
        client.try_mint(&owner, &bob, &NFT_ID_1),
        Err(Ok(NftError::DuplicateToken))
    );

    assert_eq!(client.balance_of(&alice), 1);
    assert_eq!(client.balance_of(&bob), 0);
    assert_eq!(client.owner_of(&NFT_ID_1), Some(alice));
    assert_eq!(client.total_supply(), 1);
}

#[test]
fn test_non_owner_cannot_mint() {
    let (env, client, _owner) = setup();
    let alice = Address::generate(&env);

    assert_eq!(
        client.try_mint(&alice, &alice, &NFT_ID_1),
        Err(Ok(NftError::Unauthorized))
    );
    assert_eq!(client.balance_of(&alice), 0);
    assert_eq!(client.owner_of(&NFT_ID_1), None);
}

#[test]
fn test_mint_emits_event() {
    let (env, client, owner) = setup();
    let alice = Address::generate(&env);

    client.mint(&owner, &alice, &NFT_ID_1);

    let events = env.events().all();
    let last_event = events.last().unwrap();

    assert_eq!(last_event.0, client.address);
    assert_eq!(
        last_event.1,
        vec![
            &env,
            symbol_short!("mint").into_val(&env),
            alice.into_val(&env)
        ]
    );
    let token_id: u64 = last_event.2.into_val(&env);
    assert_eq!(token_id, NFT_ID_1);
}

// ============================================================================
// Pause/Unpause
// ============================================================================

#[test]
fn test_mint_while_paused_rejected() {
    let (env, client, owner) = setup();
    let bob = Address::generate(&env);

    client.pause(&owner);
    assert!(client.paused());

    assert_eq!(
        client.try_mint(&owner, &bob, &NFT_ID_2),
        Err(Ok(NftError::Paused))
    );
    assert!(client.paused());
    assert_eq!(client.balance_of(&bob), 0);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_unpause_restores_minting() {
    let (env, client, owner) = setup();
    let bob = Address::generate(&env);

    client.pause(&owner);
    client.unpause(&owner);
    assert!(!client.paused());

    client.mint(&owner, &bob, &NFT_ID_2);
    assert_eq!(client.balance_of(&bob), 1);
}

#[test]
fn test_pause_is_idempotent() {
    let (env, client, owner) = setup();
    let alice = Address::generate(&env);

    client.mint(&owner, &alice, &NFT_ID_1);
    client.pause(&owner);
    client.pause(&owner);

    assert!(client.paused());
    assert_eq!(client.balance_of(&alice), 1);
    assert_eq!(client.total_supply(), 1);

    client.unpause(&owner);
    client.unpause(&owner);
    assert!(!client.paused());
}

#[test]
fn test_non_owner_cannot_pause_or_unpause() {
    let (env, client, owner) = setup();
    let bob = Address::generate(&env);

    assert_eq!(client.try_pause(&bob), Err(Ok(NftError::Unauthorized)));
    assert!(!client.paused());

    client.pause(&owner);
    assert_eq!(client.try_unpause(&bob), Err(Ok(NftError::Unauthorized)));
    assert!(client.paused());
}

#[test]
fn test_unauthorized_reported_before_paused() {
    let (env, client, owner) = setup();
    let bob = Address::generate(&env);

    client.pause(&owner);
    assert_eq!(
        client.try_mint(&bob, &bob, &NFT_ID_2),
        Err(Ok(NftError::Unauthorized))
    );
}

#[test]
fn test_pause_emits_event() {
    let (env, client, owner) = setup();

    client.pause(&owner);

    let events = env.events().all();
    let last_event = events.last().unwrap();
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("pause").into_val(&env)]
    );
    let caller: Address = last_event.2.into_val(&env);
    assert_eq!(caller, owner);
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_mint_pause_unpause_flow() {
    let (env, client, owner) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&owner, &alice, &NFT_ID_1);
    assert_eq!(client.balance_of(&alice), 1);
    assert_eq!(client.balance_of(&owner), 0);
    assert_eq!(client.balance_of(&bob), 0);

    assert_eq!(
        client.try_mint(&owner, &alice, &NFT_ID_1),
        Err(Ok(NftError::DuplicateToken))
    );

    client.pause(&owner);
    assert_eq!(
        client.try_mint(&owner, &bob, &NFT_ID_2),
        Err(Ok(NftError::Paused))
    );
    assert!(client.paused());

    client.unpause(&owner);
    client.mint(&owner, &bob, &NFT_ID_2);
    assert!(!client.paused());
    assert_eq!(client.balance_of(&bob), 1);
    assert_eq!(client.balance_of(&owner), 0);
    assert_eq!(client.total_supply(), 2);
}

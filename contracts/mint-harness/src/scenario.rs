//! Scenario catalogue. Scenarios share one token instance, so each one names
//! the scenario whose effects it builds on.

use soroban_sdk::{contracttype, symbol_short};

use crate::fixture::{Fixture, Observation};
use crate::NftError;

pub const NFT_ID_1: u64 = 11111;
pub const NFT_ID_2: u64 = 22222;
pub const NFT_ID_3: u64 = 33333;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scenario {
    MintsToken,
    OtherBalancesUntouched,
    DuplicateMintRejected,
    MintWhilePausedRejected,
    MintAfterUnpause,
    NonOwnerRejected,
}

impl Scenario {
    /// Declaration (and run) order.
    pub const ALL: [Scenario; 6] = [
        Scenario::MintsToken,
        Scenario::OtherBalancesUntouched,
        Scenario::DuplicateMintRejected,
        Scenario::MintWhilePausedRejected,
        Scenario::MintAfterUnpause,
        Scenario::NonOwnerRejected,
    ];

    /// Scenario that must have run before this one.
    pub fn depends_on(&self) -> Option<Scenario> {
        match self {
            Scenario::MintsToken => None,
            Scenario::OtherBalancesUntouched => Some(Scenario::MintsToken),
            Scenario::DuplicateMintRejected => Some(Scenario::MintsToken),
            Scenario::MintWhilePausedRejected => None,
            Scenario::MintAfterUnpause => Some(Scenario::MintWhilePausedRejected),
            Scenario::NonOwnerRejected => Some(Scenario::MintAfterUnpause),
        }
    }
}

pub(crate) fn execute(fx: &mut Fixture<'_>, scenario: Scenario) {
    match scenario {
        Scenario::MintsToken => mints_token(fx),
        Scenario::OtherBalancesUntouched => other_balances_untouched(fx),
        Scenario::DuplicateMintRejected => duplicate_mint_rejected(fx),
        Scenario::MintWhilePausedRejected => mint_while_paused_rejected(fx),
        Scenario::MintAfterUnpause => mint_after_unpause(fx),
        Scenario::NonOwnerRejected => non_owner_rejected(fx),
    }
}

fn mints_token(fx: &mut Fixture<'_>) {
    let (owner, alice) = (fx.owner().clone(), fx.alice().clone());

    let minted = fx.mint(&owner, &alice, NFT_ID_1);
    fx.expect(symbol_short!("mint"), Observation::Accepted, minted);

    let balance = fx.balance(&alice);
    let expected = fx.balance_after(&alice, 1);
    fx.expect(symbol_short!("alice_bal"), expected, balance);
}

fn other_balances_untouched(fx: &mut Fixture<'_>) {
    let (owner, bob) = (fx.owner().clone(), fx.bob().clone());

    let balance = fx.balance(&owner);
    let expected = fx.balance_after(&owner, 0);
    fx.expect(symbol_short!("owner_bal"), expected, balance);

    let balance = fx.balance(&bob);
    let expected = fx.balance_after(&bob, 0);
    fx.expect(symbol_short!("bob_bal"), expected, balance);
}

fn duplicate_mint_rejected(fx: &mut Fixture<'_>) {
    let (owner, alice) = (fx.owner().clone(), fx.alice().clone());

    let minted = fx.mint(&owner, &alice, NFT_ID_1);
    fx.expect(
        symbol_short!("dup_mint"),
        Observation::rejected(NftError::DuplicateToken),
        minted,
    );

    let balance = fx.balance(&alice);
    let expected = fx.balance_after(&alice, 1);
    fx.expect(symbol_short!("alice_bal"), expected, balance);

    let supply = fx.supply();
    let expected = fx.supply_after(1);
    fx.expect(symbol_short!("supply"), expected, supply);
}

fn mint_while_paused_rejected(fx: &mut Fixture<'_>) {
    let (owner, bob) = (fx.owner().clone(), fx.bob().clone());

    let paused = fx.pause(&owner);
    fx.expect(symbol_short!("pause"), Observation::Accepted, paused);

    let minted = fx.mint(&owner, &bob, NFT_ID_2);
    fx.expect(
        symbol_short!("mint"),
        Observation::rejected(NftError::Paused),
        minted,
    );

    let state = fx.paused();
    fx.expect(symbol_short!("paused"), Observation::Paused(true), state);

    let balance = fx.balance(&bob);
    let expected = fx.balance_after(&bob, 0);
    fx.expect(symbol_short!("bob_bal"), expected, balance);
}

fn mint_after_unpause(fx: &mut Fixture<'_>) {
    let (owner, bob) = (fx.owner().clone(), fx.bob().clone());

    let unpaused = fx.unpause(&owner);
    fx.expect(symbol_short!("unpause"), Observation::Accepted, unpaused);

    let minted = fx.mint(&owner, &bob, NFT_ID_2);
    fx.expect(symbol_short!("mint"), Observation::Accepted, minted);

    let state = fx.paused();
    fx.expect(symbol_short!("paused"), Observation::Paused(false), state);

    let balance = fx.balance(&bob);
    let expected = fx.balance_after(&bob, 1);
    fx.expect(symbol_short!("bob_bal"), expected, balance);

    let balance = fx.balance(&owner);
    let expected = fx.balance_after(&owner, 0);
    fx.expect(symbol_short!("owner_bal"), expected, balance);

    let supply = fx.supply();
    let expected = fx.supply_after(2);
    fx.expect(symbol_short!("supply"), expected, supply);
}

fn non_owner_rejected(fx: &mut Fixture<'_>) {
    let bob = fx.bob().clone();

    let minted = fx.mint(&bob, &bob, NFT_ID_3);
    fx.expect(
        symbol_short!("mint"),
        Observation::rejected(NftError::Unauthorized),
        minted,
    );

    let paused = fx.pause(&bob);
    fx.expect(
        symbol_short!("pause"),
        Observation::rejected(NftError::Unauthorized),
        paused,
    );

    let state = fx.paused();
    fx.expect(symbol_short!("paused"), Observation::Paused(false), state);

    let balance = fx.balance(&bob);
    let expected = fx.balance_after(&bob, 1);
    fx.expect(symbol_short!("bob_bal"), expected, balance);
}

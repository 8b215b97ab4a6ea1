//! # Pausable NFT Contract
//!
//! Minimal non-fungible token with a single privileged owner. The owner mints
//! tokens with caller-chosen numeric ids and can pause the contract, which
//! blocks minting until it is unpaused. Read-only queries (balances, token
//! owners, pause state) are always available.
//!
//! Every precondition violation is returned as a typed [`NftError`].

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

mod events;

#[cfg(test)]
mod test;

// ─── Errors ─────────────────────────────────────────────────────────

/// Reasons a state-changing call is rejected.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller is not the privileged owner.
    Unauthorized = 3,
    /// Contract is paused; minting is disabled.
    Paused = 4,
    /// The token id has already been minted.
    DuplicateToken = 5,
}

// ─── Storage ────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Privileged owner (instance)
    Owner,
    /// Pause flag (instance)
    Paused,
    /// Number of minted tokens (instance)
    TotalSupply,
    /// Token id -> holder (persistent)
    TokenOwner(u64),
    /// Holder -> token count (persistent)
    Balance(Address),
}

#[contract]
pub struct PausableNftContract;

#[contractimpl]
impl PausableNftContract {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time initialization. `owner` becomes the only address allowed to
    /// mint, pause and unpause, and must authorize the call.
    pub fn initialize(env: Env, owner: Address) -> Result<(), NftError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(NftError::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage().instance().set(&DataKey::TotalSupply, &0u32);

        events::emit_initialized(&env, &owner);
        Ok(())
    }

    // ── Minting ─────────────────────────────────────────────────────

    /// Mint `token_id` to `to`.
    ///
    /// Checks run in a fixed order so the reported reason is deterministic:
    /// owner, then pause state, then id uniqueness. A rejected call leaves
    /// all balances and ownership records untouched.
    ///
    /// # Errors
    /// * [`NftError::NotInitialized`] - contract has no owner yet
    /// * [`NftError::Unauthorized`] - `caller` is not the owner
    /// * [`NftError::Paused`] - contract is paused
    /// * [`NftError::DuplicateToken`] - `token_id` already exists
    pub fn mint(env: Env, caller: Address, to: Address, token_id: u64) -> Result<(), NftError> {
        Self::require_owner(&env, &caller)?;
        if Self::paused(env.clone()) {
            return Err(NftError::Paused);
        }

        let token_key = DataKey::TokenOwner(token_id);
        if env.storage().persistent().has(&token_key) {
            return Err(NftError::DuplicateToken);
        }

        env.storage().persistent().set(&token_key, &to);

        let balance_key = DataKey::Balance(to.clone());
        let balance: u32 = env.storage().persistent().get(&balance_key).unwrap_or(0);
        env.storage().persistent().set(&balance_key, &(balance + 1));

        let supply = Self::total_supply(env.clone());
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(supply + 1));

        events::emit_minted(&env, &to, token_id);
        Ok(())
    }

    // ── Pause/Unpause ───────────────────────────────────────────────

    /// Pause minting. Only the owner can pause; pausing twice is a no-op.
    pub fn pause(env: Env, caller: Address) -> Result<(), NftError> {
        Self::require_owner(&env, &caller)?;
        env.storage().instance().set(&DataKey::Paused, &true);
        events::emit_paused(&env, &caller);
        Ok(())
    }

    /// Resume minting. Only the owner can unpause.
    pub fn unpause(env: Env, caller: Address) -> Result<(), NftError> {
        Self::require_owner(&env, &caller)?;
        env.storage().instance().set(&DataKey::Paused, &false);
        events::emit_unpaused(&env, &caller);
        Ok(())
    }

    /// Whether minting is currently disabled. `false` before initialization.
    pub fn paused(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Number of tokens held by `account`.
    pub fn balance_of(env: Env, account: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(account))
            .unwrap_or(0)
    }

    /// Holder of `token_id`, or `None` if it was never minted.
    pub fn owner_of(env: Env, token_id: u64) -> Option<Address> {
        env.storage().persistent().get(&DataKey::TokenOwner(token_id))
    }

    /// Total number of tokens minted so far.
    pub fn total_supply(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    /// The privileged owner.
    pub fn owner(env: Env) -> Result<Address, NftError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(NftError::NotInitialized)
    }

    // ── Internal Helper Methods ─────────────────────────────────────

    fn require_owner(env: &Env, caller: &Address) -> Result<(), NftError> {
        caller.require_auth();
        let owner = Self::owner(env.clone())?;
        if *caller != owner {
            return Err(NftError::Unauthorized);
        }
        Ok(())
    }
}

//! # NFT Mint Harness Contract
//!
//! Drives one deployed token contract through a fixed, ordered list of
//! scenarios and records a pass/fail outcome for each. The harness talks to
//! the token only through its public interface (`mint`, `balance_of`,
//! `pause`, `unpause`, `paused`, `total_supply`), so any contract exposing
//! that interface can be verified.
//!
//! ## Supported Scenarios
//! 1. **Mint**: owner mints a token to Alice
//! 2. **Other balances**: owner and Bob gained nothing
//! 3. **Duplicate mint**: re-minting an id is rejected as a duplicate
//! 4. **Paused mint**: after `pause`, minting is rejected as paused
//! 5. **Unpaused mint**: after `unpause`, minting works again
//! 6. **Non-owner**: a participant cannot mint or pause
//!
//! ## Failure handling
//! - Expected rejections are matched on their typed reason, not just on
//!   the fact that the call failed.
//! - Error codes the token does not declare are recorded as they are.
//! - A mismatching check marks its scenario failed; later scenarios still run.
//! - A call that aborts (missing contract, trap, host error) aborts the
//!   whole run.

#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

mod events;
mod fixture;
mod scenario;


pub use fixture::{AssertionFailure, Observation};
pub use scenario::{Scenario, NFT_ID_1, NFT_ID_2, NFT_ID_3};

/// Token client: WASM import for wasm32, crate client for host builds.
#[cfg(target_arch = "wasm32")]
mod pausable_nft_import {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/pausable_nft.wasm"
    );
    pub use Client as PausableNftContractClient;
}

#[cfg(not(target_arch = "wasm32"))]
use pausable_nft::{NftError, PausableNftContractClient};

#[cfg(target_arch = "wasm32")]
use pausable_nft_import::{NftError, PausableNftContractClient};

// ─── Data Types ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    Outcome(Scenario),
}

/// Accounts and token instance shared by every scenario.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct HarnessConfig {
    pub token: Address,
    /// Privileged token owner (first account).
    pub owner: Address,
    pub alice: Address,
    pub bob: Address,
    /// Token supply observed at initialization; supply checks are relative to it.
    pub baseline_supply: u32,
    /// Balances observed at initialization, in `[owner, alice, bob]` order.
    pub baseline_balances: (u32, u32, u32),
}

/// Result of one scenario execution
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub passed: bool,
    /// Number of checks evaluated.
    pub checks: u32,
    pub failures: Vec<AssertionFailure>,
    pub executed_at: u64,
}

/// Summary of a full run, outcomes in declaration order.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub passed: u32,
    pub failed: u32,
    pub outcomes: Vec<ScenarioOutcome>,
}

// ─── Contract Implementation ────────────────────────────────────────

#[contract]
pub struct MintHarnessContract;

#[contractimpl]
impl MintHarnessContract {
    // ── Initialization ──────────────────────────────────────────────

    /// Bind the harness to a token instance and a set of accounts.
    ///
    /// # Arguments
    /// * `token` - Token contract under test
    /// * `accounts` - At least three accounts: `[owner, alice, bob, ..]`.
    ///   The first is the privileged token owner and must authorize.
    pub fn initialize(env: Env, token: Address, accounts: Vec<Address>) {
        if env.storage().instance().has(&DataKey::Config) {
            panic!("already initialized");
        }
        assert!(accounts.len() >= 3, "at least three accounts required");

        let owner = accounts.get_unchecked(0);
        owner.require_auth();

        let client = PausableNftContractClient::new(&env, &token);
        // Also proves the token address is a live contract.
        let baseline_supply = match client.try_total_supply() {
            Ok(Ok(supply)) => supply,
            _ => panic!("token contract call failed"),
        };

        let alice = accounts.get_unchecked(1);
        let bob = accounts.get_unchecked(2);
        let baseline_balances = (
            client.balance_of(&owner),
            client.balance_of(&alice),
            client.balance_of(&bob),
        );

        let config = HarnessConfig {
            token,
            owner,
            alice,
            bob,
            baseline_supply,
            baseline_balances,
        };
        env.storage().instance().set(&DataKey::Config, &config);

        events::emit_initialized(&env, &config.token, &config.owner);
    }

    // ── Scenario Orchestration ──────────────────────────────────────

    /// Execute a single scenario and store its outcome.
    ///
    /// # Panics
    /// - Harness is not initialized
    /// - The scenario already ran
    /// - The scenario's declared dependency has not run yet
    /// - A token call fails at the host level
    pub fn run_scenario(env: Env, scenario: Scenario) -> ScenarioOutcome {
        let config = Self::load_config(&env);
        config.owner.require_auth();

        assert!(
            !Self::executed(&env, scenario),
            "scenario already executed"
        );
        if let Some(dependency) = scenario.depends_on() {
            assert!(
                Self::executed(&env, dependency),
                "scenario dependency not executed"
            );
        }

        Self::execute(&env, &config, scenario)
    }

    /// Execute every scenario that has not run yet, in declaration order.
    ///
    /// Failed checks never stop the run. The report covers all scenarios,
    /// including ones executed earlier through `run_scenario`.
    pub fn run_all(env: Env) -> RunReport {
        let config = Self::load_config(&env);
        config.owner.require_auth();

        let mut report = RunReport {
            passed: 0,
            failed: 0,
            outcomes: Vec::new(&env),
        };

        for scenario in Scenario::ALL {
            let outcome = match Self::get_outcome(env.clone(), scenario) {
                Some(outcome) => outcome,
                None => Self::execute(&env, &config, scenario),
            };
            if outcome.passed {
                report.passed += 1;
            } else {
                report.failed += 1;
            }
            report.outcomes.push_back(outcome);
        }

        events::emit_run_completed(&env, report.passed, report.failed);
        report
    }

    // ── Query Methods ───────────────────────────────────────────────

    /// Get the recorded outcome of a scenario, if it ran.
    pub fn get_outcome(env: Env, scenario: Scenario) -> Option<ScenarioOutcome> {
        env.storage()
            .instance()
            .get(&DataKey::Outcome(scenario))
    }

    /// Get the harness configuration.
    pub fn get_config(env: Env) -> HarnessConfig {
        Self::load_config(&env)
    }

    // ── Internal Helper Methods ─────────────────────────────────────

    fn load_config(env: &Env) -> HarnessConfig {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .expect("not initialized")
    }

    fn executed(env: &Env, scenario: Scenario) -> bool {
        env.storage().instance().has(&DataKey::Outcome(scenario))
    }

    fn execute(env: &Env, config: &HarnessConfig, scenario: Scenario) -> ScenarioOutcome {
        let mut fx = fixture::Fixture::new(env, config);
        scenario::execute(&mut fx, scenario);
        let outcome = fx.finish(scenario);

        env.storage()
            .instance()
            .set(&DataKey::Outcome(scenario), &outcome);
        events::emit_scenario_completed(env, &outcome);
        outcome
    }
}

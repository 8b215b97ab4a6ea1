//! Harness events. Topics use short symbols; payloads carry the scenario
//! result or run totals.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::ScenarioOutcome;

pub const INITIALIZED: Symbol = symbol_short!("init");
pub const SCENARIO: Symbol = symbol_short!("scenario");
pub const RUN_COMPLETED: Symbol = symbol_short!("run_done");

pub fn emit_initialized(env: &Env, token: &Address, owner: &Address) {
    env.events()
        .publish((INITIALIZED,), (token.clone(), owner.clone()));
}

/// Topics: `("scenario", scenario)`; data: `(passed, failed_checks)`.
pub fn emit_scenario_completed(env: &Env, outcome: &ScenarioOutcome) {
    env.events().publish(
        (SCENARIO, outcome.scenario),
        (outcome.passed, outcome.failures.len()),
    );
}

pub fn emit_run_completed(env: &Env, passed: u32, failed: u32) {
    env.events().publish((RUN_COMPLETED,), (passed, failed));
}

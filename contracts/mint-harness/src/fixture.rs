//! Scenario fixture: the token client, the shared accounts and the running
//! tally of checks for the scenario currently executing.

use soroban_sdk::{contracttype, log, Address, Env, InvokeError, Symbol, Vec};

use crate::scenario::Scenario;
use crate::{HarnessConfig, NftError, PausableNftContractClient, ScenarioOutcome};

/// A value read back from the token, or the result of a state-changing call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Observation {
    Balance(u32),
    Supply(u32),
    Paused(bool),
    /// Call succeeded.
    Accepted,
    /// Call was rejected with this contract error code. Codes outside
    /// `NftError` are kept as-is.
    Rejected(u32),
}

impl Observation {
    pub fn rejected(reason: NftError) -> Self {
        Observation::Rejected(reason as u32)
    }
}

/// One check whose observed value did not match.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssertionFailure {
    pub check: Symbol,
    pub expected: Observation,
    pub observed: Observation,
}

pub(crate) struct Fixture<'a> {
    env: &'a Env,
    config: &'a HarnessConfig,
    token: PausableNftContractClient<'a>,
    checks: u32,
    failures: Vec<AssertionFailure>,
}

impl<'a> Fixture<'a> {
    pub fn new(env: &'a Env, config: &'a HarnessConfig) -> Self {
        Self {
            env,
            config,
            token: PausableNftContractClient::new(env, &config.token),
            checks: 0,
            failures: Vec::new(env),
        }
    }

    pub fn owner(&self) -> &Address {
        &self.config.owner
    }

    pub fn alice(&self) -> &Address {
        &self.config.alice
    }

    pub fn bob(&self) -> &Address {
        &self.config.bob
    }

    /// Supply expected after `minted` successful mints by this harness.
    pub fn supply_after(&self, minted: u32) -> Observation {
        Observation::Supply(self.config.baseline_supply + minted)
    }

    /// Balance expected for one of the configured accounts after it gained
    /// `gained` tokens from this harness.
    pub fn balance_after(&self, account: &Address, gained: u32) -> Observation {
        let (owner, alice, bob) = self.config.baseline_balances;
        let baseline = if *account == self.config.owner {
            owner
        } else if *account == self.config.alice {
            alice
        } else if *account == self.config.bob {
            bob
        } else {
            0
        };
        Observation::Balance(baseline + gained)
    }

    // ── Actions ─────────────────────────────────────────────────────

    pub fn mint(&self, caller: &Address, to: &Address, token_id: u64) -> Observation {
        call_outcome(self.token.try_mint(caller, to, &token_id))
    }

    pub fn pause(&self, caller: &Address) -> Observation {
        call_outcome(self.token.try_pause(caller))
    }

    pub fn unpause(&self, caller: &Address) -> Observation {
        call_outcome(self.token.try_unpause(caller))
    }

    // ── Reads ───────────────────────────────────────────────────────

    pub fn balance(&self, account: &Address) -> Observation {
        Observation::Balance(self.token.balance_of(account))
    }

    pub fn paused(&self) -> Observation {
        Observation::Paused(self.token.paused())
    }

    pub fn supply(&self) -> Observation {
        Observation::Supply(self.token.total_supply())
    }

    // ── Assertions ──────────────────────────────────────────────────

    /// Record one check. A mismatch is kept and the scenario continues.
    pub fn expect(&mut self, check: Symbol, expected: Observation, observed: Observation) {
        self.checks += 1;
        if expected != observed {
            log!(
                self.env,
                "check {} failed: expected {}, observed {}",
                check,
                expected,
                observed
            );
            self.failures.push_back(AssertionFailure {
                check,
                expected,
                observed,
            });
        }
    }

    pub fn finish(self, scenario: Scenario) -> ScenarioOutcome {
        ScenarioOutcome {
            scenario,
            passed: self.failures.is_empty(),
            checks: self.checks,
            failures: self.failures,
            executed_at: self.env.ledger().timestamp(),
        }
    }
}

/// Map a `try_*` call onto an observation. Any contract error code becomes
/// `Rejected`; an aborted call (host error, panic, missing contract) aborts
/// the run.
fn call_outcome<T, C>(result: Result<Result<T, C>, Result<NftError, InvokeError>>) -> Observation {
    match result {
        Ok(_) => Observation::Accepted,
        Err(Ok(reason)) => Observation::rejected(reason),
        Err(Err(InvokeError::Contract(code))) => Observation::Rejected(code),
        Err(Err(InvokeError::Abort)) => panic!("token contract call failed"),
    }
}

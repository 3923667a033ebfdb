//! Scenario runner
//!
//! Opens the scenario's accounts, applies every action in order and
//! records what happened. Rejected transactions do not stop the run: each
//! one is kept as an [`ActionOutcome`] with its result code.

use crate::bank::{BalanceSnapshot, Bank};
use crate::config::DemoConfig;
use crate::error::ScenarioResult;
use crate::scenario::{Action, Scenario, Step};
use bankdemo_core::{Account, AccountHolder, AccountPolicy, Receipt, ResultCode, TxResult};
use rust_decimal::Decimal;
use std::fmt;

/// What one action produced
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub action: Action,
    pub code: ResultCode,
    /// Notices on success, the cancellation message on rejection
    pub messages: Vec<String>,
    pub receipt: Option<Receipt>,
}

impl ActionOutcome {
    fn from_result(action: &Action, result: TxResult<Receipt>) -> Self {
        let code = ResultCode::from(&result);
        match result {
            Ok(receipt) => Self {
                action: action.clone(),
                code,
                messages: receipt.notices.iter().map(|n| n.to_string()).collect(),
                receipt: Some(receipt),
            },
            Err(err) => Self {
                action: action.clone(),
                code,
                messages: vec![err.to_string()],
                receipt: None,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }
}

/// A balance that differs from what the step's expectation promised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub step: usize,
    pub account: String,
    pub expected: Decimal,
    pub actual: Decimal,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {}: {} expected {}, actual {}",
            self.step, self.account, self.expected, self.actual
        )
    }
}

#[derive(Debug, Clone)]
pub struct StepReport {
    pub narration: Vec<String>,
    pub expectation: Option<String>,
    pub outcomes: Vec<ActionOutcome>,
    /// Balances after the step
    pub balances: Vec<BalanceSnapshot>,
    pub mismatches: Vec<Mismatch>,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    /// Balances before the first step
    pub initial: Vec<BalanceSnapshot>,
    pub steps: Vec<StepReport>,
}

impl RunReport {
    pub fn final_balances(&self) -> &[BalanceSnapshot] {
        self.steps
            .last()
            .map(|s| s.balances.as_slice())
            .unwrap_or(&self.initial)
    }

    pub fn balance_of(&self, key: &str) -> Option<Decimal> {
        self.final_balances()
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.balance)
    }

    pub fn mismatches(&self) -> Vec<&Mismatch> {
        self.steps.iter().flat_map(|s| s.mismatches.iter()).collect()
    }

    /// Result codes of every action, in execution order
    pub fn codes(&self) -> Vec<ResultCode> {
        self.steps
            .iter()
            .flat_map(|s| s.outcomes.iter().map(|o| o.code))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    policy: AccountPolicy,
}

impl ScenarioRunner {
    pub fn new(policy: AccountPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(config.policy.clone())
    }

    /// Open every account the scenario declares
    pub fn open_bank(&self, scenario: &Scenario) -> ScenarioResult<Bank> {
        let mut bank = Bank::new();
        for spec in &scenario.accounts {
            let holder = AccountHolder::new(&spec.holder_name, &spec.birthday, &spec.identifier);
            let account = Account::new(spec.account_type, holder, spec.initial_balance)
                .with_policy(self.policy.clone());
            bank.open(&spec.key, &spec.display_name, &spec.possessive, account)?;
            tracing::debug!(key = %spec.key, account_type = %spec.account_type, "Account opened");
        }
        Ok(bank)
    }

    pub fn run(&self, scenario: &Scenario) -> ScenarioResult<RunReport> {
        let mut bank = self.open_bank(scenario)?;
        let initial = bank.snapshot();

        let mut steps = Vec::with_capacity(scenario.steps.len());
        for (index, step) in scenario.steps.iter().enumerate() {
            steps.push(self.run_step(&mut bank, index + 1, step)?);
        }

        tracing::info!(steps = steps.len(), "Scenario finished");
        Ok(RunReport { initial, steps })
    }

    fn run_step(&self, bank: &mut Bank, index: usize, step: &Step) -> ScenarioResult<StepReport> {
        let mut outcomes = Vec::with_capacity(step.actions.len());
        for action in &step.actions {
            let outcome = Self::apply(bank, action)?;
            if !outcome.is_success() {
                tracing::warn!(step = index, %action, code = outcome.code.as_i32(), "Action rejected");
            }
            outcomes.push(outcome);
        }

        let mut mismatches = Vec::new();
        for (key, expected) in &step.expected_balances {
            let actual = bank.get(key)?.balance();
            if actual != *expected {
                let mismatch = Mismatch {
                    step: index,
                    account: key.clone(),
                    expected: *expected,
                    actual,
                };
                tracing::warn!(%mismatch, "Balance differs from expectation");
                mismatches.push(mismatch);
            }
        }

        Ok(StepReport {
            narration: step.narration.clone(),
            expectation: step.expectation.clone(),
            outcomes,
            balances: bank.snapshot(),
            mismatches,
        })
    }

    fn apply(bank: &mut Bank, action: &Action) -> ScenarioResult<ActionOutcome> {
        let result = match action {
            Action::Deposit { account, amount } => bank.get_mut(account)?.deposit(*amount),
            Action::Withdraw { account, amount } => bank.get_mut(account)?.withdraw(*amount),
            Action::Transfer { from, to, amount } => {
                let (sender, receiver) = bank.pair_mut(from, to)?;
                sender.transfer_to(receiver, *amount)
            }
        };
        Ok(ActionOutcome::from_result(action, result))
    }
}

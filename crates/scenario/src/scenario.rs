//! Scenario types
//!
//! A scenario opens a set of accounts, then runs steps. Each step carries
//! narration for the transcript, the actions to apply and the balances
//! the narration promises afterwards.

use bankdemo_core::AccountType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

/// An account to open before the first step
#[derive(Debug, Clone)]
pub struct AccountSpec {
    /// Registry key used by actions
    pub key: String,
    /// How status lines refer to the account ("Alex", "Freddy Corp")
    pub display_name: String,
    /// "their" / "its"
    pub possessive: String,
    pub holder_name: String,
    pub birthday: String,
    pub identifier: String,
    pub account_type: AccountType,
    pub initial_balance: Decimal,
}

impl AccountSpec {
    pub fn new(
        key: &str,
        holder_name: &str,
        birthday: &str,
        identifier: &str,
        account_type: AccountType,
        initial_balance: Decimal,
    ) -> Self {
        Self {
            key: key.to_string(),
            display_name: holder_name.to_string(),
            possessive: "their".to_string(),
            holder_name: holder_name.to_string(),
            birthday: birthday.to_string(),
            identifier: identifier.to_string(),
            account_type,
            initial_balance,
        }
    }

    pub fn display_as(mut self, display_name: &str, possessive: &str) -> Self {
        self.display_name = display_name.to_string();
        self.possessive = possessive.to_string();
        self
    }
}

/// A single transaction in a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Deposit { account: String, amount: Decimal },
    Withdraw { account: String, amount: Decimal },
    Transfer { from: String, to: String, amount: Decimal },
}

impl Action {
    pub fn deposit(account: &str, amount: Decimal) -> Self {
        Action::Deposit {
            account: account.to_string(),
            amount,
        }
    }

    pub fn withdraw(account: &str, amount: Decimal) -> Self {
        Action::Withdraw {
            account: account.to_string(),
            amount,
        }
    }

    pub fn transfer(from: &str, to: &str, amount: Decimal) -> Self {
        Action::Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }

    /// Account whose balance the action validates against
    pub fn source(&self) -> &str {
        match self {
            Action::Deposit { account, .. } | Action::Withdraw { account, .. } => account,
            Action::Transfer { from, .. } => from,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Deposit { account, amount } => write!(f, "deposit {} to {}", amount, account),
            Action::Withdraw { account, amount } => {
                write!(f, "withdraw {} from {}", amount, account)
            }
            Action::Transfer { from, to, amount } => {
                write!(f, "transfer {} from {} to {}", amount, from, to)
            }
        }
    }
}

/// One scripted step
#[derive(Debug, Clone, Default)]
pub struct Step {
    /// What happens, printed before the actions run
    pub narration: Vec<String>,
    /// What the reader should expect, printed after the narration
    pub expectation: Option<String>,
    pub actions: Vec<Action>,
    /// Balances promised by `expectation`, keyed by account
    pub expected_balances: Vec<(String, Decimal)>,
}

impl Step {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn narrate(mut self, line: &str) -> Self {
        self.narration.push(line.to_string());
        self
    }

    pub fn expect(mut self, line: &str) -> Self {
        self.expectation = Some(line.to_string());
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn expect_balance(mut self, account: &str, balance: Decimal) -> Self {
        self.expected_balances.push((account.to_string(), balance));
        self
    }
}

/// A complete scripted scenario
#[derive(Debug, Clone)]
pub struct Scenario {
    pub accounts: Vec<AccountSpec>,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(accounts: Vec<AccountSpec>, steps: Vec<Step>) -> Self {
        Self { accounts, steps }
    }

    /// The hard-coded bank demo: Alex (individual investment), Steve
    /// (checking) and Freddy Corp (corporate investment).
    pub fn bank_demo() -> Self {
        ScenarioBuilder::new()
            .account(AccountSpec::new(
                "alex",
                "Alex Smith",
                "9/9/95",
                "999-99-9999",
                AccountType::individual(),
                dec!(853.00),
            )
            .display_as("Alex", "their"))
            .account(AccountSpec::new(
                "steve",
                "Steve Barnes",
                "11/11/94",
                "XXX-XX-XXXX",
                AccountType::Checking,
                dec!(1257.00),
            )
            .display_as("Steve", "their"))
            .account(AccountSpec::new(
                "corp",
                "Freddy Corp",
                "8/7/65",
                "123-45-6789",
                AccountType::corporate(),
                dec!(1692037.00),
            )
            .display_as("Freddy Corp", "its"))
            .step(
                Step::new()
                    .narrate("Alex tries to make a withdrawal of $600.")
                    .narrate("Steve makes a deposit of $37.49.")
                    .expect("Alex will have $353 left in their account, and Steve will have $1,294.49.")
                    .action(Action::withdraw("alex", dec!(600)))
                    .action(Action::deposit("steve", dec!(37.49)))
                    .expect_balance("alex", dec!(353.00))
                    .expect_balance("steve", dec!(1294.49)),
            )
            .step(
                Step::new()
                    .narrate("Alex tries to make a withdrawal of $1000.")
                    .narrate("Steve tries to make a deposit of -$10.")
                    .expect("Neither account will see any change.")
                    .action(Action::withdraw("alex", dec!(1000)))
                    .action(Action::deposit("steve", dec!(-10)))
                    .expect_balance("alex", dec!(353.00))
                    .expect_balance("steve", dec!(1294.49)),
            )
            .step(
                Step::new()
                    .narrate("Freddy Corp pays both of its employees their weekly salaries of $1,100.")
                    .expect("Alex will have $1,453, and Steve will have $2,394.49. The corporate account will have $1,689,837.")
                    .action(Action::transfer("corp", "alex", dec!(1100)))
                    .action(Action::transfer("corp", "steve", dec!(1100)))
                    .expect_balance("alex", dec!(1453.00))
                    .expect_balance("steve", dec!(2394.49))
                    .expect_balance("corp", dec!(1689837.00)),
            )
            .build()
    }
}

/// Builder for constructing scenarios
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    accounts: Vec<AccountSpec>,
    steps: Vec<Step>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(mut self, spec: AccountSpec) -> Self {
        self.accounts.push(spec);
        self
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn build(self) -> Scenario {
        Scenario::new(self.accounts, self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_demo_shape() {
        let scenario = Scenario::bank_demo();

        assert_eq!(scenario.accounts.len(), 3);
        assert_eq!(scenario.steps.len(), 3);
        assert_eq!(scenario.accounts[2].display_name, "Freddy Corp");
        assert_eq!(scenario.accounts[2].possessive, "its");
        assert!(scenario.accounts[0].account_type.is_individual_investment());
    }

    #[test]
    fn test_action_source() {
        assert_eq!(Action::deposit("steve", dec!(1)).source(), "steve");
        assert_eq!(Action::transfer("corp", "alex", dec!(1)).source(), "corp");
    }

    #[test]
    fn test_action_display() {
        let action = Action::transfer("corp", "alex", dec!(1100));
        assert_eq!(action.to_string(), "transfer 1100 from corp to alex");
    }

    #[test]
    fn test_builder() {
        let scenario = ScenarioBuilder::new()
            .account(AccountSpec::new("a", "A", "", "", AccountType::Checking, dec!(0)))
            .step(Step::new().action(Action::deposit("a", dec!(5))))
            .build();

        assert_eq!(scenario.accounts[0].display_name, "A");
        assert_eq!(scenario.accounts[0].possessive, "their");
        assert_eq!(scenario.steps[0].actions.len(), 1);
        assert!(scenario.steps[0].expectation.is_none());
    }
}

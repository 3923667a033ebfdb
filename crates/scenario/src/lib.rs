//! # Bank Demo Scenario
//!
//! Scripted banking scenarios: the accounts to open, the steps to run and
//! the balances each step is expected to leave behind.
//!
//! ## Example
//!
//! ```rust
//! use bankdemo_scenario::{Scenario, ScenarioRunner};
//!
//! let report = ScenarioRunner::default().run(&Scenario::bank_demo()).unwrap();
//! assert!(report.mismatches().is_empty());
//! ```

pub mod bank;
pub mod config;
pub mod error;
pub mod runner;
pub mod scenario;

pub use bank::{BalanceSnapshot, Bank};
pub use config::{ConfigError, DemoConfig};
pub use error::{ScenarioError, ScenarioResult};
pub use runner::{ActionOutcome, Mismatch, RunReport, ScenarioRunner, StepReport};
pub use scenario::{AccountSpec, Action, Scenario, ScenarioBuilder, Step};

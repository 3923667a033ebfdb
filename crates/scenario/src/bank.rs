//! In-memory account registry
//!
//! Accounts are keyed by a short name and kept in the order they were
//! opened, so status listings are stable.

use crate::error::{ScenarioError, ScenarioResult};
use bankdemo_core::Account;
use rust_decimal::Decimal;
use serde::Serialize;

/// One entry of the registry: the account plus how the transcript refers to it
#[derive(Debug, Clone)]
struct Entry {
    key: String,
    display_name: String,
    possessive: String,
    account: Account,
}

/// Balance of one account at a point in the script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceSnapshot {
    pub key: String,
    pub display_name: String,
    pub possessive: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct Bank {
    entries: Vec<Entry>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account under `key`
    pub fn open(
        &mut self,
        key: &str,
        display_name: &str,
        possessive: &str,
        account: Account,
    ) -> ScenarioResult<()> {
        if self.position(key).is_some() {
            return Err(ScenarioError::DuplicateAccount(key.to_string()));
        }
        self.entries.push(Entry {
            key: key.to_string(),
            display_name: display_name.to_string(),
            possessive: possessive.to_string(),
            account,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    fn require(&self, key: &str) -> ScenarioResult<usize> {
        self.position(key)
            .ok_or_else(|| ScenarioError::UnknownAccount(key.to_string()))
    }

    pub fn get(&self, key: &str) -> ScenarioResult<&Account> {
        let idx = self.require(key)?;
        Ok(&self.entries[idx].account)
    }

    pub fn get_mut(&mut self, key: &str) -> ScenarioResult<&mut Account> {
        let idx = self.require(key)?;
        Ok(&mut self.entries[idx].account)
    }

    /// Borrow two distinct accounts mutably, sender first
    pub fn pair_mut(&mut self, from: &str, to: &str) -> ScenarioResult<(&mut Account, &mut Account)> {
        let i = self.require(from)?;
        let j = self.require(to)?;
        if i == j {
            return Err(ScenarioError::SelfTransfer(from.to_string()));
        }

        if i < j {
            let (left, right) = self.entries.split_at_mut(j);
            Ok((&mut left[i].account, &mut right[0].account))
        } else {
            let (left, right) = self.entries.split_at_mut(i);
            Ok((&mut right[0].account, &mut left[j].account))
        }
    }

    pub fn snapshot(&self) -> Vec<BalanceSnapshot> {
        self.entries
            .iter()
            .map(|e| BalanceSnapshot {
                key: e.key.clone(),
                display_name: e.display_name.clone(),
                possessive: e.possessive.clone(),
                balance: e.account.balance(),
            })
            .collect()
    }
}

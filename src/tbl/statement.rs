use crate::ids::AccountNumber;
use crate::models::{Account, HistoryEntry};
use crate::Money;

use std::fmt;

/// Snapshot of an account's history and balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub account: AccountNumber,
    pub entries: Vec<HistoryEntry>,
    pub balance: Money,
}

impl Statement {
    pub fn new<A: Account + ?Sized>(account: &A) -> Self {
        return Self {
            account: account.number(),
            entries: account.history().entries().to_vec(),
            balance: account.balance(),
        };
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "================ STATEMENT ================")?;

        if self.entries.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }

        for entry in self.entries.iter() {
            writeln!(f, "{entry}")?;
        }

        writeln!(f)?;
        writeln!(f, "Balance: R$ {}", self.balance)?;
        return write!(f, "===========================================");
    }
}

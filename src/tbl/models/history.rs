use crate::Money;

use std::fmt;

use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
        };
    }
}

/// A successfully applied transaction, as recorded on the account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: NaiveDateTime,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(
            f,
            "{}: R$ {} at {}",
            self.kind,
            self.amount,
            self.timestamp.format(TIMESTAMP_FORMAT)
        );
    }
}

/// Issued by `Transaction::apply_at` once a transaction has succeeded. `Account::record` takes
/// one, so history can only be written by an applied transaction.
///
/// ```compile_fail
/// use tbl::models::Receipt;
///
/// let receipt = Receipt(());
/// ```
#[derive(Debug)]
pub struct Receipt(pub(crate) ());

/// Append-only log of the transactions applied to one account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        return &self.entries;
    }

    pub fn count(&self, kind: TransactionKind) -> usize {
        return self
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

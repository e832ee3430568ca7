mod account;
mod checking_account;
mod client;
mod history;
mod transaction;

pub use account::{Account, AccountError, BaseAccount, BRANCH};
pub use checking_account::{CheckingAccount, CheckingAccountPolicy};
pub use client::{Client, ClientError, BIRTH_DATE_FORMAT};
pub use history::{History, HistoryEntry, Receipt, TransactionKind, TIMESTAMP_FORMAT};
pub use transaction::Transaction;

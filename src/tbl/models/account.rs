use super::{History, HistoryEntry, Receipt};

use crate::ids::{AccountNumber, IdentityDocument};
use crate::money::MoneyError;
use crate::Money;

use thiserror::Error;

/// Every account in the ledger belongs to this branch
pub const BRANCH: &str = "0001";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount: {0}, amount must be greater than zero")]
    InvalidAmount(Money),

    #[error("Insufficient funds: cannot withdraw {requested} when balance is {balance}")]
    InsufficientFunds { requested: Money, balance: Money },

    #[error("Withdrawal limit exceeded: {requested} is above the per-withdrawal limit of {limit}")]
    WithdrawalLimitExceeded { requested: Money, limit: Money },

    #[error("Withdrawal count exceeded: {made} of {allowed} allowed withdrawals already made")]
    WithdrawalCountExceeded { made: usize, allowed: usize },

    #[error(transparent)]
    Arithmetic(#[from] MoneyError),
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::BaseAccount {}
    impl Sealed for crate::models::CheckingAccount {}
}

/// Balance-holding account capability, implemented by the ledger's own account types only.
///
/// Failed `deposit` and `withdraw` calls leave the account untouched. Neither call records
/// history, see `Transaction::apply`. `record` needs a `Receipt`, which only an applied
/// transaction can hand out.
pub trait Account: sealed::Sealed {
    fn number(&self) -> AccountNumber;

    fn owner(&self) -> &IdentityDocument;

    fn balance(&self) -> Money;

    fn history(&self) -> &History;

    fn deposit(&mut self, amount: Money) -> Result<(), AccountError>;

    fn withdraw(&mut self, amount: Money) -> Result<(), AccountError>;

    fn record(&mut self, entry: HistoryEntry, receipt: Receipt);

    fn branch(&self) -> &'static str {
        BRANCH
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseAccount {
    number: AccountNumber,
    owner: IdentityDocument,
    balance: Money,
    history: History,
}

impl BaseAccount {
    pub fn new(number: AccountNumber, owner: IdentityDocument) -> Self {
        return Self {
            number,
            owner,
            balance: Money::ZERO,
            history: History::new(),
        };
    }
}

impl Account for BaseAccount {
    fn number(&self) -> AccountNumber {
        self.number
    }

    fn owner(&self) -> &IdentityDocument {
        &self.owner
    }

    fn balance(&self) -> Money {
        self.balance
    }

    fn history(&self) -> &History {
        &self.history
    }

    fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount(amount));
        }

        self.balance = self.balance.checked_add(amount)?;

        return Ok(());
    }

    fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount(amount));
        }

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        self.balance = self.balance.checked_sub(amount)?;

        return Ok(());
    }

    fn record(&mut self, entry: HistoryEntry, _receipt: Receipt) {
        self.history.append(entry);
    }
}

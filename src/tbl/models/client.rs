use super::{Account, AccountError, Transaction};

use crate::ids::{AccountNumber, IdentityDocument};

use chrono::NaiveDate;
use thiserror::Error;

pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Account {account} does not belong to client {client}")]
    OwnershipMismatch {
        client: IdentityDocument,
        account: AccountNumber,
    },

    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Natural person holding accounts in the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub identity_document: IdentityDocument,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(
        identity_document: IdentityDocument,
        name: String,
        birth_date: NaiveDate,
        address: String,
    ) -> Self {
        return Self {
            identity_document,
            name,
            birth_date,
            address,
            accounts: vec![],
        };
    }

    pub fn accounts(&self) -> &[AccountNumber] {
        return &self.accounts;
    }

    pub fn first_account(&self) -> Option<AccountNumber> {
        return self.accounts.first().copied();
    }

    /// Duplicates are not detected: the ledger only ever hands out fresh account numbers
    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    pub fn owns<A: Account + ?Sized>(&self, account: &A) -> bool {
        return account.owner() == &self.identity_document
            && self.accounts.contains(&account.number());
    }

    pub fn apply_transaction<A: Account + ?Sized>(
        &self,
        account: &mut A,
        transaction: &Transaction,
    ) -> Result<(), ClientError> {
        if !self.owns(account) {
            return Err(ClientError::OwnershipMismatch {
                client: self.identity_document.clone(),
                account: account.number(),
            });
        }

        transaction.apply(account)?;

        return Ok(());
    }
}

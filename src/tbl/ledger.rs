use crate::ids::{AccountNumber, IdentityDocument};
use crate::models::{
    Account, CheckingAccount, CheckingAccountPolicy, Client, ClientError, Transaction,
};
use crate::{AccountReport, Money, Statement};

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Client already exists for identity document: {0}")]
    DuplicateClient(IdentityDocument),

    #[error("Client not found for identity document: {0}")]
    ClientNotFound(IdentityDocument),

    #[error("Account not found for client: {0}")]
    AccountNotFound(IdentityDocument),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// In-memory collections of clients and accounts, living for the whole session
#[derive(Debug, Default)]
pub struct Ledger {
    clients: HashMap<IdentityDocument, Client>,
    accounts: Vec<CheckingAccount>,
    policy: CheckingAccountPolicy,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CheckingAccountPolicy) -> Self {
        return Self {
            policy,
            ..Self::default()
        };
    }

    pub fn create_client(&mut self, client: Client) -> Result<&Client, LedgerError> {
        let identity_document = client.identity_document.clone();

        if self.clients.contains_key(&identity_document) {
            return Err(LedgerError::DuplicateClient(identity_document));
        }

        log::debug!("Creating client: {client:?}");

        return Ok(&*self.clients.entry(identity_document).or_insert(client));
    }

    /// Opens a checking account for an existing client, numbered after the accounts opened so far
    pub fn create_account(
        &mut self,
        identity_document: &IdentityDocument,
    ) -> Result<AccountNumber, LedgerError> {
        let client = self
            .clients
            .get_mut(identity_document)
            .ok_or_else(|| LedgerError::ClientNotFound(identity_document.clone()))?;

        let number = AccountNumber(self.accounts.len() as u32 + 1);
        let account = CheckingAccount::new(number, identity_document.clone(), self.policy);

        log::debug!("Creating account {number} for client {identity_document}");

        client.add_account(number);
        self.accounts.push(account);

        return Ok(number);
    }

    pub fn deposit(
        &mut self,
        identity_document: &IdentityDocument,
        amount: Money,
    ) -> Result<Money, LedgerError> {
        return self.apply(identity_document, Transaction::Deposit(amount));
    }

    pub fn withdraw(
        &mut self,
        identity_document: &IdentityDocument,
        amount: Money,
    ) -> Result<Money, LedgerError> {
        return self.apply(identity_document, Transaction::Withdrawal(amount));
    }

    pub fn statement(&self, identity_document: &IdentityDocument) -> Result<Statement, LedgerError> {
        let client = self
            .find_client(identity_document)
            .ok_or_else(|| LedgerError::ClientNotFound(identity_document.clone()))?;

        let account = client
            .first_account()
            .and_then(|number| self.find_account(number))
            .ok_or_else(|| LedgerError::AccountNotFound(identity_document.clone()))?;

        return Ok(Statement::new(account));
    }

    /// Builds one report per account, in the order the accounts were opened
    pub fn account_reports(&self) -> Vec<AccountReport> {
        return self
            .accounts
            .iter()
            .filter_map(|account| {
                let holder = self.find_client(account.owner());

                if holder.is_none() {
                    log::error!(
                        "Impossible state encountered: account {} has no holder",
                        account.number()
                    );
                }

                holder.map(|holder| AccountReport::new(account, holder))
            })
            .collect();
    }

    pub fn find_client(&self, identity_document: &IdentityDocument) -> Option<&Client> {
        return self.clients.get(identity_document);
    }

    pub fn find_account(&self, number: AccountNumber) -> Option<&CheckingAccount> {
        return self
            .accounts
            .iter()
            .find(|account| account.number() == number);
    }

    pub fn clients_len(&self) -> usize {
        self.clients.len()
    }

    pub fn accounts_len(&self) -> usize {
        self.accounts.len()
    }

    /// Applies a transaction to the client's first account, returning the resulting balance
    fn apply(
        &mut self,
        identity_document: &IdentityDocument,
        transaction: Transaction,
    ) -> Result<Money, LedgerError> {
        let client = self
            .clients
            .get(identity_document)
            .ok_or_else(|| LedgerError::ClientNotFound(identity_document.clone()))?;

        let number = client
            .first_account()
            .ok_or_else(|| LedgerError::AccountNotFound(identity_document.clone()))?;

        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or_else(|| LedgerError::AccountNotFound(identity_document.clone()))?;

        log::debug!("Applying {transaction:?} to account {number}");

        client.apply_transaction(account, &transaction)?;

        return Ok(account.balance());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{AccountError, TransactionKind};

    use chrono::NaiveDate;

    fn some_document() -> IdentityDocument {
        IdentityDocument::parse("11122233344").unwrap()
    }

    fn other_document() -> IdentityDocument {
        IdentityDocument::parse("55566677788").unwrap()
    }

    fn build_client(identity_document: IdentityDocument, name: &str) -> Client {
        Client::new(
            identity_document,
            name.to_string(),
            NaiveDate::from_ymd_opt(1985, 12, 1).unwrap(),
            "Av. Brasil - 1500 - Centro - Rio de Janeiro/RJ".to_string(),
        )
    }

    fn build_ledger_with_account() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .create_client(build_client(some_document(), "Maria Silva"))
            .unwrap();
        ledger.create_account(&some_document()).unwrap();
        ledger
    }

    fn money(units: i64) -> Money {
        Money::from_whole(units)
    }

    #[test]
    fn create_client() {
        let mut ledger = Ledger::new();

        let client = ledger
            .create_client(build_client(some_document(), "Maria Silva"))
            .unwrap();
        assert_eq!(client.name, "Maria Silva");

        assert_eq!(ledger.clients_len(), 1);
        assert!(ledger.find_client(&some_document()).is_some());
    }

    #[test]
    fn create_duplicate_client() {
        let mut ledger = Ledger::new();
        ledger
            .create_client(build_client(some_document(), "Maria Silva"))
            .unwrap();

        assert_eq!(
            ledger
                .create_client(build_client(some_document(), "João Souza"))
                .unwrap_err(),
            LedgerError::DuplicateClient(some_document())
        );

        assert_eq!(ledger.clients_len(), 1);
        assert_eq!(ledger.find_client(&some_document()).unwrap().name, "Maria Silva");
    }

    #[test]
    fn create_account() {
        let mut ledger = Ledger::new();
        ledger
            .create_client(build_client(some_document(), "Maria Silva"))
            .unwrap();
        ledger
            .create_client(build_client(other_document(), "João Souza"))
            .unwrap();

        assert_eq!(ledger.create_account(&some_document()), Ok(AccountNumber(1)));
        assert_eq!(ledger.create_account(&other_document()), Ok(AccountNumber(2)));
        assert_eq!(ledger.create_account(&some_document()), Ok(AccountNumber(3)));

        assert_eq!(ledger.accounts_len(), 3);

        let client = ledger.find_client(&some_document()).unwrap();
        assert_eq!(client.accounts(), &[AccountNumber(1), AccountNumber(3)]);

        let account = ledger.find_account(AccountNumber(2)).unwrap();
        assert_eq!(account.owner(), &other_document());
        assert_eq!(account.policy(), &CheckingAccountPolicy::default());
    }

    #[test]
    fn create_account_for_unknown_client() {
        let mut ledger = Ledger::new();

        assert_eq!(
            ledger.create_account(&some_document()),
            Err(LedgerError::ClientNotFound(some_document()))
        );
        assert_eq!(ledger.accounts_len(), 0);
    }

    #[test]
    fn create_account_with_policy() {
        let policy = CheckingAccountPolicy {
            withdrawal_limit: money(50),
            max_withdrawals: 1,
        };
        let mut ledger = Ledger::with_policy(policy);
        ledger
            .create_client(build_client(some_document(), "Maria Silva"))
            .unwrap();

        let number = ledger.create_account(&some_document()).unwrap();

        assert_eq!(ledger.find_account(number).unwrap().policy(), &policy);
    }

    #[test]
    fn deposit_and_withdraw() {
        let mut ledger = build_ledger_with_account();

        assert_eq!(ledger.deposit(&some_document(), money(100)), Ok(money(100)));
        assert_eq!(ledger.withdraw(&some_document(), money(30)), Ok(money(70)));

        let statement = ledger.statement(&some_document()).unwrap();
        assert_eq!(statement.balance, money(70));

        let entries: Vec<(TransactionKind, Money)> = statement
            .entries
            .iter()
            .map(|entry| (entry.kind, entry.amount))
            .collect();
        assert_eq!(
            entries,
            vec![
                (TransactionKind::Deposit, money(100)),
                (TransactionKind::Withdrawal, money(30)),
            ]
        );
    }

    #[test]
    fn transactions_for_unknown_client() {
        let mut ledger = build_ledger_with_account();

        assert_eq!(
            ledger.deposit(&other_document(), money(100)),
            Err(LedgerError::ClientNotFound(other_document()))
        );
        assert_eq!(
            ledger.withdraw(&other_document(), money(100)),
            Err(LedgerError::ClientNotFound(other_document()))
        );
        assert_eq!(
            ledger.statement(&other_document()),
            Err(LedgerError::ClientNotFound(other_document()))
        );
    }

    #[test]
    fn transactions_for_client_without_account() {
        let mut ledger = Ledger::new();
        ledger
            .create_client(build_client(some_document(), "Maria Silva"))
            .unwrap();

        assert_eq!(
            ledger.deposit(&some_document(), money(100)),
            Err(LedgerError::AccountNotFound(some_document()))
        );
        assert_eq!(
            ledger.statement(&some_document()),
            Err(LedgerError::AccountNotFound(some_document()))
        );
    }

    #[test]
    fn transactions_target_first_account() {
        let mut ledger = build_ledger_with_account();
        ledger.create_account(&some_document()).unwrap();

        ledger.deposit(&some_document(), money(100)).unwrap();

        assert_eq!(ledger.find_account(AccountNumber(1)).unwrap().balance(), money(100));
        assert_eq!(ledger.find_account(AccountNumber(2)).unwrap().balance(), Money::ZERO);
    }

    #[test]
    fn interacting_failure_conditions() {
        let mut ledger = build_ledger_with_account();
        let document = some_document();

        assert_eq!(ledger.deposit(&document, money(1000)), Ok(money(1000)));

        assert_eq!(
            ledger.withdraw(&document, money(2000)),
            Err(LedgerError::Client(ClientError::Account(
                AccountError::WithdrawalLimitExceeded {
                    requested: money(2000),
                    limit: money(500),
                }
            )))
        );
        assert_eq!(ledger.statement(&document).unwrap().balance, money(1000));

        assert_eq!(ledger.withdraw(&document, money(400)), Ok(money(600)));
        assert_eq!(ledger.withdraw(&document, money(400)), Ok(money(200)));
        assert_eq!(
            ledger.withdraw(&document, money(400)),
            Err(LedgerError::Client(ClientError::Account(
                AccountError::InsufficientFunds {
                    requested: money(400),
                    balance: money(200),
                }
            )))
        );

        // the failed attempts were not recorded, so one withdrawal is still allowed
        assert_eq!(ledger.withdraw(&document, money(200)), Ok(Money::ZERO));
        assert!(matches!(
            ledger.withdraw(&document, money(1)),
            Err(LedgerError::Client(ClientError::Account(
                AccountError::WithdrawalCountExceeded { made: 3, allowed: 3 }
            )))
        ));
    }

    #[test]
    fn account_reports() {
        let mut ledger = build_ledger_with_account();
        ledger
            .create_client(build_client(other_document(), "João Souza"))
            .unwrap();
        ledger.create_account(&other_document()).unwrap();
        ledger.deposit(&other_document(), money(250)).unwrap();

        assert_eq!(
            ledger.account_reports(),
            vec![
                AccountReport {
                    branch: "0001".to_string(),
                    account: "1".to_string(),
                    holder: "Maria Silva".to_string(),
                    balance: "0.00".to_string(),
                },
                AccountReport {
                    branch: "0001".to_string(),
                    account: "2".to_string(),
                    holder: "João Souza".to_string(),
                    balance: "250.00".to_string(),
                },
            ]
        );
    }
}

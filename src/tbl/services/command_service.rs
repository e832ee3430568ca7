use crate::ids::{AccountNumber, IdentityDocument};
use crate::ledger::{Ledger, LedgerError};
use crate::models::Client;
use crate::{AccountReport, Command, Money, Statement};

use std::fmt;

/// Result of a successfully executed command, ready to be shown to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ClientCreated(IdentityDocument),
    AccountCreated(AccountNumber),
    Deposited { balance: Money },
    Withdrew { balance: Money },
    Statement(Statement),
    Accounts(Vec<AccountReport>),
    Exit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::ClientCreated(_) => write!(f, "=== Client created successfully! ==="),
            Self::AccountCreated(number) => {
                write!(f, "=== Account {number} created successfully! ===")
            }
            Self::Deposited { .. } => write!(f, "=== Deposit completed successfully! ==="),
            Self::Withdrew { .. } => write!(f, "=== Withdrawal completed successfully! ==="),
            Self::Statement(statement) => write!(f, "{statement}"),
            Self::Accounts(reports) if reports.is_empty() => write!(f, "No accounts registered."),
            Self::Accounts(reports) => {
                let reports: Vec<String> = reports.iter().map(|r| r.to_string()).collect();
                write!(f, "{}", reports.join(&format!("\n{}\n", "=".repeat(40))))
            }
            Self::Exit => write!(f, "Session closed."),
        };
    }
}

pub struct CommandService {
    ledger: Ledger,
}

impl CommandService {
    pub fn new(ledger: Ledger) -> Self {
        return Self { ledger };
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, LedgerError> {
        log::debug!("Executing command: {command:?}");

        let outcome = match command {
            Command::CreateClient {
                identity_document,
                name,
                birth_date,
                address,
            } => {
                let client = Client::new(identity_document, name, birth_date, address);
                let client = self.ledger.create_client(client)?;

                Outcome::ClientCreated(client.identity_document.clone())
            }

            Command::CreateAccount { identity_document } => {
                Outcome::AccountCreated(self.ledger.create_account(&identity_document)?)
            }

            Command::Deposit {
                identity_document,
                amount,
            } => Outcome::Deposited {
                balance: self.ledger.deposit(&identity_document, amount)?,
            },

            Command::Withdraw {
                identity_document,
                amount,
            } => Outcome::Withdrew {
                balance: self.ledger.withdraw(&identity_document, amount)?,
            },

            Command::Statement { identity_document } => {
                Outcome::Statement(self.ledger.statement(&identity_document)?)
            }

            Command::ListAccounts => Outcome::Accounts(self.ledger.account_reports()),

            Command::Exit => Outcome::Exit,
        };

        log::debug!("Command succeeded: {outcome:?}");

        return Ok(outcome);
    }

    pub fn ledger(&self) -> &Ledger {
        return &self.ledger;
    }

    pub fn take(self) -> Ledger {
        log::debug!("Destructuring CommandService");
        return self.ledger;
    }
}

use tbl::ids::IdentityDocument;
use tbl::input::{parse_amount, parse_birth_date, InputParseError};
use tbl::services::{CommandService, Outcome};
use tbl::{Command, LedgerError, Result};

use std::io::{BufRead, Write};

use thiserror::Error;

const MENU: &str = "
======> M E N U <======
[d]  Deposit
[s]  Withdraw
[e]  Statement
[nu] New user
[nc] New account
[lc] List accounts
[q]  Quit
=======================
=> ";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Unexpected end of input")]
    EndOfInput,

    #[error("Invalid operation {0:?}, please select the desired operation again")]
    InvalidOption(String),
}

/// Interactive menu loop, reading one command per iteration until quit or end of input
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        return Self { input, output };
    }

    pub fn run(&mut self, service: &mut CommandService) -> Result {
        loop {
            let option = match self.prompt(MENU)? {
                Some(option) => option,
                None => {
                    log::debug!("End of input, closing session");
                    break;
                }
            };

            let command = match self.read_command(&option, service) {
                Ok(command) => command,
                Err(e) => {
                    if let Some(SessionError::EndOfInput) = e.downcast_ref::<SessionError>() {
                        log::debug!("End of input while reading command, closing session");
                        break;
                    }

                    if e.downcast_ref::<std::io::Error>().is_some() {
                        return Err(e);
                    }

                    self.report_failure(&e)?;
                    continue;
                }
            };

            match service.execute(command) {
                Ok(Outcome::Exit) => {
                    writeln!(self.output, "\n{}", Outcome::Exit)?;
                    break;
                }
                Ok(outcome) => writeln!(self.output, "\n{outcome}")?,
                Err(e) => self.report_failure(&e)?,
            }
        }

        self.output.flush()?;

        return Ok(());
    }

    fn read_command(&mut self, option: &str, service: &CommandService) -> Result<Command> {
        let command = match option {
            "d" => {
                let identity_document = self.ask_identity_document()?;
                ensure_account(service, &identity_document)?;
                let amount = parse_amount(&self.ask("Enter the deposit amount: ")?)?;

                Command::Deposit {
                    identity_document,
                    amount,
                }
            }

            "s" => {
                let identity_document = self.ask_identity_document()?;
                ensure_account(service, &identity_document)?;
                let amount = parse_amount(&self.ask("Enter the withdrawal amount: ")?)?;

                Command::Withdraw {
                    identity_document,
                    amount,
                }
            }

            "e" => Command::Statement {
                identity_document: self.ask_identity_document()?,
            },

            "nu" => {
                let identity_document = self.ask_identity_document()?;

                if service.ledger().find_client(&identity_document).is_some() {
                    Err(LedgerError::DuplicateClient(identity_document.clone()))?
                }

                let name = self.ask_required("name", "Enter the full name: ")?;
                let birth_date = parse_birth_date(
                    &self.ask_required("birth_date", "Enter the birth date (dd-mm-yyyy): ")?,
                )?;
                let address = self.ask_required(
                    "address",
                    "Enter the address (street - number - district - city/state): ",
                )?;

                Command::CreateClient {
                    identity_document,
                    name,
                    birth_date,
                    address,
                }
            }

            "nc" => Command::CreateAccount {
                identity_document: self.ask_identity_document()?,
            },

            "lc" => Command::ListAccounts,

            "q" => Command::Exit,

            other => Err(SessionError::InvalidOption(other.to_string()))?,
        };

        return Ok(command);
    }

    fn report_failure(&mut self, e: &dyn std::fmt::Display) -> Result {
        log::debug!("Menu operation failed: {e}");
        writeln!(self.output, "\n@@@ Operation failed! {e} @@@")?;

        return Ok(());
    }

    fn ask_identity_document(&mut self) -> Result<IdentityDocument> {
        let cpf = self.ask("Enter the client's CPF (numbers only): ")?;
        let identity_document = IdentityDocument::parse(&cpf).map_err(InputParseError::from)?;

        Ok(identity_document)
    }

    fn ask_required(&mut self, field: &'static str, message: &str) -> Result<String> {
        let answer = self.ask(message)?;

        if answer.is_empty() {
            Err(InputParseError::MissingField(field))?
        }

        Ok(answer)
    }

    fn ask(&mut self, message: &str) -> Result<String> {
        let answer = self.prompt(message)?.ok_or(SessionError::EndOfInput)?;

        Ok(answer)
    }

    /// Returns `None` once the input is exhausted
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}

/// Fails before the amount is asked for when there is nothing to apply it to
fn ensure_account(service: &CommandService, identity_document: &IdentityDocument) -> Result {
    let client = service
        .ledger()
        .find_client(identity_document)
        .ok_or_else(|| LedgerError::ClientNotFound(identity_document.clone()))?;

    if client.first_account().is_none() {
        Err(LedgerError::AccountNotFound(identity_document.clone()))?
    }

    return Ok(());
}

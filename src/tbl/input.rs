use crate::ids::{IdentityDocument, IdentityDocumentError};
use crate::models::BIRTH_DATE_FORMAT;
use crate::money::MoneyError;
use crate::Command;
use crate::Money;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// Represents an input command record that a CSV row would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputCommand {
    #[serde(rename = "type")]
    pub typ: InputCommandType,

    pub cpf: String,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputCommandType {
    Client,
    Account,
    Deposit,
    Withdrawal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    #[error("Error parsing input: {0} is missing")]
    MissingField(&'static str),

    #[error("Error parsing input: invalid birth date {0:?}, expected dd-mm-yyyy")]
    InvalidBirthDate(String),

    #[error("Error parsing input: {0}")]
    InvalidIdentityDocument(#[from] IdentityDocumentError),

    #[error("Error parsing input: {0}")]
    InvalidAmount(#[from] MoneyError),
}

impl InputCommand {
    pub fn parse_command(self) -> crate::Result<Command> {
        let identity_document = IdentityDocument::parse(&self.cpf)
            .map_err(InputParseError::from)?;

        let command = match self.typ {
            InputCommandType::Client => Command::CreateClient {
                identity_document,
                name: required("name", self.name)?,
                birth_date: parse_birth_date(&required("birth_date", self.birth_date)?)?,
                address: required("address", self.address)?,
            },
            InputCommandType::Account => Command::CreateAccount { identity_document },
            InputCommandType::Deposit => Command::Deposit {
                identity_document,
                amount: parse_amount(&required("amount", self.amount)?)?,
            },
            InputCommandType::Withdrawal => Command::Withdraw {
                identity_document,
                amount: parse_amount(&required("amount", self.amount)?)?,
            },
        };

        Ok(command)
    }
}

/// Treats blank values the same as absent ones
pub fn required(field: &'static str, value: Option<String>) -> Result<String, InputParseError> {
    return value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(InputParseError::MissingField(field));
}

pub fn parse_amount(string: &str) -> Result<Money, InputParseError> {
    return Ok(Money::parse(string)?);
}

pub fn parse_birth_date(string: &str) -> Result<NaiveDate, InputParseError> {
    return NaiveDate::parse_from_str(string.trim(), BIRTH_DATE_FORMAT)
        .map_err(|_| InputParseError::InvalidBirthDate(string.to_string()));
}

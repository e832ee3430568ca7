mod account_report;
mod command;
pub mod ids;
pub mod input;
pub mod ledger;
pub mod models;
mod money;
mod result;
pub mod services;
mod statement;

pub use account_report::AccountReport;
pub use command::Command;
pub use ledger::{Ledger, LedgerError};
pub use money::{Money, MoneyError};
pub use result::Result;
pub use statement::Statement;

pub fn build_command_service() -> services::CommandService {
    let ledger = Ledger::new();
    let command_service = services::CommandService::new(ledger);

    return command_service;
}

use crate::models::{Account, CheckingAccount, Client};

use std::fmt;

use serde::Serialize;

/// One row of the account listing
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    pub branch: String,
    pub account: String,
    pub holder: String,
    pub balance: String,
}

impl AccountReport {
    pub fn new(account: &CheckingAccount, holder: &Client) -> Self {
        return Self {
            branch: account.branch().to_string(),
            account: account.number().to_string(),
            holder: holder.name.clone(),
            balance: account.balance().to_string(),
        };
    }
}

impl fmt::Display for AccountReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Branch:\t\t{}", self.branch)?;
        writeln!(f, "Account:\t{}", self.account)?;
        writeln!(f, "Holder:\t\t{}", self.holder)?;
        return write!(f, "Balance:\tR$ {}", self.balance);
    }
}

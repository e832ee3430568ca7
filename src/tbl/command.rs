use crate::ids::IdentityDocument;
use crate::Money;

use chrono::NaiveDate;

/// Validated operator intent, ready to be executed against the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateClient {
        identity_document: IdentityDocument,
        name: String,
        birth_date: NaiveDate,
        address: String,
    },
    CreateAccount {
        identity_document: IdentityDocument,
    },
    Deposit {
        identity_document: IdentityDocument,
        amount: Money,
    },
    Withdraw {
        identity_document: IdentityDocument,
        amount: Money,
    },
    Statement {
        identity_document: IdentityDocument,
    },
    ListAccounts,
    Exit,
}

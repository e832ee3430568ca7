mod account_number;
mod identity_document;

pub use account_number::AccountNumber;
pub use identity_document::{IdentityDocument, IdentityDocumentError};

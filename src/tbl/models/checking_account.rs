use super::{
    Account, AccountError, BaseAccount, History, HistoryEntry, Receipt, TransactionKind,
};

use crate::ids::{AccountNumber, IdentityDocument};
use crate::Money;

/// Withdrawal restrictions applied to a checking account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingAccountPolicy {
    pub withdrawal_limit: Money,
    pub max_withdrawals: usize,
}

impl Default for CheckingAccountPolicy {
    fn default() -> Self {
        return Self {
            withdrawal_limit: Money::from_whole(500),
            max_withdrawals: 3,
        };
    }
}

/// Account with a per-withdrawal cap and a cap on the number of withdrawals.
///
/// The withdrawal count covers every withdrawal ever recorded on the account. There is no
/// statement period, so the count never resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckingAccount {
    account: BaseAccount,
    policy: CheckingAccountPolicy,
}

impl CheckingAccount {
    pub fn new(number: AccountNumber, owner: IdentityDocument, policy: CheckingAccountPolicy) -> Self {
        return Self {
            account: BaseAccount::new(number, owner),
            policy,
        };
    }

    pub fn policy(&self) -> &CheckingAccountPolicy {
        return &self.policy;
    }

    pub fn withdrawals_made(&self) -> usize {
        return self.account.history().count(TransactionKind::Withdrawal);
    }
}

impl Account for CheckingAccount {
    fn number(&self) -> AccountNumber {
        self.account.number()
    }

    fn owner(&self) -> &IdentityDocument {
        self.account.owner()
    }

    fn balance(&self) -> Money {
        self.account.balance()
    }

    fn history(&self) -> &History {
        self.account.history()
    }

    fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        self.account.deposit(amount)
    }

    fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        let made = self.withdrawals_made();

        if amount > self.policy.withdrawal_limit {
            return Err(AccountError::WithdrawalLimitExceeded {
                requested: amount,
                limit: self.policy.withdrawal_limit,
            });
        }

        if made >= self.policy.max_withdrawals {
            return Err(AccountError::WithdrawalCountExceeded {
                made,
                allowed: self.policy.max_withdrawals,
            });
        }

        return self.account.withdraw(amount);
    }

    fn record(&mut self, entry: HistoryEntry, receipt: Receipt) {
        self.account.record(entry, receipt);
    }
}

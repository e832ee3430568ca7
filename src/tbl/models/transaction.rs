use super::{Account, AccountError, HistoryEntry, Receipt, TransactionKind};

use crate::Money;

use chrono::{Local, NaiveDateTime};

/// Transaction represents a requested change to an account's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Money),
    Withdrawal(Money),
}

impl Transaction {
    pub fn amount(&self) -> Money {
        return match self {
            Self::Deposit(amount) | Self::Withdrawal(amount) => *amount,
        };
    }

    pub fn kind(&self) -> TransactionKind {
        return match self {
            Self::Deposit(_) => TransactionKind::Deposit,
            Self::Withdrawal(_) => TransactionKind::Withdrawal,
        };
    }

    pub fn apply<A: Account + ?Sized>(&self, account: &mut A) -> Result<(), AccountError> {
        return self.apply_at(account, Local::now().naive_local());
    }

    /// Applies the transaction, recording it on the account's history only if it succeeded
    pub fn apply_at<A: Account + ?Sized>(
        &self,
        account: &mut A,
        timestamp: NaiveDateTime,
    ) -> Result<(), AccountError> {
        match self {
            Self::Deposit(amount) => account.deposit(*amount)?,
            Self::Withdrawal(amount) => account.withdraw(*amount)?,
        }

        account.record(
            HistoryEntry {
                kind: self.kind(),
                amount: self.amount(),
                timestamp,
            },
            Receipt(()),
        );

        log::debug!(
            "Applied {:?} to account {}, balance is now {}",
            self,
            account.number(),
            account.balance()
        );

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::{AccountNumber, IdentityDocument};
    use crate::models::BaseAccount;

    use chrono::NaiveDate;

    const SOME_AMOUNT: Money = Money::from_whole(100);
    const OTHER_AMOUNT: Money = Money::from_whole(30);

    fn build_account() -> BaseAccount {
        BaseAccount::new(AccountNumber(1), IdentityDocument::parse("11122233344").unwrap())
    }

    fn timestamp(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(10, minute, 0)
            .unwrap()
    }

    #[test]
    fn deposit_then_withdrawal() {
        let mut account = build_account();

        assert!(Transaction::Deposit(SOME_AMOUNT)
            .apply_at(&mut account, timestamp(1))
            .is_ok());
        assert!(Transaction::Withdrawal(OTHER_AMOUNT)
            .apply_at(&mut account, timestamp(2))
            .is_ok());

        assert_eq!(account.balance(), Money::from_whole(70));
        assert_eq!(
            account.history().entries(),
            &[
                HistoryEntry {
                    kind: TransactionKind::Deposit,
                    amount: SOME_AMOUNT,
                    timestamp: timestamp(1),
                },
                HistoryEntry {
                    kind: TransactionKind::Withdrawal,
                    amount: OTHER_AMOUNT,
                    timestamp: timestamp(2),
                },
            ]
        );
    }

    #[test]
    fn failed_deposit_is_not_recorded() {
        let mut account = build_account();

        for amount in [Money::ZERO, Money(-1), Money::from_whole(-1000)] {
            assert_eq!(
                Transaction::Deposit(amount).apply(&mut account),
                Err(AccountError::InvalidAmount(amount))
            );
        }

        assert_eq!(account.balance(), Money::ZERO);
        assert!(account.history().is_empty());
    }

    #[test]
    fn failed_withdrawal_is_not_recorded() {
        let mut account = build_account();
        Transaction::Deposit(OTHER_AMOUNT).apply(&mut account).unwrap();

        assert!(matches!(
            Transaction::Withdrawal(SOME_AMOUNT).apply(&mut account),
            Err(AccountError::InsufficientFunds { .. })
        ));

        assert_eq!(account.balance(), OTHER_AMOUNT);
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn apply_through_trait_object() {
        let mut account = build_account();
        let account: &mut dyn Account = &mut account;

        assert!(Transaction::Deposit(SOME_AMOUNT).apply(account).is_ok());
        assert_eq!(account.balance(), SOME_AMOUNT);
        assert_eq!(account.history().count(TransactionKind::Deposit), 1);
    }

    #[test]
    fn amount_and_kind() {
        assert_eq!(Transaction::Deposit(SOME_AMOUNT).amount(), SOME_AMOUNT);
        assert_eq!(Transaction::Withdrawal(OTHER_AMOUNT).amount(), OTHER_AMOUNT);
        assert_eq!(Transaction::Deposit(SOME_AMOUNT).kind(), TransactionKind::Deposit);
        assert_eq!(Transaction::Withdrawal(SOME_AMOUNT).kind(), TransactionKind::Withdrawal);
    }
}

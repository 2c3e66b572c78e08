//! Applies a validated transfer to the caller's accounts
use super::error::ExecutionError;
use super::schedule::ExecutionMode;
use super::types::Account;
use super::validation::ValidatedTransfer;

/// Balance of one touched account before the call; the post-state is read
/// back from the account itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceChange {
    pub index: usize,
    pub balance_before: i64,
}

/// Move `amount` from the debit account to the credit account in place when
/// the mode is immediate. Deferred transfers leave balances alone.
///
/// Both new balances are computed before either is written, so an overflow
/// leaves every account untouched.
pub fn execute(
    accounts: &mut [Account],
    transfer: &ValidatedTransfer,
    mode: ExecutionMode,
) -> Result<[BalanceChange; 2], ExecutionError> {
    let ValidatedTransfer {
        amount,
        debit_index,
        credit_index,
    } = *transfer;

    let changes = [
        BalanceChange {
            index: debit_index,
            balance_before: accounts[debit_index].balance,
        },
        BalanceChange {
            index: credit_index,
            balance_before: accounts[credit_index].balance,
        },
    ];

    if mode == ExecutionMode::Deferred {
        return Ok(changes);
    }

    let overflow = |account: &Account| ExecutionError::BalanceOverflow {
        account: account.id.clone(),
        amount,
    };
    let debit_after = accounts[debit_index]
        .balance
        .checked_sub(amount)
        .ok_or_else(|| overflow(&accounts[debit_index]))?;
    let credit_after = accounts[credit_index]
        .balance
        .checked_add(amount)
        .ok_or_else(|| overflow(&accounts[credit_index]))?;

    accounts[debit_index].balance = debit_after;
    accounts[credit_index].balance = credit_after;

    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(amount: i64) -> ValidatedTransfer {
        ValidatedTransfer {
            amount,
            debit_index: 1,
            credit_index: 0,
        }
    }

    #[test]
    fn immediate_moves_funds() {
        let mut accounts = vec![Account::new("c", 10, "USD"), Account::new("d", 100, "USD")];

        let changes = execute(&mut accounts, &transfer(30), ExecutionMode::Immediate).unwrap();

        assert_eq!(accounts[1].balance, 70);
        assert_eq!(accounts[0].balance, 40);
        assert_eq!(changes[0], BalanceChange { index: 1, balance_before: 100 });
        assert_eq!(changes[1], BalanceChange { index: 0, balance_before: 10 });
    }

    #[test]
    fn deferred_leaves_balances() {
        let mut accounts = vec![Account::new("c", 10, "USD"), Account::new("d", 100, "USD")];
        let before = accounts.clone();

        execute(&mut accounts, &transfer(30), ExecutionMode::Deferred).unwrap();

        assert_eq!(accounts, before);
    }

    #[test]
    fn overflow_mutates_nothing() {
        let mut accounts = vec![Account::new("c", i64::MAX, "USD"), Account::new("d", 100, "USD")];
        let before = accounts.clone();

        let err = execute(&mut accounts, &transfer(1), ExecutionMode::Immediate).unwrap_err();

        assert_eq!(err.code(), crate::error::StatusCode::InvalidAmount);
        assert_eq!(accounts, before);
    }
}

//! Ordered validator chain for draft transfers
//!
//! Rules run in a fixed order and the first failure wins. Later rules rely on
//! earlier ones having passed (funds are only compared once both accounts
//! resolve), so the order below must not be shuffled.
use super::error::ValidationError;
use super::types::{Account, DraftTransfer};
use chrono::NaiveDate;

/// A draft that passed every rule, with its accounts resolved to positions
/// in the caller's account list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTransfer {
    pub amount: i64,
    pub debit_index: usize,
    pub credit_index: usize,
}

/// Run the chain: AM01, CU02, AC04, AC02, AC03, CU01, AC01, DT01.
pub fn validate(
    draft: &DraftTransfer,
    accounts: &[Account],
    supported_currencies: &[String],
) -> Result<ValidatedTransfer, ValidationError> {
    let amount = check_amount(&draft.amount)?;
    check_supported_currency(&draft.currency, supported_currencies)?;
    check_account_id(&draft.debit_account_id)?;
    check_account_id(&draft.credit_account_id)?;

    if draft.debit_account_id == draft.credit_account_id {
        return Err(ValidationError::SameAccount);
    }

    let debit_index = find_account(accounts, &draft.debit_account_id)?;
    let credit_index = find_account(accounts, &draft.credit_account_id)?;
    let debit = &accounts[debit_index];
    let credit = &accounts[credit_index];

    for account in [debit, credit] {
        if !account.currency.eq_ignore_ascii_case(&draft.currency) {
            return Err(ValidationError::CurrencyMismatch {
                account: account.id.clone(),
                account_currency: account.currency.to_ascii_uppercase(),
                currency: draft.currency.clone(),
            });
        }
    }

    if debit.balance < amount {
        return Err(ValidationError::InsufficientFunds {
            account: debit.id.clone(),
            available: debit.balance,
            required: amount,
            currency: draft.currency.clone(),
        });
    }

    if let Some(date) = &draft.execute_on {
        parse_date(date)?;
    }

    Ok(ValidatedTransfer {
        amount,
        debit_index,
        credit_index,
    })
}

/// Positive integer in canonical base-10 form: no sign, no leading zeros,
/// no decimal point, nothing trailing.
pub fn check_amount(raw: &str) -> Result<i64, ValidationError> {
    let invalid = || ValidationError::InvalidAmount(raw.to_string());

    if raw.contains(['.', '-']) {
        return Err(invalid());
    }
    let amount: i64 = raw.parse().map_err(|_| invalid())?;
    if amount <= 0 || amount.to_string() != raw {
        return Err(invalid());
    }

    Ok(amount)
}

pub fn check_supported_currency(currency: &str, supported: &[String]) -> Result<(), ValidationError> {
    if supported.iter().any(|c| c == currency) {
        return Ok(());
    }
    Err(ValidationError::UnsupportedCurrency {
        got: currency.to_string(),
        supported: supported.join(", "),
    })
}

/// Non-empty, ASCII letters and digits plus `-`, `.` and `@` only
pub fn check_account_id(id: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '@');

    if id.is_empty() || !id.chars().all(allowed) {
        return Err(ValidationError::InvalidAccountId(id.to_string()));
    }
    Ok(())
}

fn find_account(accounts: &[Account], id: &str) -> Result<usize, ValidationError> {
    accounts
        .iter()
        .position(|a| a.id == id)
        .ok_or_else(|| ValidationError::AccountNotFound(id.to_string()))
}

/// Strict `YYYY-MM-DD` that must also name a real calendar day
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(raw.to_string());
    let bytes = raw.as_bytes();

    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    if !(digits(0..4) && digits(5..7) && digits(8..10)) {
        return Err(invalid());
    }

    // all ascii at this point, so slicing by byte is safe
    let year: i32 = raw[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = raw[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = raw[8..10].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

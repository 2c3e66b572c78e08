//! Status codes and the error types raised by each pipeline stage

use serde::Serialize;

/// Every value the `status_code` field can carry.
///
/// `AP00` and `AP02` are not errors, they share the field with the failure
/// codes so that every response has the same shape.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    #[serde(rename = "SY01")]
    MissingKeyword,
    #[serde(rename = "SY02")]
    KeywordOrder,
    #[serde(rename = "SY03")]
    Malformed,
    #[serde(rename = "AM01")]
    InvalidAmount,
    #[serde(rename = "CU01")]
    CurrencyMismatch,
    #[serde(rename = "CU02")]
    UnsupportedCurrency,
    #[serde(rename = "AC01")]
    InsufficientFunds,
    #[serde(rename = "AC02")]
    SameAccount,
    #[serde(rename = "AC03")]
    AccountNotFound,
    #[serde(rename = "AC04")]
    InvalidAccountId,
    #[serde(rename = "DT01")]
    InvalidDate,
    #[serde(rename = "AP00")]
    Successful,
    #[serde(rename = "AP02")]
    Pending,
}

impl StatusCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::MissingKeyword => "SY01",
            StatusCode::KeywordOrder => "SY02",
            StatusCode::Malformed => "SY03",
            StatusCode::InvalidAmount => "AM01",
            StatusCode::CurrencyMismatch => "CU01",
            StatusCode::UnsupportedCurrency => "CU02",
            StatusCode::InsufficientFunds => "AC01",
            StatusCode::SameAccount => "AC02",
            StatusCode::AccountNotFound => "AC03",
            StatusCode::InvalidAccountId => "AC04",
            StatusCode::InvalidDate => "DT01",
            StatusCode::Successful => "AP00",
            StatusCode::Pending => "AP02",
        }
    }

    /// Message used when a failure carries no extra parameters
    pub fn default_message(&self) -> &'static str {
        match self {
            StatusCode::MissingKeyword => "Missing required keyword",
            StatusCode::KeywordOrder => "Invalid keyword order",
            StatusCode::Malformed => "Malformed instruction: unable to parse keywords",
            StatusCode::InvalidAmount => "Amount must be a positive integer",
            StatusCode::CurrencyMismatch => "Account currency mismatch",
            StatusCode::UnsupportedCurrency => "Unsupported currency",
            StatusCode::InsufficientFunds => "Insufficient funds in debit account",
            StatusCode::SameAccount => "Debit and credit accounts cannot be the same",
            StatusCode::AccountNotFound => "Account not found",
            StatusCode::InvalidAccountId => "Invalid account ID format",
            StatusCode::InvalidDate => "Invalid date format",
            StatusCode::Successful => "Transaction executed successfully",
            StatusCode::Pending => "Transaction scheduled for future execution",
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, StatusCode::Successful | StatusCode::Pending)
    }

    pub fn http_status(&self) -> u16 {
        if self.is_failure() { 400 } else { 200 }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures raised while tokenizing an instruction
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing required keyword: {0}")]
    MissingKeyword(&'static str),
    #[error("Invalid keyword order: {0} is out of place")]
    KeywordOrder(&'static str),
    #[error("Malformed instruction: {0}")]
    Malformed(String),
}

impl ParseError {
    pub fn code(&self) -> StatusCode {
        match self {
            ParseError::MissingKeyword(_) => StatusCode::MissingKeyword,
            ParseError::KeywordOrder(_) => StatusCode::KeywordOrder,
            ParseError::Malformed(_) => StatusCode::Malformed,
        }
    }
}

/// Failures raised by the validator chain, one variant per rule
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be a positive integer, got '{0}'")]
    InvalidAmount(String),
    #[error("Unsupported currency {got}. Only {supported} are supported")]
    UnsupportedCurrency { got: String, supported: String },
    #[error("Invalid account ID format: '{0}'")]
    InvalidAccountId(String),
    #[error("Debit and credit accounts cannot be the same")]
    SameAccount,
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Account currency mismatch: account {account} holds {account_currency}, instruction is in {currency}")]
    CurrencyMismatch {
        account: String,
        account_currency: String,
        currency: String,
    },
    #[error("Insufficient funds in debit account {account}: has {available} {currency}, needs {required} {currency}")]
    InsufficientFunds {
        account: String,
        available: i64,
        required: i64,
        currency: String,
    },
    #[error("Invalid date format: '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl ValidationError {
    pub fn code(&self) -> StatusCode {
        match self {
            ValidationError::InvalidAmount(_) => StatusCode::InvalidAmount,
            ValidationError::UnsupportedCurrency { .. } => StatusCode::UnsupportedCurrency,
            ValidationError::InvalidAccountId(_) => StatusCode::InvalidAccountId,
            ValidationError::SameAccount => StatusCode::SameAccount,
            ValidationError::AccountNotFound(_) => StatusCode::AccountNotFound,
            ValidationError::CurrencyMismatch { .. } => StatusCode::CurrencyMismatch,
            ValidationError::InsufficientFunds { .. } => StatusCode::InsufficientFunds,
            ValidationError::InvalidDate(_) => StatusCode::InvalidDate,
        }
    }
}

/// Failures raised while applying balances
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Amount {amount} would overflow the balance of account {account}")]
    BalanceOverflow { account: String, amount: i64 },
}

impl ExecutionError {
    pub fn code(&self) -> StatusCode {
        match self {
            ExecutionError::BalanceOverflow { .. } => StatusCode::InvalidAmount,
        }
    }
}

//! Smoke screen unit tests for the transfer pipeline components
//!
//! These span the codebase and test each stage in isolation from the
//! service. They mostly cover the happy path plus the odd boundary.

use chrono::NaiveDate;
use instruction_transfer::{
    error::{ParseError, StatusCode, ValidationError},
    executor::{BalanceChange, execute},
    parser::{normalize, parse_instruction},
    response::{TransferResponse, TransferStatus, snapshots},
    schedule::{ExecutionMode, decide},
    types::{Account, DraftTransfer, TransferType},
    validation::{ValidatedTransfer, check_amount, parse_date, validate},
};

// PARSER TESTS
#[cfg(test)]
mod parser_tests {
    use super::*;

    /// Whitespace runs collapse to single spaces, case is kept
    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Debit\t 5\n\nusd  "), "Debit 5 usd");
        assert_eq!(normalize(""), "");
    }

    /// Account ids keep their original case even though keywords do not care
    #[test]
    fn account_ids_keep_case() {
        let draft =
            parse_instruction("debit 5 usd from account AbC for credit to account dEf").unwrap();

        assert_eq!(draft.debit_account_id, "AbC");
        assert_eq!(draft.credit_account_id, "dEf");
        assert_eq!(draft.currency, "USD");
    }

    /// The amount token is not interpreted by the parser
    #[test]
    fn amount_is_kept_raw() {
        let draft =
            parse_instruction("DEBIT 0100 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b").unwrap();
        assert_eq!(draft.amount, "0100");
    }

    /// An id with an inner space still parses; the validator rejects it later
    #[test]
    fn spaced_ids_reach_the_validator() {
        let draft =
            parse_instruction("DEBIT 1 USD FROM ACCOUNT a b FOR CREDIT TO ACCOUNT c").unwrap();
        assert_eq!(draft.debit_account_id, "a b");
    }

    /// Missing type keyword is SY01
    #[test]
    fn missing_type_keyword() {
        let err = parse_instruction("TRANSFER 1 USD").unwrap_err();
        assert_eq!(err, ParseError::MissingKeyword("DEBIT or CREDIT"));
    }
}

// VALIDATION TESTS
#[cfg(test)]
mod validation_tests {
    use super::*;

    fn currencies() -> Vec<String> {
        vec!["USD".to_string(), "NGN".to_string()]
    }

    /// Canonical positive integers pass
    #[test]
    fn check_amount_accepts_canonical() {
        assert_eq!(check_amount("1"), Ok(1));
        assert_eq!(check_amount("9000000000"), Ok(9_000_000_000));
    }

    /// Exactly-sufficient funds are allowed
    #[test]
    fn balance_equal_to_amount_passes() {
        let accounts = vec![Account::new("a", 50, "USD"), Account::new("b", 0, "USD")];
        let draft = DraftTransfer::new(TransferType::Credit)
            .set_amount("50")
            .set_currency("usd")
            .set_debit_account("a")
            .set_credit_account("b");

        assert!(validate(&draft, &accounts, &currencies()).is_ok());
    }

    /// Ids are case-sensitive when resolving accounts
    #[test]
    fn lookup_is_case_sensitive() {
        let accounts = vec![Account::new("a", 50, "USD"), Account::new("b", 0, "USD")];
        let draft = DraftTransfer::new(TransferType::Debit)
            .set_amount("5")
            .set_currency("USD")
            .set_debit_account("A")
            .set_credit_account("b");

        let err = validate(&draft, &accounts, &currencies()).unwrap_err();
        assert_eq!(err, ValidationError::AccountNotFound("A".into()));
    }

    /// Leap day only exists in leap years
    #[test]
    fn parse_date_checks_calendar() {
        assert_eq!(parse_date("2028-02-29"), Ok(NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()));
        assert!(parse_date("2027-02-29").is_err());
        assert!(parse_date("2027-04-31").is_err());
    }
}

// SCHEDULE AND EXECUTOR TESTS
#[cfg(test)]
mod execution_tests {
    use super::*;

    /// A date in the future leaves the accounts alone
    #[test]
    fn deferred_transfer_keeps_balances() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mode = decide(Some("2025-01-02"), today);
        assert_eq!(mode, ExecutionMode::Deferred);

        let mut accounts = vec![Account::new("a", 10, "USD"), Account::new("b", 5, "USD")];
        let transfer = ValidatedTransfer {
            amount: 10,
            debit_index: 0,
            credit_index: 1,
        };
        let changes = execute(&mut accounts, &transfer, mode).unwrap();

        assert_eq!(accounts[0].balance, 10);
        assert_eq!(changes[0].balance_before, 10);
    }

    /// Emptying the debit account completely is fine
    #[test]
    fn immediate_transfer_can_zero_the_debit() {
        let mut accounts = vec![Account::new("a", 10, "USD"), Account::new("b", 5, "USD")];
        let transfer = ValidatedTransfer {
            amount: 10,
            debit_index: 0,
            credit_index: 1,
        };
        execute(&mut accounts, &transfer, ExecutionMode::Immediate).unwrap();

        assert_eq!(accounts[0].balance, 0);
        assert_eq!(accounts[1].balance, 15);
    }
}

// RESPONSE TESTS
#[cfg(test)]
mod response_tests {
    use super::*;

    /// Validation failures echo the raw draft fields
    #[test]
    fn failure_echoes_draft() {
        let draft = DraftTransfer::new(TransferType::Debit)
            .set_amount("12x")
            .set_currency("usd")
            .set_debit_account("a")
            .set_credit_account("b")
            .set_execute_on("2025-13-01");

        let response = TransferResponse::for_draft(
            &draft,
            StatusCode::InvalidAmount,
            "bad amount".into(),
            vec![],
        );

        assert_eq!(response.http_status, 400);
        assert_eq!(response.data.status, TransferStatus::Failed);
        assert_eq!(response.data.amount, None);
        assert_eq!(response.data.currency.as_deref(), Some("USD"));
        assert_eq!(response.data.execute_by.as_deref(), Some("2025-13-01"));
        assert_eq!(response.data.transfer_type, Some(TransferType::Debit));
    }

    /// Snapshot currency is upper-cased whatever the stored case
    #[test]
    fn snapshot_currency_is_uppercase() {
        let accounts = vec![Account::new("a", 1, "ngn")];
        let snaps = snapshots(&accounts, [BalanceChange { index: 0, balance_before: 1 }]);
        assert_eq!(snaps[0].currency, "NGN");
    }
}

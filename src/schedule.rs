//! Immediate vs deferred execution, decided on UTC calendar days
use super::validation::parse_date;
use chrono::{NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Immediate,
    Deferred,
}

/// Today's date in UTC
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Decide when a transfer runs. Dates on or before `today` run now, later
/// dates wait. A date that does not parse is deferred; the validator rejects
/// those first so that arm is not reached in normal flow.
pub fn decide(execute_on: Option<&str>, today: NaiveDate) -> ExecutionMode {
    let Some(raw) = execute_on else {
        return ExecutionMode::Immediate;
    };

    match parse_date(raw) {
        Ok(date) if date <= today => ExecutionMode::Immediate,
        _ => ExecutionMode::Deferred,
    }
}

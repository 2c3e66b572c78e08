//! Result payload assembly
//!
//! Every outcome (parse failure, validation failure, pending, executed)
//! produces the same payload shape. Account snapshots follow the order of the
//! caller's account list and always carry an upper-cased currency.
use super::error::{ParseError, StatusCode};
use super::executor::BalanceChange;
use super::types::{Account, DraftTransfer, TransferType};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Successful,
    Pending,
    Failed,
}

impl From<StatusCode> for TransferStatus {
    fn from(code: StatusCode) -> Self {
        match code {
            StatusCode::Successful => TransferStatus::Successful,
            StatusCode::Pending => TransferStatus::Pending,
            _ => TransferStatus::Failed,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub id: String,
    pub balance: i64,
    pub balance_before: i64,
    pub currency: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultPayload {
    #[serde(rename = "type")]
    pub transfer_type: Option<TransferType>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub debit_account: Option<String>,
    pub credit_account: Option<String>,
    pub execute_by: Option<String>, // raw date token, echoed as given
    pub status: TransferStatus,
    pub status_reason: String,
    pub status_code: StatusCode,
    pub accounts: Vec<AccountSnapshot>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TransferResponse {
    #[serde(rename = "httpStatus")]
    pub http_status: u16,
    pub data: ResultPayload,
}

impl TransferResponse {
    /// Nothing parsed, so every transfer field is null and no accounts are listed
    pub fn parse_failure(err: &ParseError) -> Self {
        let code = err.code();
        Self {
            http_status: code.http_status(),
            data: ResultPayload {
                transfer_type: None,
                amount: None,
                currency: None,
                debit_account: None,
                credit_account: None,
                execute_by: None,
                status: code.into(),
                status_reason: err.to_string(),
                status_code: code,
                accounts: vec![],
            },
        }
    }

    /// Echo the draft as parsed along with the account snapshots
    pub fn for_draft(
        draft: &DraftTransfer,
        code: StatusCode,
        status_reason: String,
        accounts: Vec<AccountSnapshot>,
    ) -> Self {
        Self {
            http_status: code.http_status(),
            data: ResultPayload {
                transfer_type: Some(draft.transfer_type),
                amount: draft.parsed_amount(),
                currency: Some(draft.currency.to_ascii_uppercase()),
                debit_account: Some(draft.debit_account_id.clone()),
                credit_account: Some(draft.credit_account_id.clone()),
                execute_by: draft.execute_on.clone(),
                status: code.into(),
                status_reason,
                status_code: code,
                accounts,
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.data.status_code
    }
}

/// Snapshots for the touched accounts, in input order, one per account
pub fn snapshots(
    accounts: &[Account],
    changes: impl IntoIterator<Item = BalanceChange>,
) -> Vec<AccountSnapshot> {
    let mut changes: Vec<BalanceChange> = changes.into_iter().collect();
    changes.sort_by_key(|c| c.index);
    changes.dedup_by_key(|c| c.index);

    changes
        .into_iter()
        .filter_map(|change| {
            let account = accounts.get(change.index)?;
            Some(AccountSnapshot {
                id: account.id.clone(),
                balance: account.balance,
                balance_before: change.balance_before,
                currency: account.currency.to_ascii_uppercase(),
            })
        })
        .collect()
}

/// Snapshots where nothing moved: `balance == balance_before`
pub fn unchanged_snapshots(
    accounts: &[Account],
    indices: impl IntoIterator<Item = usize>,
) -> Vec<AccountSnapshot> {
    let changes = indices.into_iter().filter_map(|index| {
        accounts.get(index).map(|account| BalanceChange {
            index,
            balance_before: account.balance,
        })
    });
    snapshots(accounts, changes)
}

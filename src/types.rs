//! Accounts, requests and the draft transfer produced by the parser
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String, // case-sensitive, unique within a request
    pub balance: i64,
    pub currency: String,
}

impl Account {
    pub fn new(id: &str, balance: i64, currency: &str) -> Self {
        Self {
            id: id.to_string(),
            balance,
            currency: currency.to_string(),
        }
    }
}

/// Which keyword the instruction opened with. Does not change who pays.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransferType {
    Debit,
    Credit,
}

impl TransferType {
    pub fn keyword(&self) -> &'static str {
        match self {
            TransferType::Debit => "DEBIT",
            TransferType::Credit => "CREDIT",
        }
    }
}

// Not yet validated, every field is exactly what the instruction said
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTransfer {
    pub transfer_type: TransferType,
    pub amount: String, // raw token
    pub currency: String, // upper-cased
    pub debit_account_id: String, // always the paying side
    pub credit_account_id: String,
    pub execute_on: Option<String>, // raw YYYY-MM-DD token
}

impl DraftTransfer {
    /// Start a draft with empty fields, mostly useful for building fixtures
    pub fn new(transfer_type: TransferType) -> Self {
        Self {
            transfer_type,
            amount: String::new(),
            currency: String::new(),
            debit_account_id: String::new(),
            credit_account_id: String::new(),
            execute_on: None,
        }
    }
    pub fn set_amount(mut self, amount: &str) -> Self {
        self.amount = amount.to_string();
        self
    }
    pub fn set_currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_ascii_uppercase();
        self
    }
    pub fn set_debit_account(mut self, id: &str) -> Self {
        self.debit_account_id = id.to_string();
        self
    }
    pub fn set_credit_account(mut self, id: &str) -> Self {
        self.credit_account_id = id.to_string();
        self
    }
    pub fn set_execute_on(mut self, date: &str) -> Self {
        self.execute_on = Some(date.to_string());
        self
    }
    /// The amount as an integer when the raw token is a plain base-10 number
    pub fn parsed_amount(&self) -> Option<i64> {
        self.amount.parse().ok()
    }
}

/// The request handed to the core: a closed set of accounts plus the text
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub accounts: Vec<Account>,
    pub instruction: String,
}

impl TransferRequest {
    pub fn new(accounts: Vec<Account>, instruction: &str) -> Self {
        Self {
            accounts,
            instruction: instruction.to_string(),
        }
    }

    /// Position of the account with exactly this id
    pub fn find_account(&self, id: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_from_json() {
        let json = r#"{
            "accounts": [{"id": "a1", "balance": 100, "currency": "usd"}],
            "instruction": "DEBIT 10 USD FROM ACCOUNT a1 FOR CREDIT TO ACCOUNT b2"
        }"#;
        let request: TransferRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.accounts[0], Account::new("a1", 100, "usd"));
        assert_eq!(request.find_account("a1"), Some(0));
        assert_eq!(request.find_account("A1"), None);
    }

    #[test]
    fn parsed_amount_is_strict() {
        let draft = DraftTransfer::new(TransferType::Debit).set_amount("12x");
        assert_eq!(draft.parsed_amount(), None);
        assert_eq!(draft.set_amount("0100").parsed_amount(), Some(100));
    }
}

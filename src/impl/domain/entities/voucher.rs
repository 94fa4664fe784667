use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Debit,
    Credit,
}

/// A voucher (journal entry). Its splits are expected to balance; the backend
/// enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinTransaction {
    pub trans_id: Option<i64>,
    pub voucher_no: Option<String>,
    pub currency_id: Option<i64>,
    pub trans_date: NaiveDate,
    /// Server-assigned entry timestamp, kept verbatim.
    pub enter_date: Option<String>,
    pub description: String,
    pub creator_id: Option<i64>,
    pub status: Option<i32>,
    #[serde(default)]
    pub splits: Vec<FinSplit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinSplit {
    pub split_id: Option<i64>,
    pub trans_id: Option<i64>,
    pub account_id: i64,
    pub account_name: Option<String>,
    pub account_code: Option<String>,
    pub direction: Direction,
    pub amount: f64,
    pub memo: Option<String>,
    pub owner_id: Option<i64>,
    pub owner_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

// --

impl FinTransaction {
    /// A new, unsaved voucher.
    pub fn draft(trans_date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            trans_id: None,
            voucher_no: None,
            currency_id: None,
            trans_date,
            enter_date: None,
            description: description.into(),
            creator_id: None,
            status: None,
            splits: Vec::new(),
        }
    }

    pub fn with_split(mut self, split: FinSplit) -> Self {
        self.splits.push(split);
        self
    }
}

impl FinSplit {
    pub fn new(account_id: i64, direction: Direction, amount: f64) -> Self {
        Self {
            split_id: None,
            trans_id: None,
            account_id,
            account_name: None,
            account_code: None,
            direction,
            amount,
            memo: None,
            owner_id: None,
            owner_type: None,
        }
    }

    pub fn debit(account_id: i64, amount: f64) -> Self {
        Self::new(account_id, Direction::Debit, amount)
    }

    pub fn credit(account_id: i64, amount: f64) -> Self {
        Self::new(account_id, Direction::Credit, amount)
    }
}

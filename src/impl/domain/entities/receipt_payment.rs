use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

/// Receipt or payment slip, posted to the ledger as a voucher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BizReceiptPayment {
    pub id: Option<i64>,
    pub code: Option<String>,
    /// RECEIPT or PAYMENT.
    #[serde(rename = "type")]
    pub kind: String,
    pub partner_name: Option<String>,
    pub owner_id: Option<i64>,
    pub account_id: Option<i64>,
    pub amount: f64,
    pub date: NaiveDate,
    pub remark: Option<String>,
    /// 0 draft, 1 posted.
    pub status: Option<i32>,
    pub voucher_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiptPaymentQuery {
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
    pub kind: Option<String>,
    pub status: Option<i32>,
}

use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

/// Direction of a payment: money received from a customer, or paid to a
/// vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    Receipt,
    Payment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub owner_id: i64,
    pub amount: f64,
    /// Cash or bank account the money moves through.
    pub account_id: i64,
    pub payment_type: PaymentType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: Option<i64>,
    pub payment_no: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub payment_type: Option<String>,
    pub owner_id: Option<i64>,
    pub account_id: Option<i64>,
    pub commodity_id: Option<i64>,
    pub amount: f64,
    pub memo: Option<String>,
    pub status: Option<String>,
    pub posted: Option<bool>,
    pub trans_id: Option<i64>,
    pub unallocated_amount: Option<f64>,
    #[serde(default)]
    pub allocations: Vec<PaymentAllocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAllocation {
    pub allocation_id: Option<i64>,
    pub payment_id: Option<i64>,
    pub document_type: Option<String>,
    pub document_id: Option<i64>,
    pub amount: f64,
    pub previous_unpaid_amount: Option<f64>,
    pub remaining_unpaid_amount: Option<f64>,
    pub allocation_status: Option<String>,
}

/// How much of a payment was applied to one open document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAllocationResult {
    pub document_no: String,
    pub amount: f64,
    /// PAID or PARTIAL.
    pub status: String,
    pub remaining_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub payment: Payment,
    #[serde(default)]
    pub allocations: Vec<PaymentAllocationResult>,
}

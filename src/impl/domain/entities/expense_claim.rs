use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimStatus {
    Draft,
    Posted,
    Reversed,
}

/// Employee expense claim: debit lines against one credit (payable or cash)
/// account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BizExpenseClaim {
    pub claim_id: Option<i64>,
    pub claim_no: Option<String>,
    pub applicant_id: i64,
    pub applicant_name: Option<String>,
    pub claim_date: NaiveDate,
    pub total_amount: f64,
    pub status: ClaimStatus,
    pub credit_account_id: i64,
    pub credit_account_name: Option<String>,
    pub notes: Option<String>,
    pub voucher_id: Option<i64>,
    #[serde(default)]
    pub details: Vec<BizExpenseClaimDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BizExpenseClaimDetail {
    pub detail_id: Option<i64>,
    pub claim_id: Option<i64>,
    pub debit_account_id: i64,
    pub debit_account_name: Option<String>,
    pub amount: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClaimStatus>,
}

// Approval-workflow claims.
// ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseClaim {
    pub claim_id: Option<i64>,
    pub claim_no: Option<String>,
    pub claim_date: NaiveDate,
    pub employee_id: i64,
    pub total_amount: f64,
    pub approval_status: Option<String>,
    pub approver_id: Option<i64>,
    pub approval_date: Option<NaiveDate>,
    pub approval_comment: Option<String>,
    pub notes: Option<String>,
    pub posted: Option<bool>,
    pub trans_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<ExpenseClaimItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseClaimItem {
    pub item_id: Option<i64>,
    pub claim_id: Option<i64>,
    pub description: String,
    pub expense_account_id: i64,
    pub amount: f64,
    pub attachment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimApproval {
    pub approver_id: i64,
    pub approved: bool,
    pub comment: Option<String>,
}

impl BizExpenseClaim {
    pub fn detail_total(&self) -> f64 {
        self.details.iter().map(|d| d.amount).sum()
    }
}

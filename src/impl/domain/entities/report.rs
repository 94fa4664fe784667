use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

/// One account line of the trial balance for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceRow {
    pub account_id: i64,
    pub account_code: String,
    pub account_name: String,
    pub account_type: String,
    pub period_begin_debit: f64,
    pub period_begin_credit: f64,
    pub period_debit: f64,
    pub period_credit: f64,
    pub period_end_debit: f64,
    pub period_end_credit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub report_date: NaiveDate,
    #[serde(default)]
    pub assets: Vec<BalanceSheetItem>,
    pub total_assets: f64,
    #[serde(default)]
    pub liabilities: Vec<BalanceSheetItem>,
    pub total_liabilities: f64,
    #[serde(default)]
    pub equity: Vec<BalanceSheetItem>,
    pub total_equity: f64,
    pub total_liabilities_and_equity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetItem {
    pub account_code: String,
    pub account_name: String,
    pub amount: f64,
    #[serde(default)]
    pub children: Vec<BalanceSheetItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    pub report_date: NaiveDate,
    #[serde(default)]
    pub operating_activities: Vec<CashFlowItem>,
    pub net_operating_cash_flow: f64,
    #[serde(default)]
    pub investing_activities: Vec<CashFlowItem>,
    pub net_investing_cash_flow: f64,
    #[serde(default)]
    pub financing_activities: Vec<CashFlowItem>,
    pub net_financing_cash_flow: f64,
    pub net_increase_in_cash: f64,
    pub beginning_cash_balance: f64,
    pub ending_cash_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowItem {
    pub item_name: String,
    pub amount: f64,
    pub description: Option<String>,
}

/// Trial balance together with the backend's debit/credit equality check.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialBalanceReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rows: Vec<TrialBalanceRow>,
    pub balanced: bool,
}

// --

impl TrialBalanceRow {
    /// Net opening balance, debit positive.
    pub fn opening_balance(&self) -> f64 {
        self.period_begin_debit - self.period_begin_credit
    }

    /// Net closing balance, debit positive.
    pub fn ending_balance(&self) -> f64 {
        self.period_end_debit - self.period_end_credit
    }
}

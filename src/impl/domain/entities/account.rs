use serde_derive::{Deserialize, Serialize};

use super::voucher::Direction;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxiliaryTags {
    pub customer: Option<bool>,
    pub supplier: Option<bool>,
    pub project: Option<bool>,
}

/// Chart-of-accounts entry as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinAccount {
    pub account_id: Option<i64>,
    pub account_code: String,
    pub account_name: String,
    pub account_type: String,
    pub parent_id: Option<i64>,
    pub balance_direction: Option<Direction>,
    pub auxiliary_tags: Option<AuxiliaryTags>,
}

/// Account as returned by the tree and leaf-list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountNode {
    pub account_id: i64,
    pub account_code: String,
    pub account_name: String,
    pub account_type: String,
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub children: Vec<AccountNode>,
    pub is_leaf: Option<bool>,
    /// Hierarchy path, e.g. "Assets/Current Assets/Cash".
    pub path: Option<String>,
    pub balance: Option<f64>,
    pub balance_direction: Option<Direction>,
    pub auxiliary_tags: Option<AuxiliaryTags>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub account_id: i64,
    pub account_code: String,
    pub account_name: String,
    pub account_type: String,
    pub debit_balance: f64,
    pub credit_balance: f64,
    pub balance: f64,
}

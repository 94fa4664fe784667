use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OwnerType {
    Customer,
    Vendor,
    Employee,
    #[serde(other)]
    Other,
}

/// Business partner master record (customer, vendor, employee).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub owner_id: Option<i64>,
    pub name: String,
    pub code: Option<String>,
    pub owner_type: OwnerType,
    /// Receivable/payable account the partner posts to.
    pub account_id: Option<i64>,
    pub account_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub address: Option<String>,
}

/// Normalised partner for selection lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub partner_id: i64,
    pub partner_name: String,
    pub partner_code: Option<String>,
    pub category: Option<OwnerType>,
    pub account_id: Option<i64>,
    pub account_name: Option<String>,
}

impl OwnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerType::Customer => "CUSTOMER",
            OwnerType::Vendor => "VENDOR",
            OwnerType::Employee => "EMPLOYEE",
            OwnerType::Other => "OTHER",
        }
    }
}

impl Owner {
    pub fn new(name: impl Into<String>, owner_type: OwnerType) -> Self {
        Self {
            owner_id: None,
            name: name.into(),
            code: None,
            owner_type,
            account_id: None,
            account_name: None,
            contact_name: None,
            contact_phone: None,
            contact_email: None,
            address: None,
        }
    }
}

use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_id: Option<i64>,
    pub invoice_no: String,
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub status: String,
    pub total_amount: f64,
    pub tax_amount: Option<f64>,
    pub net_amount: Option<f64>,
    pub paid_amount: Option<f64>,
    /// Unpaid remainder, `total_amount - paid_amount`.
    pub balance_amount: Option<f64>,
    pub posted: Option<bool>,
    pub trans_id: Option<i64>,
    pub shipping_status: Option<String>,
    pub tracking_no: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub item_id: Option<i64>,
    pub invoice_id: Option<i64>,
    pub description: String,
    pub income_account_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub amount: Option<f64>,
    pub tax_rate: Option<f64>,
    pub tax_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub bill_id: Option<i64>,
    pub bill_no: String,
    pub bill_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub vendor_id: Option<i64>,
    pub vendor_name: Option<String>,
    pub status: String,
    pub total_amount: f64,
    pub tax_amount: Option<f64>,
    pub net_amount: Option<f64>,
    pub paid_amount: Option<f64>,
    pub balance_amount: Option<f64>,
    pub posted: Option<bool>,
    pub trans_id: Option<i64>,
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<BillItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub item_id: Option<i64>,
    pub bill_id: Option<i64>,
    pub description: String,
    pub expense_account_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub amount: Option<f64>,
    pub tax_rate: Option<f64>,
    pub tax_amount: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Invoice,
    Bill,
}

/// Invoices and bills under one shape, for the document manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDocument {
    pub document_type: DocumentType,
    pub document_id: Option<i64>,
    pub document_no: String,
    pub document_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    /// Customer for invoices, vendor for bills.
    pub owner_id: Option<i64>,
    pub owner_name: Option<String>,
    pub status: String,
    pub total_amount: f64,
    pub tax_amount: Option<f64>,
    pub net_amount: Option<f64>,
    pub paid_amount: Option<f64>,
    pub balance_amount: Option<f64>,
    pub posted: Option<bool>,
    pub trans_id: Option<i64>,
    pub notes: Option<String>,
}

// --

impl From<Invoice> for BusinessDocument {
    fn from(i: Invoice) -> Self {
        Self {
            document_type: DocumentType::Invoice,
            document_id: i.invoice_id,
            document_no: i.invoice_no,
            document_date: i.invoice_date,
            due_date: i.due_date,
            owner_id: i.customer_id,
            owner_name: i.customer_name,
            status: i.status,
            total_amount: i.total_amount,
            tax_amount: i.tax_amount,
            net_amount: i.net_amount,
            paid_amount: i.paid_amount,
            balance_amount: i.balance_amount,
            posted: i.posted,
            trans_id: i.trans_id,
            notes: i.notes,
        }
    }
}

impl From<Bill> for BusinessDocument {
    fn from(b: Bill) -> Self {
        Self {
            document_type: DocumentType::Bill,
            document_id: b.bill_id,
            document_no: b.bill_no,
            document_date: b.bill_date,
            due_date: b.due_date,
            owner_id: b.vendor_id,
            owner_name: b.vendor_name,
            status: b.status,
            total_amount: b.total_amount,
            tax_amount: b.tax_amount,
            net_amount: b.net_amount,
            paid_amount: b.paid_amount,
            balance_amount: b.balance_amount,
            posted: b.posted,
            trans_id: b.trans_id,
            notes: b.notes,
        }
    }
}

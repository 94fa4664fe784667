/// Coarse page category driving toolbar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageContext {
    #[default]
    Dashboard,
    /// Entering or editing a voucher.
    VoucherEditor,
    VoucherQuery,
    AccountManagement,
    Report,
    /// Invoices, bills and the payment workflow.
    Document,
    /// Customers, vendors and employees.
    Master,
    Fund,
    Other,
}

impl PageContext {
    pub fn from_path(path: &str) -> Self {
        let starts = |prefixes: &[&str]| prefixes.iter().any(|p| path.starts_with(p));
        if path == "/" || path == "/dashboard" {
            PageContext::Dashboard
        } else if starts(&["/voucher/add", "/voucher/edit"]) {
            PageContext::VoucherEditor
        } else if starts(&["/voucher/query", "/voucher/quick-entry"]) {
            PageContext::VoucherQuery
        } else if starts(&["/accounts"]) {
            PageContext::AccountManagement
        } else if starts(&["/reports"]) {
            PageContext::Report
        } else if starts(&["/document", "/payment/workflow"]) {
            PageContext::Document
        } else if starts(&["/master"]) {
            PageContext::Master
        } else if starts(&["/fund"]) {
            PageContext::Fund
        } else {
            PageContext::Other
        }
    }
}

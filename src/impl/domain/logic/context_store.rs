use crate::entities::PageContext;

/// Page category of the current route, for toolbars that only apply to some
/// pages.
#[derive(Debug, Clone, Default)]
pub struct ContextStore {
    current: PageContext,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> PageContext {
        self.current
    }

    pub fn set_context_from_route(&mut self, path: &str) -> PageContext {
        self.current = PageContext::from_path(path);
        tracing::debug!(path, context = ?self.current, "Page context updated.");
        self.current
    }

    pub fn is_voucher_editor(&self) -> bool {
        self.current == PageContext::VoucherEditor
    }

    pub fn is_dashboard(&self) -> bool {
        self.current == PageContext::Dashboard
    }

    /// Voucher actions (save, audit, reverse) only make sense in the editor.
    pub fn can_use_voucher_actions(&self) -> bool {
        self.is_voucher_editor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_order() {
        let cases = [
            ("/", PageContext::Dashboard),
            ("/dashboard", PageContext::Dashboard),
            ("/voucher/add", PageContext::VoucherEditor),
            ("/voucher/edit/12", PageContext::VoucherEditor),
            ("/voucher/query", PageContext::VoucherQuery),
            ("/voucher/quick-entry", PageContext::VoucherQuery),
            ("/accounts", PageContext::AccountManagement),
            ("/reports/trial-balance", PageContext::Report),
            ("/document/invoice/3", PageContext::Document),
            ("/payment/workflow", PageContext::Document),
            ("/master/customer", PageContext::Master),
            ("/fund/expense", PageContext::Fund),
            ("/settings", PageContext::Other),
            ("/dashboard/extra", PageContext::Other),
        ];
        let mut store = ContextStore::new();
        for (path, expected) in cases {
            assert_eq!(store.set_context_from_route(path), expected, "path {path}");
        }
    }

    #[test]
    fn test_derived_flags() {
        let mut store = ContextStore::new();
        assert!(store.is_dashboard());
        assert!(!store.can_use_voucher_actions());

        store.set_context_from_route("/voucher/add");
        assert!(store.is_voucher_editor());
        assert!(store.can_use_voucher_actions());
        assert!(!store.is_dashboard());

        store.set_context_from_route("/voucher/query");
        assert!(!store.can_use_voucher_actions());
    }
}

use std::sync::LazyLock;

use regex::Regex;

use crate::entities::{Navigation, RouteDef};

pub const HOME_PATH: &str = "/dashboard";

const fn route(path: &'static str, name: &'static str, title: &'static str) -> RouteDef {
    RouteDef {
        path,
        name,
        title,
        requires_auth: true,
        hidden: false,
    }
}

pub static ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/login",
        name: "login",
        title: "Login",
        requires_auth: false,
        hidden: true,
    },
    route("/dashboard", "dashboard", "Dashboard"),
    route("/voucher/add", "voucher-add", "Voucher Entry"),
    route("/voucher/query", "voucher-query", "Voucher Query"),
    route("/accounts", "accounts", "Chart of Accounts"),
    route("/reports/trial-balance", "trial-balance", "Trial Balance"),
    route("/reports/balance-sheet", "balance-sheet", "Balance Sheet"),
    route("/reports/cash-flow", "cash-flow", "Cash Flow Statement"),
    route("/voucher/quick-entry", "quick-entry", "Quick Entry"),
    route("/document/invoice", "business-document", "Business Documents"),
    route("/payment/workflow", "payment-workflow", "Payment Workflow"),
    route("/master/customer", "customer-list", "Customers"),
    route("/master/vendor", "vendor-list", "Vendors"),
    route("/master/employee", "employee-list", "Employees"),
    route("/document/invoice-list", "invoice-list", "Invoices"),
    route("/document/invoice/:id", "invoice-detail", "Invoice Detail"),
    route("/document/invoice/add", "invoice-add", "New Invoice"),
    route("/document/bill-list", "bill-list", "Bills"),
    route("/document/bill/:id", "bill-detail", "Bill Detail"),
    route("/document/bill/add", "bill-add", "New Bill"),
    route("/document/manage", "document-manage", "Document Management"),
    route("/fund/payment", "payment-list", "Receipts & Payments"),
    route("/fund/expense", "expense-claim-list", "Expense Claims"),
];

/// Paths that only forward elsewhere.
static ALIASES: &[(&str, &str)] = &[("/", HOME_PATH)];

static PARAM_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\w+)").expect("hardcoded regex should be valid"));

/// Parameterised routes with their compiled matchers.
static PATTERNS: LazyLock<Vec<(&'static RouteDef, Regex)>> = LazyLock::new(|| {
    ROUTES
        .iter()
        .filter(|r| r.path.contains(':'))
        .map(|r| {
            let pattern = PARAM_SEGMENT.replace_all(&regex::escape(r.path), "(?P<$1>[^/]+)");
            let regex =
                Regex::new(&format!("^{pattern}$")).expect("hardcoded regex should be valid");
            (r, regex)
        })
        .collect()
});

/// A route matched against a concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub def: &'static RouteDef,
    pub params: Vec<(String, String)>,
}

impl ResolvedRoute {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

pub fn route_by_name(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.name == name)
}

/// Where an alias path forwards to, if it is one.
pub fn alias_target(path: &str) -> Option<&'static str> {
    let path = strip_query(path);
    ALIASES
        .iter()
        .find(|(from, _)| *from == path)
        .map(|(_, to)| *to)
}

/// Finds the route for `path` (query ignored). Static routes win over
/// parameterised ones, so `/document/bill/add` never reads as bill "add".
pub fn resolve(path: &str) -> Option<ResolvedRoute> {
    let path = strip_query(path);
    if let Some(def) = ROUTES.iter().find(|r| r.path == path) {
        return Some(ResolvedRoute {
            def,
            params: Vec::new(),
        });
    }
    PATTERNS.iter().find_map(|(def, regex)| {
        let captures = regex.captures(path)?;
        let params = regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                captures
                    .name(name)
                    .map(|m| (name.to_string(), m.as_str().to_string()))
            })
            .collect();
        Some(ResolvedRoute { def, params })
    })
}

/// Decides whether navigation to `path` may proceed.
pub fn guard(path: &str, authenticated: bool) -> Navigation {
    let bare = strip_query(path);
    if let Some(target) = alias_target(bare) {
        return Navigation::redirect(target);
    }
    if bare == "/login" {
        return if authenticated {
            Navigation::redirect(HOME_PATH)
        } else {
            Navigation::Proceed
        };
    }
    match resolve(bare) {
        Some(route) if route.def.requires_auth && !authenticated => Navigation::Redirect {
            path: "/login".to_string(),
            redirect: Some(path.to_string()),
        },
        _ => Navigation::Proceed,
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

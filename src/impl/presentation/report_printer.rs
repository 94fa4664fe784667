use iso_currency::Currency;

use crate::{
    entities::{
        AccountNode, BalanceSheet, BalanceSheetItem, CashFlowItem, CashFlowStatement,
        TrialBalanceReport,
    },
    presentation::utils::{fit, format_amount},
};

const NAME_WIDTH: usize = 28;
const AMOUNT_WIDTH: usize = 18;

/// Renders reports as fixed-width plain text.
pub struct ReportPrinter {
    currency: Currency,
}

impl ReportPrinter {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub fn print_trial_balance(&self, report: &TrialBalanceReport) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Trial Balance {} .. {}\n\n",
            report.start_date, report.end_date
        ));
        out.push_str(&format!(
            "{} {} {:>w$} {:>w$} {:>w$} {:>w$}\n",
            fit("Code", 10),
            fit("Account", NAME_WIDTH),
            "Opening",
            "Debit",
            "Credit",
            "Closing",
            w = AMOUNT_WIDTH,
        ));

        let (mut debit_total, mut credit_total) = (0.0, 0.0);
        for row in &report.rows {
            debit_total += row.period_debit;
            credit_total += row.period_credit;
            let amounts = [
                row.opening_balance(),
                row.period_debit,
                row.period_credit,
                row.ending_balance(),
            ]
            .map(|a| format!("{:>w$}", self.amount(a), w = AMOUNT_WIDTH))
            .join(" ");
            self.push_wrapped(&mut out, &fit(&row.account_code, 10), &row.account_name, &amounts);
        }

        out.push_str(&format!(
            "{} {} {:>w$} {:>w$} {:>w$} {:>w$}\n",
            fit("", 10),
            fit("Total", NAME_WIDTH),
            "",
            self.amount(debit_total),
            self.amount(credit_total),
            "",
            w = AMOUNT_WIDTH,
        ));
        out.push_str(if report.balanced {
            "\nDebits and credits balance.\n"
        } else {
            "\nWARNING: debits and credits do not balance.\n"
        });
        out
    }

    pub fn print_balance_sheet(&self, sheet: &BalanceSheet) -> String {
        let mut out = format!("Balance Sheet as of {}\n", sheet.report_date);
        for (title, items, total) in [
            ("Assets", &sheet.assets, sheet.total_assets),
            ("Liabilities", &sheet.liabilities, sheet.total_liabilities),
            ("Equity", &sheet.equity, sheet.total_equity),
        ] {
            out.push_str(&format!("\n{title}\n"));
            for item in items {
                self.push_balance_item(&mut out, item, 1);
            }
            self.push_total(&mut out, &format!("Total {}", title.to_lowercase()), total);
        }
        out.push('\n');
        self.push_total(
            &mut out,
            "Total liabilities and equity",
            sheet.total_liabilities_and_equity,
        );
        out
    }

    pub fn print_cash_flow(&self, statement: &CashFlowStatement) -> String {
        let mut out = format!("Cash Flow Statement, {}\n", statement.report_date);
        for (title, items, net) in [
            (
                "Operating activities",
                &statement.operating_activities,
                statement.net_operating_cash_flow,
            ),
            (
                "Investing activities",
                &statement.investing_activities,
                statement.net_investing_cash_flow,
            ),
            (
                "Financing activities",
                &statement.financing_activities,
                statement.net_financing_cash_flow,
            ),
        ] {
            out.push_str(&format!("\n{title}\n"));
            for CashFlowItem { item_name, amount, .. } in items {
                let amount = format!("{:>w$}", self.amount(*amount), w = AMOUNT_WIDTH);
                self.push_wrapped(&mut out, "  ", item_name, &amount);
            }
            self.push_total(&mut out, "Net cash flow", net);
        }
        out.push('\n');
        self.push_total(&mut out, "Net increase in cash", statement.net_increase_in_cash);
        self.push_total(&mut out, "Cash at beginning", statement.beginning_cash_balance);
        self.push_total(&mut out, "Cash at end", statement.ending_cash_balance);
        out
    }

    /// Indented chart of accounts.
    pub fn print_account_tree(&self, roots: &[AccountNode]) -> String {
        let mut out = String::new();
        for root in roots {
            self.push_account(&mut out, root, 0);
        }
        out
    }

    // Helpers.
    // ---

    fn amount(&self, amount: f64) -> String {
        format_amount(amount, self.currency, false)
    }

    /// Writes `prefix name amounts`, wrapping long names onto continuation
    /// lines so the amount columns stay aligned.
    fn push_wrapped(&self, out: &mut String, prefix: &str, name: &str, amounts: &str) {
        let lines = textwrap::wrap(name, NAME_WIDTH);
        let blank = " ".repeat(prefix.chars().count());
        for (i, line) in lines.iter().enumerate() {
            let lead = if i == 0 { prefix } else { blank.as_str() };
            if i == 0 {
                out.push_str(&format!("{lead} {} {amounts}\n", fit(line, NAME_WIDTH)));
            } else {
                out.push_str(&format!("{lead} {}\n", line));
            }
        }
        if lines.is_empty() {
            out.push_str(&format!("{prefix} {} {amounts}\n", fit("", NAME_WIDTH)));
        }
    }

    fn push_total(&self, out: &mut String, label: &str, amount: f64) {
        out.push_str(&format!(
            "  {} {:>w$}\n",
            fit(label, NAME_WIDTH + 1),
            self.amount(amount),
            w = AMOUNT_WIDTH,
        ));
    }

    fn push_balance_item(&self, out: &mut String, item: &BalanceSheetItem, depth: usize) {
        let amount = format!("{:>w$}", self.amount(item.amount), w = AMOUNT_WIDTH);
        let indent = "  ".repeat(depth);
        self.push_wrapped(out, &indent, &item.account_name, &amount);
        for child in &item.children {
            self.push_balance_item(out, child, depth + 1);
        }
    }

    fn push_account(&self, out: &mut String, node: &AccountNode, depth: usize) {
        let balance = node
            .balance
            .map(|b| format!("  {}", self.amount(b)))
            .unwrap_or_default();
        out.push_str(&format!(
            "{}{} {}{balance}\n",
            "  ".repeat(depth),
            node.account_code,
            node.account_name
        ));
        for child in &node.children {
            self.push_account(out, child, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TrialBalanceRow;
    use chrono::NaiveDate;

    fn row(code: &str, name: &str, debit: f64, credit: f64) -> TrialBalanceRow {
        TrialBalanceRow {
            account_id: 1,
            account_code: code.to_string(),
            account_name: name.to_string(),
            account_type: "ASSET".to_string(),
            period_begin_debit: 0.0,
            period_begin_credit: 0.0,
            period_debit: debit,
            period_credit: credit,
            period_end_debit: debit,
            period_end_credit: credit,
        }
    }

    #[test]
    fn test_trial_balance_wraps_long_names_and_totals() {
        let report = TrialBalanceReport {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            rows: vec![
                row("1001", "Cash", 1000.0, 0.0),
                row(
                    "2202",
                    "Accounts payable to domestic and overseas suppliers",
                    0.0,
                    1000.0,
                ),
            ],
            balanced: true,
        };

        let text = ReportPrinter::new(Currency::USD).print_trial_balance(&report);

        assert!(text.starts_with("Trial Balance 2024-01-01 .. 2024-01-31"));
        assert!(text.contains("1,000.00"));
        assert!(text.contains("overseas suppliers"));
        assert!(text.contains("Debits and credits balance."));
        assert!(text.lines().all(|l| !l.contains("Accounts payable to domestic and overseas")));
    }

    fn node(
        code: &str,
        name: &str,
        balance: Option<f64>,
        children: Vec<AccountNode>,
    ) -> AccountNode {
        AccountNode {
            account_id: 0,
            account_code: code.to_string(),
            account_name: name.to_string(),
            account_type: "ASSET".to_string(),
            parent_id: None,
            is_leaf: Some(children.is_empty()),
            children,
            path: None,
            balance,
            balance_direction: None,
            auxiliary_tags: None,
        }
    }

    #[test]
    fn test_account_tree_indents_children() {
        let root = node(
            "1",
            "Assets",
            None,
            vec![node("1001", "Cash", Some(12.5), Vec::new())],
        );

        let text = ReportPrinter::new(Currency::USD).print_account_tree(&[root]);

        assert_eq!(
            text,
            format!("1 Assets\n  1001 Cash  12.50 {}\n", Currency::USD.symbol())
        );
    }
}

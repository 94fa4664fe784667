use std::path::Path;

use fractic_server_error::ServerError;

use crate::{
    entities::{BalanceSheet, BalanceSheetItem, CashFlowStatement, TrialBalanceRow},
    errors::WriteError,
};

const CSV_TARGET: &str = "<csv buffer>";

/// Trial balance rows as CSV, one line per account.
pub fn trial_balance_csv(rows: &[TrialBalanceRow]) -> Result<String, ServerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_record(
        &mut writer,
        [
            "account_code",
            "account_name",
            "account_type",
            "opening_debit",
            "opening_credit",
            "period_debit",
            "period_credit",
            "closing_debit",
            "closing_credit",
        ]
        .map(str::to_string),
    )?;
    for row in rows {
        write_record(
            &mut writer,
            [
                row.account_code.clone(),
                row.account_name.clone(),
                row.account_type.clone(),
                amount(row.period_begin_debit),
                amount(row.period_begin_credit),
                amount(row.period_debit),
                amount(row.period_credit),
                amount(row.period_end_debit),
                amount(row.period_end_credit),
            ],
        )?;
    }
    finish(writer)
}

/// Balance sheet lines as CSV. Nesting is kept in the `level` column.
pub fn balance_sheet_csv(sheet: &BalanceSheet) -> Result<String, ServerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_record(
        &mut writer,
        ["section", "level", "account_code", "account_name", "amount"].map(str::to_string),
    )?;
    for (section, items, total) in [
        ("ASSETS", &sheet.assets, sheet.total_assets),
        ("LIABILITIES", &sheet.liabilities, sheet.total_liabilities),
        ("EQUITY", &sheet.equity, sheet.total_equity),
    ] {
        for item in items {
            write_balance_item(&mut writer, section, item, 0)?;
        }
        write_record(
            &mut writer,
            [
                section.to_string(),
                String::new(),
                String::new(),
                "TOTAL".to_string(),
                amount(total),
            ],
        )?;
    }
    finish(writer)
}

pub fn cash_flow_csv(statement: &CashFlowStatement) -> Result<String, ServerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_record(
        &mut writer,
        ["section", "item", "amount", "description"].map(str::to_string),
    )?;
    for (section, items, net) in [
        (
            "OPERATING",
            &statement.operating_activities,
            statement.net_operating_cash_flow,
        ),
        (
            "INVESTING",
            &statement.investing_activities,
            statement.net_investing_cash_flow,
        ),
        (
            "FINANCING",
            &statement.financing_activities,
            statement.net_financing_cash_flow,
        ),
    ] {
        for item in items {
            write_record(
                &mut writer,
                [
                    section.to_string(),
                    item.item_name.clone(),
                    amount(item.amount),
                    item.description.clone().unwrap_or_default(),
                ],
            )?;
        }
        write_record(
            &mut writer,
            [
                section.to_string(),
                "NET".to_string(),
                amount(net),
                String::new(),
            ],
        )?;
    }
    for (label, value) in [
        ("NET_INCREASE", statement.net_increase_in_cash),
        ("BEGINNING_CASH", statement.beginning_cash_balance),
        ("ENDING_CASH", statement.ending_cash_balance),
    ] {
        write_record(
            &mut writer,
            [
                "SUMMARY".to_string(),
                label.to_string(),
                amount(value),
                String::new(),
            ],
        )?;
    }
    finish(writer)
}

/// Writes CSV content to `path`, creating parent directories.
pub async fn write_csv(path: &Path, content: &str) -> Result<(), ServerError> {
    let path_str = path.to_string_lossy().to_string();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| WriteError::with_debug(&path_str, &e))?;
        }
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| WriteError::with_debug(&path_str, &e))
}

// Helpers.
// ---

fn amount(value: f64) -> String {
    format!("{value:.2}")
}

fn write_balance_item(
    writer: &mut csv::Writer<Vec<u8>>,
    section: &str,
    item: &BalanceSheetItem,
    level: usize,
) -> Result<(), ServerError> {
    write_record(
        writer,
        [
            section.to_string(),
            level.to_string(),
            item.account_code.clone(),
            item.account_name.clone(),
            amount(item.amount),
        ],
    )?;
    for child in &item.children {
        write_balance_item(writer, section, child, level + 1)?;
    }
    Ok(())
}

fn write_record<const N: usize>(
    writer: &mut csv::Writer<Vec<u8>>,
    record: [String; N],
) -> Result<(), ServerError> {
    writer
        .write_record(&record)
        .map_err(|e| WriteError::with_debug(CSV_TARGET, &e))
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ServerError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| WriteError::with_debug(CSV_TARGET, &e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| WriteError::with_debug(CSV_TARGET, &e))
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::{
        api::{accounting_api::AccountingApi, report_api::ReportApi},
        datasources::api_client::ApiClient,
    },
    entities::{BalanceSheet, CashFlowStatement, TrialBalanceReport},
};

#[async_trait]
pub trait ReportUsecase: Send + Sync {
    /// Trial balance for the period, together with the balance check as of
    /// its last day.
    async fn trial_balance(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<TrialBalanceReport, ServerError>;

    async fn balance_sheet(&self, date: Option<NaiveDate>) -> Result<BalanceSheet, ServerError>;

    async fn cash_flow(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<CashFlowStatement, ServerError>;
}

pub(crate) struct ReportUsecaseImpl {
    accounting_api: AccountingApi,
    report_api: ReportApi,
}

impl ReportUsecaseImpl {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self {
            accounting_api: AccountingApi::new(client.clone()),
            report_api: ReportApi::new(client),
        }
    }
}

#[async_trait]
impl ReportUsecase for ReportUsecaseImpl {
    async fn trial_balance(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<TrialBalanceReport, ServerError> {
        let (rows, balanced) = futures::try_join!(
            self.accounting_api.trial_balance(start_date, end_date),
            self.accounting_api.verify_balance(Some(end_date)),
        )?;
        if !balanced {
            tracing::warn!("Trial balance {start_date}..{end_date} does not balance.");
        }
        Ok(TrialBalanceReport {
            start_date,
            end_date,
            rows,
            balanced,
        })
    }

    async fn balance_sheet(&self, date: Option<NaiveDate>) -> Result<BalanceSheet, ServerError> {
        self.report_api.balance_sheet(date).await
    }

    async fn cash_flow(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<CashFlowStatement, ServerError> {
        self.report_api.cash_flow(start_date, end_date).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{json_response, ok_envelope, Harness};

    const ROWS: &str = r#"[{"accountId":1,"accountCode":"1001","accountName":"Cash",
        "accountType":"ASSET","periodBeginDebit":100.0,"periodBeginCredit":0.0,
        "periodDebit":50.0,"periodCredit":30.0,"periodEndDebit":120.0,"periodEndCredit":0.0}]"#;

    fn period() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_trial_balance_combines_rows_and_check() {
        let harness = Harness::new(vec![ok_envelope(ROWS), ok_envelope("true")]);
        let usecase = ReportUsecaseImpl::new(harness.client.clone());
        let (start, end) = period();

        let report = usecase.trial_balance(start, end).await.unwrap();

        assert!(report.balanced);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].ending_balance(), 120.0);
        let requests = harness.transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[1].url.ends_with("/finance/accounting/verifyBalance"));
        assert_eq!(
            requests[1].query,
            vec![("date".to_string(), "2024-01-31".to_string())]
        );
    }

    #[tokio::test]
    async fn test_trial_balance_fails_when_either_call_fails() {
        let harness = Harness::new(vec![
            ok_envelope(ROWS),
            json_response(200, r#"{"code":500,"msg":"ledger locked"}"#),
        ]);
        let usecase = ReportUsecaseImpl::new(harness.client.clone());
        let (start, end) = period();

        assert!(usecase.trial_balance(start, end).await.is_err());
    }
}

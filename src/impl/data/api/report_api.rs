use std::sync::Arc;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::api_client::{ApiClient, ApiRequest, BinaryResponse},
    entities::{BalanceSheet, CashFlowStatement},
};

pub struct ReportApi {
    client: Arc<ApiClient>,
}

impl ReportApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn balance_sheet(&self, date: Option<NaiveDate>) -> Result<BalanceSheet, ServerError> {
        self.client
            .call_data(ApiRequest::get("/finance/report/balanceSheet").query_date_opt("date", date))
            .await
    }

    pub async fn cash_flow(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<CashFlowStatement, ServerError> {
        self.client
            .call_data(
                ApiRequest::get("/finance/report/cashFlow")
                    .query_date("startDate", start_date)
                    .query_date("endDate", end_date),
            )
            .await
    }

    // Excel exports.
    // ---

    pub async fn export_balance_sheet(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<BinaryResponse, ServerError> {
        self.client
            .download(
                ApiRequest::get("/finance/report/balance-sheet/export").query_date_opt("date", date),
            )
            .await
    }

    pub async fn export_trial_balance(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<BinaryResponse, ServerError> {
        self.client
            .download(
                ApiRequest::get("/finance/report/trial-balance/export")
                    .query_date("startDate", start_date)
                    .query_date("endDate", end_date),
            )
            .await
    }

    /// Served outside the `/finance` prefix.
    pub async fn export_cash_flow(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<BinaryResponse, ServerError> {
        self.client
            .download(
                ApiRequest::get("/reports/cash-flow/export")
                    .query_date("startDate", start_date)
                    .query_date("endDate", end_date),
            )
            .await
    }
}

use std::sync::Arc;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::api_client::{ApiClient, ApiRequest},
    entities::{AccountBalance, TrialBalanceRow},
};

pub struct AccountingApi {
    client: Arc<ApiClient>,
}

impl AccountingApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Balance of one account as of `date` (today when absent).
    pub async fn balance(
        &self,
        account_id: i64,
        date: Option<NaiveDate>,
    ) -> Result<AccountBalance, ServerError> {
        self.client
            .call_data(
                ApiRequest::get(format!("/finance/accounting/balance/{account_id}"))
                    .query_date_opt("date", date),
            )
            .await
    }

    pub async fn all_balances(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AccountBalance>, ServerError> {
        self.client
            .call_data(ApiRequest::get("/finance/accounting/balance/all").query_date_opt("date", date))
            .await
    }

    pub async fn trial_balance(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<TrialBalanceRow>, ServerError> {
        self.client
            .call_data(
                ApiRequest::get("/finance/accounting/trialBalance")
                    .query_date("startDate", start_date)
                    .query_date("endDate", end_date),
            )
            .await
    }

    /// Whether total debits equal total credits as of `date`.
    pub async fn verify_balance(&self, date: Option<NaiveDate>) -> Result<bool, ServerError> {
        self.client
            .call_data(
                ApiRequest::get("/finance/accounting/verifyBalance").query_date_opt("date", date),
            )
            .await
    }
}

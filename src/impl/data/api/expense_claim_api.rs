use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    data::datasources::api_client::{ApiClient, ApiRequest},
    entities::{
        BizExpenseClaim, ClaimApproval, ClaimListQuery, ExpenseClaim, FinTransaction, PageResult,
    },
};

/// Approval-workflow expense claims.
pub struct ExpenseClaimApi {
    client: Arc<ApiClient>,
}

impl ExpenseClaimApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, claim: &ExpenseClaim) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post("/finance/expense-claim/submit").json(claim)?)
            .await
    }

    pub async fn approve(&self, claim_id: i64, approval: &ClaimApproval) -> Result<(), ServerError> {
        self.client
            .call_unit(
                ApiRequest::post(format!("/finance/expense-claim/approve/{claim_id}"))
                    .query("approverId", approval.approver_id)
                    .query("approved", approval.approved)
                    .query_opt("comment", approval.comment.as_deref()),
            )
            .await
    }

    pub async fn post(&self, claim_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post(format!(
                "/finance/expense-claim/post/{claim_id}"
            )))
            .await
    }
}

/// Expense claims posted directly as vouchers.
pub struct BizExpenseClaimApi {
    client: Arc<ApiClient>,
}

impl BizExpenseClaimApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        query: &ClaimListQuery,
    ) -> Result<PageResult<BizExpenseClaim>, ServerError> {
        self.client
            .call_data(ApiRequest::post("/finance/biz-expense-claim/list").json(query)?)
            .await
    }

    pub async fn by_id(&self, claim_id: i64) -> Result<BizExpenseClaim, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!(
                "/finance/biz-expense-claim/{claim_id}"
            )))
            .await
    }

    /// Saves a draft.
    pub async fn save(&self, claim: &BizExpenseClaim) -> Result<BizExpenseClaim, ServerError> {
        log_claim("save", claim);
        self.client
            .call_data(ApiRequest::post("/finance/biz-expense-claim/save").json(claim)?)
            .await
    }

    pub async fn update(&self, claim: &BizExpenseClaim) -> Result<BizExpenseClaim, ServerError> {
        log_claim("update", claim);
        self.client
            .call_data(ApiRequest::put("/finance/biz-expense-claim/update").json(claim)?)
            .await
    }

    /// Posts a saved claim and returns the generated voucher.
    pub async fn post(&self, claim_id: i64) -> Result<FinTransaction, ServerError> {
        self.client
            .call_data(ApiRequest::post(format!(
                "/finance/biz-expense-claim/post/{claim_id}"
            )))
            .await
    }

    pub async fn save_and_post(
        &self,
        claim: &BizExpenseClaim,
    ) -> Result<FinTransaction, ServerError> {
        log_claim("save-and-post", claim);
        self.client
            .call_data(ApiRequest::post("/finance/biz-expense-claim/save-and-post").json(claim)?)
            .await
    }

    pub async fn delete(&self, claim_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::delete(format!(
                "/finance/biz-expense-claim/delete/{claim_id}"
            )))
            .await
    }

    /// The voucher a posted claim produced.
    pub async fn voucher(&self, voucher_id: i64) -> Result<FinTransaction, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!("/finance/voucher/{voucher_id}")))
            .await
    }
}

fn log_claim(action: &str, claim: &BizExpenseClaim) {
    tracing::debug!(
        action,
        claim_date = %claim.claim_date,
        applicant_id = claim.applicant_id,
        credit_account_id = claim.credit_account_id,
        details = claim.details.len(),
        detail_total = claim.detail_total(),
        "Sending expense claim."
    );
}

use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    data::datasources::api_client::{ApiClient, ApiRequest},
    entities::{FinTransaction, PageResult, VoucherQuery},
};

pub struct VoucherApi {
    client: Arc<ApiClient>,
}

impl VoucherApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn add(&self, voucher: &FinTransaction) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post("/finance/voucher/add").json(voucher)?)
            .await
    }

    pub async fn update(&self, voucher: &FinTransaction) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::put("/finance/voucher/update").json(voucher)?)
            .await
    }

    pub async fn delete(&self, trans_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::delete(format!(
                "/finance/voucher/delete/{trans_id}"
            )))
            .await
    }

    pub async fn audit(&self, trans_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post(format!("/finance/voucher/audit/{trans_id}")))
            .await
    }

    pub async fn query(
        &self,
        query: &VoucherQuery,
    ) -> Result<PageResult<FinTransaction>, ServerError> {
        self.client
            .call_data(ApiRequest::post("/finance/voucher/query").json(query)?)
            .await
    }

    pub async fn by_id(&self, trans_id: i64) -> Result<FinTransaction, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!("/finance/voucher/{trans_id}")))
            .await
    }

    /// Next free voucher number.
    pub async fn generate_no(&self) -> Result<String, ServerError> {
        self.client
            .call_data(ApiRequest::get("/finance/voucher/generateNo"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::RequestBody,
        entities::FinSplit,
        test_support::{ok_envelope, Harness},
    };
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_add_sends_voucher_as_json() {
        let harness = Harness::new(vec![ok_envelope(r#""ok""#)]);
        let api = VoucherApi::new(harness.client.clone());
        let voucher = FinTransaction::draft(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "Office rent",
        )
        .with_split(FinSplit::debit(6602, 1000.0))
        .with_split(FinSplit::credit(1002, 1000.0));

        api.add(&voucher).await.unwrap();

        assert_eq!(harness.last_path(), "/finance/voucher/add");
        let RequestBody::Json(body) = harness.transport.last_request().body else {
            panic!("expected a JSON body");
        };
        assert_eq!(body["transDate"], "2024-03-01");
        assert_eq!(body["splits"][0]["direction"], "DEBIT");
        assert_eq!(body["splits"][1]["direction"], "CREDIT");
    }

    #[tokio::test]
    async fn test_query_omits_absent_filters() {
        let harness = Harness::new(vec![ok_envelope(
            r#"{"records":[],"total":0,"size":10,"current":1,"pages":0}"#,
        )]);
        let api = VoucherApi::new(harness.client.clone());

        let page = api
            .query(&VoucherQuery {
                voucher_no: Some("V-001".to_string()),
                page_num: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 0);
        let RequestBody::Json(body) = harness.transport.last_request().body else {
            panic!("expected a JSON body");
        };
        assert_eq!(body, serde_json::json!({"voucherNo": "V-001", "pageNum": 1}));
    }

    #[tokio::test]
    async fn test_id_paths() {
        let harness = Harness::new(vec![ok_envelope("null"), ok_envelope(r#""V-002""#)]);
        let api = VoucherApi::new(harness.client.clone());

        api.delete(7).await.unwrap();
        assert_eq!(harness.last_path(), "/finance/voucher/delete/7");
        assert_eq!(
            harness.transport.last_request().method,
            reqwest::Method::DELETE
        );

        assert_eq!(api.generate_no().await.unwrap(), "V-002");
        assert_eq!(harness.last_path(), "/finance/voucher/generateNo");
    }
}

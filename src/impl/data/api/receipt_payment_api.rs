use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    data::datasources::api_client::{ApiClient, ApiRequest},
    entities::{BizReceiptPayment, PageResult, ReceiptPaymentQuery},
};

pub struct ReceiptPaymentApi {
    client: Arc<ApiClient>,
}

impl ReceiptPaymentApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn save(&self, slip: &BizReceiptPayment) -> Result<BizReceiptPayment, ServerError> {
        self.client
            .call_data(ApiRequest::post("/finance/biz-receipt-payment/save").json(slip)?)
            .await
    }

    pub async fn save_and_post(
        &self,
        slip: &BizReceiptPayment,
    ) -> Result<BizReceiptPayment, ServerError> {
        self.client
            .call_data(ApiRequest::post("/finance/biz-receipt-payment/save-and-post").json(slip)?)
            .await
    }

    pub async fn list(
        &self,
        query: &ReceiptPaymentQuery,
    ) -> Result<PageResult<BizReceiptPayment>, ServerError> {
        self.client
            .call_data(
                ApiRequest::get("/finance/biz-receipt-payment/list")
                    .query_opt("pageNum", query.page_num)
                    .query_opt("pageSize", query.page_size)
                    .query_opt("type", query.kind.as_deref())
                    .query_opt("status", query.status),
            )
            .await
    }

    pub async fn by_id(&self, id: i64) -> Result<BizReceiptPayment, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!("/finance/biz-receipt-payment/{id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_envelope, Harness};

    #[tokio::test]
    async fn test_list_sends_present_filters_only() {
        let harness = Harness::new(vec![ok_envelope(
            r#"{"records":[{"id":1,"type":"RECEIPT","amount":20.0,"date":"2024-02-02"}],
                "total":1,"size":10,"current":1,"pages":1}"#,
        )]);
        let api = ReceiptPaymentApi::new(harness.client.clone());

        let page = api
            .list(&ReceiptPaymentQuery {
                kind: Some("RECEIPT".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.records[0].kind, "RECEIPT");
        assert!(!page.has_next());
        assert_eq!(
            harness.transport.last_request().query,
            vec![("type".to_string(), "RECEIPT".to_string())]
        );
    }
}

use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    data::datasources::api_client::{ApiClient, ApiRequest},
    entities::{PaymentRequest, PaymentResult, PaymentType},
};

pub struct PaymentApi {
    client: Arc<ApiClient>,
}

impl PaymentApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Records money received from a customer and allocates it to the
    /// customer's open invoices.
    pub async fn customer_payment(
        &self,
        owner_id: i64,
        amount: f64,
        account_id: i64,
    ) -> Result<PaymentResult, ServerError> {
        self.client
            .call_data(
                ApiRequest::post("/finance/payment/customer")
                    .query("ownerId", owner_id)
                    .query("amount", amount)
                    .query("accountId", account_id),
            )
            .await
    }

    /// Records money paid to a vendor and allocates it to the vendor's open
    /// bills.
    pub async fn vendor_payment(
        &self,
        owner_id: i64,
        amount: f64,
        account_id: i64,
    ) -> Result<PaymentResult, ServerError> {
        self.client
            .call_data(
                ApiRequest::post("/finance/payment/vendor")
                    .query("ownerId", owner_id)
                    .query("amount", amount)
                    .query("accountId", account_id),
            )
            .await
    }

    pub async fn process_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResult, ServerError> {
        match request.payment_type {
            PaymentType::Receipt => {
                self.customer_payment(request.owner_id, request.amount, request.account_id)
                    .await
            }
            PaymentType::Payment => {
                self.vendor_payment(request.owner_id, request.amount, request.account_id)
                    .await
            }
        }
    }

    pub async fn post(&self, payment_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post(format!("/finance/payment/post/{payment_id}")))
            .await
    }

    pub async fn unpost(&self, payment_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post(format!(
                "/finance/payment/unpost/{payment_id}"
            )))
            .await
    }

    /// Open amount still owed by or to the owner.
    pub async fn unpaid_amount(&self, owner_id: i64) -> Result<f64, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!("/finance/payment/unpaid/{owner_id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_envelope, Harness};

    const RESULT: &str = r#"{"payment":{"paymentId":9,"amount":500.0},
        "allocations":[{"documentNo":"INV-1","amount":500.0,"status":"PAID","remainingAmount":0.0}]}"#;

    #[tokio::test]
    async fn test_receipt_routes_to_customer_endpoint() {
        let harness = Harness::new(vec![ok_envelope(RESULT)]);
        let api = PaymentApi::new(harness.client.clone());

        let result = api
            .process_payment(&PaymentRequest {
                owner_id: 3,
                amount: 500.0,
                account_id: 1002,
                payment_type: PaymentType::Receipt,
            })
            .await
            .unwrap();

        assert_eq!(result.payment.payment_id, Some(9));
        assert_eq!(result.allocations[0].status, "PAID");
        assert_eq!(harness.last_path(), "/finance/payment/customer");
        assert_eq!(
            harness.transport.last_request().query,
            vec![
                ("ownerId".to_string(), "3".to_string()),
                ("amount".to_string(), "500".to_string()),
                ("accountId".to_string(), "1002".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_payment_routes_to_vendor_endpoint() {
        let harness = Harness::new(vec![ok_envelope(RESULT)]);
        let api = PaymentApi::new(harness.client.clone());

        api.process_payment(&PaymentRequest {
            owner_id: 4,
            amount: 120.5,
            account_id: 1002,
            payment_type: PaymentType::Payment,
        })
        .await
        .unwrap();

        assert_eq!(harness.last_path(), "/finance/payment/vendor");
        assert_eq!(
            harness.transport.last_request().query[1],
            ("amount".to_string(), "120.5".to_string())
        );
    }
}

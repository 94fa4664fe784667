use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    data::datasources::api_client::{ApiClient, ApiRequest},
    entities::{Bill, Invoice, Owner, OwnerType, PageResult, Partner},
};

pub const DEFAULT_PAGE_NUM: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Master data (owners and partners), invoices and bills.
pub struct DocumentApi {
    client: Arc<ApiClient>,
}

impl DocumentApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    // Owners.
    // ---

    pub async fn owners(&self, owner_type: Option<OwnerType>) -> Result<Vec<Owner>, ServerError> {
        self.client
            .call_data(
                ApiRequest::get("/finance/document/owner/list")
                    .query_opt("ownerType", owner_type.map(|t| t.as_str())),
            )
            .await
    }

    /// Owners normalised for selection lists.
    pub async fn partners(&self, category: Option<OwnerType>) -> Result<Vec<Partner>, ServerError> {
        self.client
            .call_data(
                ApiRequest::get("/finance/owner/list")
                    .query_opt("category", category.map(|t| t.as_str())),
            )
            .await
    }

    pub async fn create_owner(&self, owner: &Owner) -> Result<Owner, ServerError> {
        self.client
            .call_data(ApiRequest::post("/finance/document/owner/create").json(owner)?)
            .await
    }

    pub async fn update_owner(&self, owner: &Owner) -> Result<Owner, ServerError> {
        self.client
            .call_data(ApiRequest::put("/finance/document/owner/update").json(owner)?)
            .await
    }

    pub async fn delete_owner(&self, owner_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::delete(format!(
                "/finance/document/owner/delete/{owner_id}"
            )))
            .await
    }

    pub async fn owner(&self, owner_id: i64) -> Result<Owner, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!("/finance/document/owner/{owner_id}")))
            .await
    }

    // Invoices.
    // ---

    pub async fn invoices(
        &self,
        page_num: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<PageResult<Invoice>, ServerError> {
        self.client
            .call_data(
                ApiRequest::get("/finance/document/invoice/list")
                    .query("pageNum", page_num.unwrap_or(DEFAULT_PAGE_NUM))
                    .query("pageSize", page_size.unwrap_or(DEFAULT_PAGE_SIZE)),
            )
            .await
    }

    pub async fn create_invoice(&self, invoice: &Invoice) -> Result<Invoice, ServerError> {
        self.client
            .call_data(ApiRequest::post("/finance/document/invoice/create").json(invoice)?)
            .await
    }

    pub async fn update_invoice(&self, invoice: &Invoice) -> Result<Invoice, ServerError> {
        self.client
            .call_data(ApiRequest::put("/finance/document/invoice/update").json(invoice)?)
            .await
    }

    pub async fn delete_invoice(&self, invoice_id: i64) -> Result<(), ServerError> {
        self.document_action_delete("invoice", invoice_id).await
    }

    pub async fn invoice(&self, invoice_id: i64) -> Result<Invoice, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!(
                "/finance/document/invoice/{invoice_id}"
            )))
            .await
    }

    pub async fn validate_invoice(&self, invoice_id: i64) -> Result<(), ServerError> {
        self.document_action("invoice", "validate", invoice_id).await
    }

    pub async fn post_invoice(&self, invoice_id: i64) -> Result<(), ServerError> {
        self.document_action("invoice", "post", invoice_id).await
    }

    pub async fn cancel_invoice(&self, invoice_id: i64) -> Result<(), ServerError> {
        self.document_action("invoice", "cancel", invoice_id).await
    }

    pub async fn unpaid_invoices(&self, customer_id: i64) -> Result<Vec<Invoice>, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!(
                "/finance/document/invoice/unpaid/{customer_id}"
            )))
            .await
    }

    /// Reverses the ledger posting of an invoice.
    pub async fn unpost_invoice(&self, invoice_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post(format!(
                "/finance/invoice/unpost/{invoice_id}"
            )))
            .await
    }

    pub async fn mark_invoice_sent(
        &self,
        invoice_id: i64,
        tracking_no: &str,
    ) -> Result<(), ServerError> {
        self.client
            .call_unit(
                ApiRequest::post(format!("/finance/invoice/mark-as-sent/{invoice_id}"))
                    .query("trackingNo", tracking_no),
            )
            .await
    }

    // Bills.
    // ---

    pub async fn bills(
        &self,
        page_num: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<PageResult<Bill>, ServerError> {
        self.client
            .call_data(
                ApiRequest::get("/finance/document/bill/list")
                    .query("pageNum", page_num.unwrap_or(DEFAULT_PAGE_NUM))
                    .query("pageSize", page_size.unwrap_or(DEFAULT_PAGE_SIZE)),
            )
            .await
    }

    pub async fn create_bill(&self, bill: &Bill) -> Result<Bill, ServerError> {
        self.client
            .call_data(ApiRequest::post("/finance/document/bill/create").json(bill)?)
            .await
    }

    pub async fn update_bill(&self, bill: &Bill) -> Result<Bill, ServerError> {
        self.client
            .call_data(ApiRequest::put("/finance/document/bill/update").json(bill)?)
            .await
    }

    pub async fn delete_bill(&self, bill_id: i64) -> Result<(), ServerError> {
        self.document_action_delete("bill", bill_id).await
    }

    pub async fn bill(&self, bill_id: i64) -> Result<Bill, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!("/finance/document/bill/{bill_id}")))
            .await
    }

    pub async fn validate_bill(&self, bill_id: i64) -> Result<(), ServerError> {
        self.document_action("bill", "validate", bill_id).await
    }

    pub async fn post_bill(&self, bill_id: i64) -> Result<(), ServerError> {
        self.document_action("bill", "post", bill_id).await
    }

    pub async fn cancel_bill(&self, bill_id: i64) -> Result<(), ServerError> {
        self.document_action("bill", "cancel", bill_id).await
    }

    pub async fn unpaid_bills(&self, vendor_id: i64) -> Result<Vec<Bill>, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!(
                "/finance/document/bill/unpaid/{vendor_id}"
            )))
            .await
    }

    pub async fn unpost_bill(&self, bill_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post(format!("/finance/bill/unpost/{bill_id}")))
            .await
    }

    // Credit notes.
    // ---

    pub async fn post_credit_note(&self, credit_note_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post(format!(
                "/finance/creditnote/post/{credit_note_id}"
            )))
            .await
    }

    pub async fn unpost_credit_note(&self, credit_note_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post(format!(
                "/finance/creditnote/unpost/{credit_note_id}"
            )))
            .await
    }

    // Helpers.
    // ---

    async fn document_action(
        &self,
        document: &str,
        action: &str,
        id: i64,
    ) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post(format!(
                "/finance/document/{document}/{action}/{id}"
            )))
            .await
    }

    async fn document_action_delete(&self, document: &str, id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::delete(format!(
                "/finance/document/{document}/delete/{id}"
            )))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_envelope, Harness};

    #[tokio::test]
    async fn test_invoice_list_defaults_paging() {
        let harness = Harness::new(vec![ok_envelope(
            r#"{"records":[],"total":0,"size":10,"current":1}"#,
        )]);
        let api = DocumentApi::new(harness.client.clone());

        api.invoices(None, None).await.unwrap();

        assert_eq!(harness.last_path(), "/finance/document/invoice/list");
        assert_eq!(
            harness.transport.last_request().query,
            vec![
                ("pageNum".to_string(), "1".to_string()),
                ("pageSize".to_string(), "10".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_owner_filter_is_optional() {
        let harness = Harness::new(vec![ok_envelope("[]"), ok_envelope("[]")]);
        let api = DocumentApi::new(harness.client.clone());

        api.owners(None).await.unwrap();
        assert!(harness.transport.last_request().query.is_empty());

        api.partners(Some(OwnerType::Vendor)).await.unwrap();
        assert_eq!(harness.last_path(), "/finance/owner/list");
        assert_eq!(
            harness.transport.last_request().query,
            vec![("category".to_string(), "VENDOR".to_string())]
        );
    }

    #[tokio::test]
    async fn test_lifecycle_paths() {
        let harness = Harness::new((0..5).map(|_| ok_envelope("null")).collect());
        let api = DocumentApi::new(harness.client.clone());

        api.validate_bill(4).await.unwrap();
        assert_eq!(harness.last_path(), "/finance/document/bill/validate/4");
        api.post_invoice(5).await.unwrap();
        assert_eq!(harness.last_path(), "/finance/document/invoice/post/5");
        api.delete_invoice(5).await.unwrap();
        assert_eq!(harness.last_path(), "/finance/document/invoice/delete/5");
        api.unpost_credit_note(6).await.unwrap();
        assert_eq!(harness.last_path(), "/finance/creditnote/unpost/6");
        api.mark_invoice_sent(5, "SF123").await.unwrap();
        assert_eq!(harness.last_path(), "/finance/invoice/mark-as-sent/5");
        assert_eq!(
            harness.transport.last_request().query,
            vec![("trackingNo".to_string(), "SF123".to_string())]
        );
    }
}

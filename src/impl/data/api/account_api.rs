use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    data::datasources::api_client::{ApiClient, ApiRequest},
    entities::{AccountNode, FinAccount},
};

pub struct AccountApi {
    client: Arc<ApiClient>,
}

impl AccountApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Full chart of accounts, as root nodes with nested children.
    pub async fn tree(&self) -> Result<Vec<AccountNode>, ServerError> {
        self.client
            .call_data(ApiRequest::get("/finance/account/tree"))
            .await
    }

    pub async fn children(&self, parent_id: i64) -> Result<Vec<FinAccount>, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!(
                "/finance/account/children/{parent_id}"
            )))
            .await
    }

    pub async fn add(&self, account: &FinAccount) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post("/finance/account/add").json(account)?)
            .await
    }

    pub async fn update(&self, account: &FinAccount) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::put("/finance/account/update").json(account)?)
            .await
    }

    pub async fn delete(&self, account_id: i64) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::delete(format!(
                "/finance/account/delete/{account_id}"
            )))
            .await
    }

    pub async fn by_id(&self, account_id: i64) -> Result<FinAccount, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!("/finance/account/{account_id}")))
            .await
    }

    pub async fn is_leaf(&self, account_id: i64) -> Result<bool, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!(
                "/finance/account/{account_id}/isLeaf"
            )))
            .await
    }

    /// Accounts that can carry postings.
    pub async fn leaves(&self) -> Result<Vec<AccountNode>, ServerError> {
        self.client
            .call_data(ApiRequest::get("/finance/account/leaf"))
            .await
    }

    pub async fn path(&self, account_id: i64) -> Result<String, ServerError> {
        self.client
            .call_data(ApiRequest::get(format!("/finance/account/{account_id}/path")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_envelope, Harness};

    #[tokio::test]
    async fn test_tree_parses_nested_children() {
        let harness = Harness::new(vec![ok_envelope(
            r#"[{"accountId":1,"accountCode":"1","accountName":"Assets","accountType":"ASSET",
                "children":[{"accountId":2,"accountCode":"1001","accountName":"Cash",
                "accountType":"ASSET","parentId":1,"isLeaf":true}]}]"#,
        )]);
        let api = AccountApi::new(harness.client.clone());

        let tree = api.tree().await.unwrap();

        assert_eq!(harness.last_path(), "/finance/account/tree");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children[0].account_name, "Cash");
        assert_eq!(tree[0].children[0].is_leaf, Some(true));
    }

    #[tokio::test]
    async fn test_is_leaf_and_path() {
        let harness = Harness::new(vec![
            ok_envelope("false"),
            ok_envelope(r#""Assets/Current Assets/Cash""#),
        ]);
        let api = AccountApi::new(harness.client.clone());

        assert!(!api.is_leaf(3).await.unwrap());
        assert_eq!(harness.last_path(), "/finance/account/3/isLeaf");
        assert_eq!(api.path(3).await.unwrap(), "Assets/Current Assets/Cash");
        assert_eq!(harness.last_path(), "/finance/account/3/path");
    }
}

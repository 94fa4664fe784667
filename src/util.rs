use std::sync::Arc;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    config::ClientConfig,
    data::{
        api::{
            account_api::AccountApi,
            accounting_api::AccountingApi,
            document_api::DocumentApi,
            expense_claim_api::{BizExpenseClaimApi, ExpenseClaimApi},
            payment_api::PaymentApi,
            receipt_payment_api::ReceiptPaymentApi,
            report_api::ReportApi,
            voucher_api::VoucherApi,
        },
        datasources::{
            api_client::ApiClient,
            http_transport::{HttpTransport, ReqwestTransport},
            storage_datasource::{FileStorage, KeyValueStorage, MemoryStorage},
        },
    },
    domain::{
        logic::{download::DownloadOutcome, session_store::SessionStore},
        usecases::{
            auth_usecase::{AuthUsecase as _, AuthUsecaseImpl},
            export_usecase::{ExportUsecase as _, ExportUsecaseImpl},
            navigation_usecase::Workbench,
            report_usecase::{ReportUsecase as _, ReportUsecaseImpl},
        },
    },
    entities::{
        BalanceSheet, CashFlowStatement, LoginResponse, Navigator, Notifier, TrialBalanceReport,
        UserInfo,
    },
    ext::standard_handlers::{HistoryNavigator, TracingNotifier},
    presentation::report_printer::ReportPrinter,
};

/// Everything a shell needs to talk to the finance backend, wired from one
/// configuration.
pub struct FinanceClient {
    client: Arc<ApiClient>,
    currency: Currency,
    auth_usecase: AuthUsecaseImpl,
    report_usecase: ReportUsecaseImpl,
    export_usecase: ExportUsecaseImpl,
}

impl FinanceClient {
    /// Client with the reqwest transport, toasts routed to `tracing` and an
    /// in-memory navigator.
    pub fn new(config: ClientConfig) -> Result<Self, ServerError> {
        Self::with_handlers(
            config,
            Arc::new(ReqwestTransport::new()),
            Arc::new(TracingNotifier),
            Arc::new(HistoryNavigator::default()),
        )
    }

    pub fn with_handlers(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ServerError> {
        let currency = config.currency()?;
        let storage: Arc<dyn KeyValueStorage> = match &config.storage_path {
            Some(path) => Arc::new(FileStorage::new(path)),
            None => Arc::new(MemoryStorage::new()),
        };
        let session = Arc::new(SessionStore::new(storage));
        let client = Arc::new(ApiClient::new(
            transport,
            session,
            notifier,
            navigator,
            &config.base_api,
            config.timeout(),
        )?);
        tracing::debug!(base_api = %config.base_api, "Finance client ready.");

        Ok(Self {
            auth_usecase: AuthUsecaseImpl::new(client.clone()),
            report_usecase: ReportUsecaseImpl::new(client.clone()),
            export_usecase: ExportUsecaseImpl::new(client.clone(), config.download_dir),
            client,
            currency,
        })
    }

    pub fn api_client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.client.session()
    }

    /// A fresh navigation state (tabs and page context) for one window.
    pub fn workbench(&self) -> Workbench {
        Workbench::new(self.session().clone(), self.client.navigator().clone())
    }

    pub fn printer(&self) -> ReportPrinter {
        ReportPrinter::new(self.currency)
    }

    // API modules.
    // ---

    pub fn vouchers(&self) -> VoucherApi {
        VoucherApi::new(self.client.clone())
    }

    pub fn accounts(&self) -> AccountApi {
        AccountApi::new(self.client.clone())
    }

    pub fn accounting(&self) -> AccountingApi {
        AccountingApi::new(self.client.clone())
    }

    pub fn reports(&self) -> ReportApi {
        ReportApi::new(self.client.clone())
    }

    pub fn documents(&self) -> DocumentApi {
        DocumentApi::new(self.client.clone())
    }

    pub fn payments(&self) -> PaymentApi {
        PaymentApi::new(self.client.clone())
    }

    pub fn expense_claims(&self) -> ExpenseClaimApi {
        ExpenseClaimApi::new(self.client.clone())
    }

    pub fn biz_expense_claims(&self) -> BizExpenseClaimApi {
        BizExpenseClaimApi::new(self.client.clone())
    }

    pub fn receipt_payments(&self) -> ReceiptPaymentApi {
        ReceiptPaymentApi::new(self.client.clone())
    }

    // Use cases.
    // ---

    pub async fn login(
        &self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> Result<LoginResponse, ServerError> {
        self.auth_usecase.login(username, password, remember).await
    }

    pub async fn user_info(&self) -> Result<UserInfo, ServerError> {
        self.auth_usecase.user_info().await
    }

    /// Local logout, optionally notifying the backend first.
    pub async fn logout(&self, call_api: bool) -> Result<(), ServerError> {
        self.auth_usecase.logout(call_api).await
    }

    pub async fn trial_balance(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<TrialBalanceReport, ServerError> {
        self.report_usecase
            .trial_balance(start_date, end_date)
            .await
    }

    pub async fn balance_sheet(&self, date: Option<NaiveDate>) -> Result<BalanceSheet, ServerError> {
        self.report_usecase.balance_sheet(date).await
    }

    pub async fn cash_flow(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<CashFlowStatement, ServerError> {
        self.report_usecase.cash_flow(start_date, end_date).await
    }

    pub async fn export_balance_sheet_excel(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<DownloadOutcome, ServerError> {
        self.export_usecase.export_balance_sheet_excel(date).await
    }

    pub async fn export_trial_balance_excel(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<DownloadOutcome, ServerError> {
        self.export_usecase
            .export_trial_balance_excel(start_date, end_date)
            .await
    }

    pub async fn export_cash_flow_excel(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<DownloadOutcome, ServerError> {
        self.export_usecase
            .export_cash_flow_excel(start_date, end_date)
            .await
    }

    pub async fn export_trial_balance_csv(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<std::path::PathBuf, ServerError> {
        self.export_usecase
            .export_trial_balance_csv(start_date, end_date)
            .await
    }

    pub async fn export_balance_sheet_csv(
        &self,
        date: NaiveDate,
    ) -> Result<std::path::PathBuf, ServerError> {
        self.export_usecase.export_balance_sheet_csv(date).await
    }

    pub async fn export_cash_flow_csv(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<std::path::PathBuf, ServerError> {
        self.export_usecase
            .export_cash_flow_csv(start_date, end_date)
            .await
    }
}

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::{api::report_api::ReportApi, datasources::api_client::ApiClient},
    domain::{
        logic::download::{DownloadOutcome, ExcelDownloader},
        usecases::report_usecase::{ReportUsecase, ReportUsecaseImpl},
    },
    presentation::csv_export::{balance_sheet_csv, cash_flow_csv, trial_balance_csv, write_csv},
};

#[async_trait]
pub trait ExportUsecase: Send + Sync {
    // Server-rendered Excel workbooks.
    async fn export_balance_sheet_excel(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<DownloadOutcome, ServerError>;
    async fn export_trial_balance_excel(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<DownloadOutcome, ServerError>;
    async fn export_cash_flow_excel(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<DownloadOutcome, ServerError>;

    // Locally rendered CSV. Returns the written path.
    async fn export_trial_balance_csv(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PathBuf, ServerError>;
    async fn export_balance_sheet_csv(&self, date: NaiveDate) -> Result<PathBuf, ServerError>;
    async fn export_cash_flow_csv(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PathBuf, ServerError>;
}

pub(crate) struct ExportUsecaseImpl {
    report_api: ReportApi,
    reports: ReportUsecaseImpl,
    downloader: ExcelDownloader,
}

impl ExportUsecaseImpl {
    pub(crate) fn new(client: Arc<ApiClient>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            downloader: ExcelDownloader::new(client.notifier().clone(), download_dir),
            reports: ReportUsecaseImpl::new(client.clone()),
            report_api: ReportApi::new(client),
        }
    }

    async fn save_csv(&self, stem: &str, content: String) -> Result<PathBuf, ServerError> {
        let path = self.downloader.target_dir().join(format!("{stem}.csv"));
        write_csv(&path, &content).await?;
        tracing::info!("Saved CSV export to {}.", path.display());
        Ok(path)
    }
}

#[async_trait]
impl ExportUsecase for ExportUsecaseImpl {
    async fn export_balance_sheet_excel(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<DownloadOutcome, ServerError> {
        let file = self.report_api.export_balance_sheet(date).await?;
        let stem = match date {
            Some(date) => format!("balance_sheet_{date}"),
            None => "balance_sheet".to_string(),
        };
        self.downloader.download_excel(&file, &stem).await
    }

    async fn export_trial_balance_excel(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<DownloadOutcome, ServerError> {
        let file = self
            .report_api
            .export_trial_balance(start_date, end_date)
            .await?;
        self.downloader
            .download_excel(&file, &format!("trial_balance_{start_date}_{end_date}"))
            .await
    }

    async fn export_cash_flow_excel(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<DownloadOutcome, ServerError> {
        let file = self.report_api.export_cash_flow(start_date, end_date).await?;
        self.downloader
            .download_excel(&file, &format!("cash_flow_{start_date}_{end_date}"))
            .await
    }

    async fn export_trial_balance_csv(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PathBuf, ServerError> {
        let report = self.reports.trial_balance(start_date, end_date).await?;
        let content = trial_balance_csv(&report.rows)?;
        self.save_csv(&format!("trial_balance_{start_date}_{end_date}"), content)
            .await
    }

    async fn export_balance_sheet_csv(&self, date: NaiveDate) -> Result<PathBuf, ServerError> {
        let sheet = self.reports.balance_sheet(Some(date)).await?;
        let content = balance_sheet_csv(&sheet)?;
        self.save_csv(&format!("balance_sheet_{date}"), content)
            .await
    }

    async fn export_cash_flow_csv(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PathBuf, ServerError> {
        let statement = self.reports.cash_flow(start_date, end_date).await?;
        let content = cash_flow_csv(&statement)?;
        self.save_csv(&format!("cash_flow_{start_date}_{end_date}"), content)
            .await
    }
}

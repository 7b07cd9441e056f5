//! 解析サーバー経由の呼び出し（POST /analyze）

use super::ReportAnalyzer;
use crate::error::{HealthReportError, Result};
use crate::server::ErrorBody;
use async_trait::async_trait;
use health_report_common::{AnalysisResult, ReportFile};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::info;

/// エラーボディに error がない場合のメッセージ
const GENERIC_FAILURE: &str = "Analysis failed";

pub struct RemoteAnalyzer {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteAnalyzer {
    /// `base_url` はサーバーのルート（例: http://127.0.0.1:5000）
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: analyze_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn analyze_endpoint(base_url: &str) -> String {
    format!("{}/analyze", base_url.trim_end_matches('/'))
}

/// 失敗レスポンスのボディからメッセージを取り出す
fn failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[async_trait]
impl ReportAnalyzer for RemoteAnalyzer {
    async fn analyze(&self, file: &ReportFile) -> Result<AnalysisResult> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part("file", part);

        info!(file = %file.name, endpoint = %self.endpoint, "解析サーバーへ送信");
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HealthReportError::Server(failure_message(&body)));
        }

        Ok(response.json().await?)
    }
}

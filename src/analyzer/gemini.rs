//! Gemini API 直接呼び出し

use super::ReportAnalyzer;
use crate::error::{HealthReportError, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use health_report_common::gemini::{
    error_message, generate_content_url, list_models_url, GeminiRequest, GeminiResponse, ModelList,
};
use health_report_common::{
    build_analysis_prompt, build_attachment_prompt, parse_analysis_response, pdf, AnalysisResult,
    ReportFile,
};
use std::time::Duration;
use tracing::{debug, info};

pub struct GeminiAnalyzer {
    client: reqwest::Client,
    api_key: String,
    model: String,
    inline_pdf: bool,
}

impl GeminiAnalyzer {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            model,
            inline_pdf: false,
        })
    }

    /// テキスト抽出せずPDF本体を添付して送る
    pub fn with_inline_pdf(mut self, inline_pdf: bool) -> Self {
        self.inline_pdf = inline_pdf;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// generateContent を呼び、モデルのテキスト応答を返す
    pub async fn generate(&self, request: &GeminiRequest) -> Result<String> {
        let url = generate_content_url(&self.model, &self.api_key);
        let response = self.client.post(url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HealthReportError::ApiCall(format!(
                "{}: {}",
                status,
                error_message(&body)
            )));
        }

        let payload: GeminiResponse = response.json().await?;
        payload
            .first_text()
            .map_err(|e| HealthReportError::ApiParse(e.to_string()))
    }

    /// generateContent 対応モデルの一覧
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let response = self.client.get(list_models_url(&self.api_key)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HealthReportError::ApiCall(format!(
                "{}: {}",
                status,
                error_message(&body)
            )));
        }

        let list: ModelList = response.json().await?;
        Ok(list.content_models().into_iter().map(str::to_string).collect())
    }

    async fn build_request(&self, file: &ReportFile) -> Result<GeminiRequest> {
        if self.inline_pdf {
            debug!(bytes = file.bytes.len(), "PDFを添付して送信");
            return Ok(GeminiRequest::with_pdf(
                build_attachment_prompt(),
                STANDARD.encode(&file.bytes),
            ));
        }

        let bytes = file.bytes.clone();
        let text = tokio::task::spawn_blocking(move || pdf::extract_text(&bytes))
            .await
            .map_err(std::io::Error::other)??;
        debug!(chars = text.len(), "PDFテキスト抽出完了");

        Ok(GeminiRequest::text(build_analysis_prompt(&text)))
    }
}

#[async_trait]
impl ReportAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, file: &ReportFile) -> Result<AnalysisResult> {
        let request = self.build_request(file).await?;

        info!(file = %file.name, model = %self.model, "Gemini解析開始");
        let text = self.generate(&request).await?;
        debug!(chars = text.len(), "Geminiレスポンス受信");

        Ok(parse_analysis_response(&text)?)
    }
}

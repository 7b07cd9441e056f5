//! 解析クライアント
//!
//! 同じ契約（ReportFile → AnalysisResult）を持つ2つの実装:
//! - GeminiAnalyzer: PDFテキストを抽出してGeminiへ直接送る
//! - RemoteAnalyzer: 解析サーバーの `POST /analyze` へmultipartで送る

mod gemini;
mod remote;

pub use gemini::GeminiAnalyzer;
pub use remote::RemoteAnalyzer;

use crate::error::{HealthReportError, Result};
use async_trait::async_trait;
use health_report_common::{AnalysisResult, ReportFile, PDF_MIME_TYPE};
use std::path::Path;

#[async_trait]
pub trait ReportAnalyzer: Send + Sync {
    async fn analyze(&self, file: &ReportFile) -> Result<AnalysisResult>;
}

/// ファイル名がPDFの拡張子か（大文字小文字は区別しない）
pub fn has_pdf_extension(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf")
}

/// ローカルのPDFを読み込む
///
/// ネイティブ側にはブラウザ申告のMIMEがないため、拡張子で判定する
pub fn load_report_file(path: &Path) -> Result<ReportFile> {
    if !path.is_file() {
        return Err(HealthReportError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if !has_pdf_extension(&file_name) {
        return Err(HealthReportError::NotPdf(file_name));
    }

    let bytes = std::fs::read(path)?;
    Ok(ReportFile::new(file_name, PDF_MIME_TYPE, bytes))
}

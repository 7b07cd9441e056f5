//! 解析クライアント
//!
//! - Direct / InlinePdf: ブラウザから直接Gemini APIを呼ぶ
//! - Server: 解析サーバーの `POST /analyze` を呼ぶ

pub mod extract;
pub mod gemini;
pub mod server;

use health_report_common::{AnalysisResult, ReportFile};
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("APIキーが設定されていません")]
    MissingApiKey,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("通信エラー: {0}")]
    Transport(String),

    #[error("PDF抽出Workerエラー: {0}")]
    Worker(String),

    #[error(transparent)]
    Common(#[from] health_report_common::Error),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// 解析方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalysisMode {
    /// PDFテキストを抽出してGeminiへ
    #[default]
    Direct,
    /// PDFをそのままGeminiへ添付
    InlinePdf,
    /// 解析サーバー経由
    Server,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [AnalysisMode::Direct, AnalysisMode::InlinePdf, AnalysisMode::Server];

    pub fn key(&self) -> &'static str {
        match self {
            AnalysisMode::Direct => "direct",
            AnalysisMode::InlinePdf => "inline-pdf",
            AnalysisMode::Server => "server",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Direct => "Extract text in browser → Gemini",
            AnalysisMode::InlinePdf => "Send PDF to Gemini",
            AnalysisMode::Server => "Analysis server (/analyze)",
        }
    }

    /// ブラウザにAPIキーが必要か
    pub fn needs_api_key(&self) -> bool {
        !matches!(self, AnalysisMode::Server)
    }
}

/// 選択された方式で解析
pub async fn analyze(
    mode: AnalysisMode,
    api_key: &str,
    file: &ReportFile,
) -> Result<AnalysisResult, ClientError> {
    match mode {
        AnalysisMode::Direct => gemini::analyze_direct(api_key, file, false).await,
        AnalysisMode::InlinePdf => gemini::analyze_direct(api_key, file, true).await,
        AnalysisMode::Server => server::analyze_via_server(file).await,
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthReportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`health-report config --set-api-key YOUR_KEY` で設定するか GEMINI_API_KEY を指定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("PDFではありません: {0}")]
    NotPdf(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("サーバーエラー: {0}")]
    Server(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTML生成エラー: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] health_report_common::Error),
}

pub type Result<T> = std::result::Result<T, HealthReportError>;

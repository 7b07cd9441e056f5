//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    /// PDF以外のファイルが選択された（MIMEタイプを保持）
    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Analysis already in progress")]
    AnalysisInProgress,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

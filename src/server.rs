//! 解析サーバー
//!
//! - `POST /analyze`: multipartの `file` を受け取り、AnalysisResult のJSONを返す
//! - `GET /health`: 死活確認
//! - それ以外: フロントエンド（web-wasm のビルド成果物）を静的配信

use crate::analyzer::{has_pdf_extension, ReportAnalyzer};
use crate::error::{HealthReportError, Result};
use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use health_report_common::{is_pdf_mime, ReportFile, PDF_MIME_TYPE};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// アップロード上限（multipartのオーバーヘッド込み）
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// 失敗レスポンスのボディ
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub struct AppState {
    pub analyzer: Arc<dyn ReportAnalyzer>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

/// ルーター構築
pub fn router(analyzer: Arc<dyn ReportAnalyzer>, static_dir: Option<PathBuf>) -> Router {
    let mut app = Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(|| async { "ok" }));

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { analyzer }))
}

/// サーバー起動（終了しない）
pub async fn serve(addr: SocketAddr, app: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "解析サーバー起動");
    axum::serve(listener, app)
        .await
        .map_err(|e| HealthReportError::Server(e.to_string()))
}

/// アップロードされたファイル（検証前）
struct Upload {
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// multipartの読み込み失敗をレスポンスに変換
///
/// 上限超過は 413、それ以外は 400
fn multipart_failure(e: MultipartError) -> Response {
    let status = e.status();
    warn!(status = %status, "multipart読み込み失敗: {e}");
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        return error_response(status, "File too large. Maximum upload size is 20 MB.");
    }
    error_response(StatusCode::BAD_REQUEST, "Failed to read file data.")
}

fn is_pdf_upload(upload: &Upload) -> bool {
    upload.content_type.as_deref().is_some_and(is_pdf_mime) || has_pdf_extension(&upload.file_name)
}

async fn analyze(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let mut upload: Option<Upload> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return multipart_failure(e),
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        match field.bytes().await {
            Ok(bytes) => {
                upload = Some(Upload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Err(e) => return multipart_failure(e),
        }
    }

    let Some(upload) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "No file part");
    };

    if upload.file_name.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No selected file");
    }

    if !is_pdf_upload(&upload) {
        return error_response(StatusCode::BAD_REQUEST, "Invalid file type. Please upload a PDF.");
    }

    let file = ReportFile::new(upload.file_name, PDF_MIME_TYPE, upload.bytes);
    match state.analyzer.analyze(&file).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            error!(file = %file.name, "解析失敗: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

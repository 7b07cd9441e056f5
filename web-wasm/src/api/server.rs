//! 解析サーバー連携（POST /analyze）

use health_report_common::{AnalysisResult, ReportFile};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use super::ClientError;

/// 同一オリジンの解析エンドポイント
pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// エラーボディに error がない場合のメッセージ
const GENERIC_FAILURE: &str = "Analysis failed";

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// 失敗レスポンスのボディからメッセージを取り出す
fn failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// サーバー経由で解析
pub async fn analyze_via_server(file: &ReportFile) -> Result<AnalysisResult, ClientError> {
    let upload_file = gloo::file::File::new_with_options(
        &file.name,
        file.bytes.as_slice(),
        Some(&file.mime_type),
        None,
    );
    let upload: web_sys::File = AsRef::<web_sys::File>::as_ref(&upload_file).clone();

    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", &upload, &file.name)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(ANALYZE_ENDPOINT, &opts)?;

    let window = web_sys::window().ok_or_else(|| ClientError::Transport("window がありません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        let text = JsFuture::from(resp.text()?).await?;
        let body = text.as_string().unwrap_or_default();
        gloo::console::error!(format!("Server Error: {}", body));
        return Err(ClientError::Http {
            status: resp.status(),
            message: failure_message(&body),
        });
    }

    let json = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ClientError::Transport(e.to_string()))
}

//! Gemini API連携（ブラウザから直接呼び出し）
//!
//! PDFテキスト抽出（Worker） → プロンプト生成 → generateContent → コードフェンス除去 → JSONパース

use base64::{engine::general_purpose::STANDARD, Engine as _};
use health_report_common::gemini::{
    error_message, generate_content_url, GeminiRequest, GeminiResponse, DEFAULT_MODEL,
};
use health_report_common::{
    build_analysis_prompt, build_attachment_prompt, parse_analysis_response, AnalysisResult,
    ReportFile,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{extract, ClientError};

/// PDFを添付するリクエスト
pub fn attachment_request(file: &ReportFile) -> GeminiRequest {
    GeminiRequest::with_pdf(build_attachment_prompt(), STANDARD.encode(&file.bytes))
}

/// 解析用のリクエストを組み立てる
///
/// `inline_pdf` が真ならPDFを添付、偽ならWorkerで抽出した全ページのテキストを埋め込む
pub async fn build_request(file: &ReportFile, inline_pdf: bool) -> Result<GeminiRequest, ClientError> {
    if inline_pdf {
        return Ok(attachment_request(file));
    }

    let text = extract::extract_text(&file.bytes).await?;
    Ok(GeminiRequest::text(build_analysis_prompt(&text)))
}

/// Gemini API呼び出し（共通処理）
pub async fn call_gemini_api(
    api_key: &str,
    model: &str,
    request: &GeminiRequest,
) -> Result<String, ClientError> {
    let url = generate_content_url(model, api_key);
    let body = serde_json::to_string(request)
        .map_err(health_report_common::Error::from)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| ClientError::Transport("window がありません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        let text = JsFuture::from(resp.text()?).await?;
        return Err(ClientError::Http {
            status: resp.status(),
            message: error_message(&text.as_string().unwrap_or_default()),
        });
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| ClientError::Transport(e.to_string()))?;

    Ok(response.first_text()?)
}

/// ブラウザから直接解析
pub async fn analyze_direct(
    api_key: &str,
    file: &ReportFile,
    inline_pdf: bool,
) -> Result<AnalysisResult, ClientError> {
    if api_key.trim().is_empty() {
        return Err(ClientError::MissingApiKey);
    }

    let request = build_request(file, inline_pdf).await?;
    let response_text = call_gemini_api(api_key, DEFAULT_MODEL, &request).await?;

    Ok(parse_analysis_response(&response_text)?)
}

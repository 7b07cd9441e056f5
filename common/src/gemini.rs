//! Gemini API のリクエスト/レスポンス型
//!
//! 通信自体は呼び出し側（reqwest / web-sys fetch）が行う。
//! ここではJSONの形とURLだけを共有する。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::PDF_MIME_TYPE;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// generateContent エンドポイントURL
pub fn generate_content_url(model: &str, api_key: &str) -> String {
    format!("{}/models/{}:generateContent?key={}", GEMINI_API_BASE, model, api_key)
}

/// モデル一覧エンドポイントURL
pub fn list_models_url(api_key: &str) -> String {
    format!("{}/models?key={}", GEMINI_API_BASE, api_key)
}

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
            response_mime_type: "application/json".to_string(),
        }
    }
}

impl GeminiRequest {
    /// テキストのみのリクエスト
    pub fn text(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        }
    }

    /// プロンプト + Base64エンコード済みPDFのリクエスト
    pub fn with_pdf(prompt: String, pdf_base64: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: PDF_MIME_TYPE.to_string(),
                            data: pdf_base64,
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

/// Gemini APIレスポンス
///
/// 安全フィルタでブロックされた場合 candidates が欠落する
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: String,
}

impl GeminiResponse {
    /// 最初の候補のテキスト（複数partは連結）
    pub fn first_text(&self) -> Result<String> {
        let text: String = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::Parse("Empty response".into()));
        }
        Ok(text)
    }
}

/// Gemini APIのエラーボディ `{"error": {"message": ...}}`
#[derive(Debug, Deserialize)]
pub struct GeminiErrorBody {
    pub error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorDetail {
    #[serde(default)]
    pub message: String,
}

/// エラーボディからメッセージを取り出す（取れなければ生テキスト）
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<GeminiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// モデル一覧レスポンス
#[derive(Debug, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelList {
    /// generateContent対応モデル名
    pub fn content_models(&self) -> Vec<&str> {
        self.models
            .iter()
            .filter(|m| m.supported_generation_methods.iter().any(|g| g == "generateContent"))
            .map(|m| m.name.as_str())
            .collect()
    }
}

//! 解析結果の型定義
//!
//! CLI・サーバー・Web(WASM)で共有される型:
//! - ReportFile: ユーザーが選択したPDF（メモリ上のみ）
//! - AnalysisResult: AIが返す構造化JSON

use serde::{Deserialize, Deserializer, Serialize};

/// 受け付けるMIMEタイプ
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// ブラウザ申告のMIMEタイプがPDFかどうか（マジックバイトは見ない）
pub fn is_pdf_mime(mime_type: &str) -> bool {
    mime_type == PDF_MIME_TYPE
}

/// ユーザーが選択したファイル
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ReportFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_pdf(&self) -> bool {
        is_pdf_mime(&self.mime_type)
    }
}

/// AIが文字列の代わりに null を返した場合は空文字として扱う
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 症状とそのトリガー
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symptom {
    #[serde(deserialize_with = "null_as_empty")]
    pub symptom: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub trigger_events: String,
}

/// 推奨事項（各カテゴリは独立して省略可能）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meditation: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yoga: Option<Vec<String>>,
}

/// 薬の情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicineInfo {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

/// AI解析結果
///
/// 全フィールドが任意。レンダラーは各フィールドを独立に扱う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<Symptom>>,

    /// 慢性疾患名。該当なしの場合AIは "None" を返す
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chronic_disease_detected: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicine_info: Option<Vec<MedicineInfo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

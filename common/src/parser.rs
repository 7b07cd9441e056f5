//! APIレスポンスパーサー
//!
//! GeminiのテキストレスポンスからMarkdownのコードフェンスを除去し、
//! AnalysisResultとしてパースする

use crate::error::{Error, Result};
use crate::types::AnalysisResult;

/// Markdownのコードフェンス（```json / ```）を除去
///
/// フェンスの位置に関係なく全て取り除き、前後の空白をトリムする
///
/// # Examples
/// ```
/// use health_report_common::strip_code_fences;
///
/// let reply = "```json\n{\"motivation\": \"Keep going\"}\n```";
/// assert_eq!(strip_code_fences(reply), "{\"motivation\": \"Keep going\"}");
/// ```
pub fn strip_code_fences(response: &str) -> String {
    response
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// APIレスポンスからJSONオブジェクト部分を抽出
///
/// 抽出優先順位:
/// 1. フェンス除去後の文字列が `{` で始まればそのまま
/// 2. 最初の `{` から最後の `}` まで
/// 3. エラー
pub fn extract_json(response: &str) -> Result<String> {
    let stripped = strip_code_fences(response);
    if stripped.starts_with('{') {
        return Ok(stripped);
    }

    if let (Some(start), Some(end)) = (stripped.find('{'), stripped.rfind('}')) {
        if end > start {
            return Ok(stripped[start..=end].to_string());
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 解析レスポンスをパース
///
/// # Arguments
/// * `response` - AIのテキストレスポンス
///
/// # Returns
/// * `Ok(AnalysisResult)` - パース成功
/// * `Err` - JSONが見つからないかパース失敗
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResult> {
    let json_str = extract_json(response)?;
    serde_json::from_str(&json_str)
        .map_err(|e| Error::Parse(format!("解析結果 JSONパースエラー: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // strip_code_fences テスト
    // =============================================

    #[test]
    fn test_strip_json_fence() {
        let response = "```json\n{\"warning\": \"I am an AI\"}\n```";
        assert_eq!(strip_code_fences(response), "{\"warning\": \"I am an AI\"}");
    }

    #[test]
    fn test_strip_bare_fence() {
        let response = "```\n{\"warning\": \"I am an AI\"}\n```\n";
        assert_eq!(strip_code_fences(response), "{\"warning\": \"I am an AI\"}");
    }

    #[test]
    fn test_strip_no_fence() {
        let response = "  {\"motivation\": \"Go\"}  ";
        assert_eq!(strip_code_fences(response), "{\"motivation\": \"Go\"}");
    }

    // =============================================
    // extract_json テスト
    // =============================================

    #[test]
    fn test_extract_json_with_surrounding_text() {
        let response = "Here is the analysis:\n```json\n{\"motivation\": \"Go\"}\n```\nTake care.";
        let json = extract_json(response).unwrap();
        assert_eq!(json, "{\"motivation\": \"Go\"}");
    }

    #[test]
    fn test_extract_json_error() {
        let result = extract_json("I cannot analyze this document.");
        assert!(result.is_err());
        if let Err(Error::Parse(msg)) = result {
            assert!(msg.contains("JSONが見つかりません"));
        } else {
            panic!("Expected Parse error");
        }
    }

    #[test]
    fn test_extract_json_empty_response() {
        assert!(extract_json("").is_err());
    }

    // =============================================
    // parse_analysis_response テスト
    // =============================================

    #[test]
    fn test_parse_analysis_response_fenced() {
        let response = r#"```json
{
  "symptoms": [{"symptom": "Headache", "trigger_events": "Screen time"}],
  "chronic_disease_detected": "None",
  "warning": "Beep boop, I am just an AI!"
}
```"#;

        let result = parse_analysis_response(response).unwrap();
        let symptoms = result.symptoms.unwrap();
        assert_eq!(symptoms.len(), 1);
        assert_eq!(symptoms[0].symptom, "Headache");
        assert_eq!(result.chronic_disease_detected.as_deref(), Some("None"));
        assert_eq!(result.warning.as_deref(), Some("Beep boop, I am just an AI!"));
        assert!(result.recommendations.is_none());
    }

    #[test]
    fn test_parse_analysis_response_raw() {
        let response = r#"{"medicine_info": [{"name": "Vitamin D", "description": "Supports bones"}]}"#;

        let result = parse_analysis_response(response).unwrap();
        assert_eq!(result.medicine_info.unwrap()[0].description, "Supports bones");
    }

    #[test]
    fn test_parse_analysis_response_null_trigger() {
        let response = r#"{"symptoms":[{"symptom":"Cough","trigger_events":null}],"warning":"AI"}"#;

        let result = parse_analysis_response(response).unwrap();
        let symptoms = result.symptoms.unwrap();
        assert_eq!(symptoms[0].symptom, "Cough");
        assert_eq!(symptoms[0].trigger_events, "");
        assert_eq!(result.warning.as_deref(), Some("AI"));
    }

    #[test]
    fn test_parse_analysis_response_malformed() {
        let response = "```json\n{\"symptoms\": [\n```";

        let result = parse_analysis_response(response);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_analysis_response_wrong_shape() {
        // symptomsが配列でない
        let response = r#"{"symptoms": "Fatigue"}"#;
        assert!(parse_analysis_response(response).is_err());
    }
}

//! プロンプト生成モジュール
//!
//! CLI・サーバー・Web(WASM)で共有されるプロンプト生成ロジック:
//! - RESPONSE_TEMPLATE: AIに返させるJSONの雛形
//! - build_analysis_prompt: 抽出テキストを埋め込んだ解析用プロンプト
//! - build_attachment_prompt: PDFを添付する場合のプロンプト

/// AIに返させるJSONの雛形
///
/// キーはAnalysisResultのフィールドと一致させること
pub const RESPONSE_TEMPLATE: &str = r#"{
    "symptoms": [
        {
            "symptom": "Name of symptom",
            "trigger_events": "From which events they might get triggered"
        }
    ],
    "chronic_disease_detected": "Name of detected chronic disease or 'None'",
    "recommendations": {
        "exercise": ["List of recommended exercises"],
        "meditation": ["List of meditation techniques"],
        "yoga": ["List of yoga poses"]
    },
    "medicine_info": [
        {
            "name": "Medicine name",
            "description": "Description and why it has no side effects/harm if taken (consult specialist)"
        }
    ],
    "motivation": "Motivational message to prevent actions/events triggering the disease",
    "warning": "A short little cute warning that I am just an AI agent and you should talk to a specialist."
}"#;

/// 解析用プロンプト生成
///
/// # Arguments
/// * `report_text` - PDFから抽出したテキスト（ページ順に改行区切り）
///
/// # Returns
/// AIに送るプロンプト文字列
pub fn build_analysis_prompt(report_text: &str) -> String {
    format!(
        r#"Analyze the following health report text and provide a structured analysis.

Report Text:
{report_text}

Please provide the output in the following JSON format:
{RESPONSE_TEMPLATE}"#
    )
}

/// PDF添付用プロンプト生成
///
/// テキスト抽出を行わず、PDF本体をinline_dataとして送る場合に使う
pub fn build_attachment_prompt() -> String {
    format!(
        r#"Analyze the attached health report (PDF) and provide a structured analysis.

Please provide the output in the following JSON format:
{RESPONSE_TEMPLATE}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_analysis_prompt_embeds_text() {
        let prompt = build_analysis_prompt("Hemoglobin A1c: 7.2%");
        assert!(prompt.starts_with("Analyze the following health report text"));
        assert!(prompt.contains("Report Text:\nHemoglobin A1c: 7.2%"));
        assert!(prompt.ends_with(RESPONSE_TEMPLATE));
    }

    #[test]
    fn test_template_has_all_keys() {
        for key in [
            "\"symptoms\"",
            "\"symptom\"",
            "\"trigger_events\"",
            "\"chronic_disease_detected\"",
            "\"recommendations\"",
            "\"exercise\"",
            "\"meditation\"",
            "\"yoga\"",
            "\"medicine_info\"",
            "\"name\"",
            "\"description\"",
            "\"motivation\"",
            "\"warning\"",
        ] {
            assert!(RESPONSE_TEMPLATE.contains(key), "キーが欠落: {}", key);
        }
    }

    #[test]
    fn test_template_is_valid_json() {
        let value: serde_json::Value =
            serde_json::from_str(RESPONSE_TEMPLATE).expect("雛形がJSONとして不正");
        assert!(value["recommendations"]["yoga"].is_array());
    }

    #[test]
    fn test_build_attachment_prompt() {
        let prompt = build_attachment_prompt();
        assert!(prompt.contains("attached health report"));
        assert!(prompt.contains("\"medicine_info\""));
    }
}

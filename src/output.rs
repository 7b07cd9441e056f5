//! 解析結果の出力（text / json / html）

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::report::render_report;
use health_report_common::{build_panels, to_text, AnalysisResult};

/// 表示するパネルが1つもない場合のテキスト
pub const EMPTY_TEXT: &str = "表示できる解析結果がありません\n";

pub fn render_output(result: &AnalysisResult, format: OutputFormat, title: &str) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)? + "\n",
        OutputFormat::Html => render_report(title, &build_panels(result))?,
        OutputFormat::Text => {
            let text = to_text(&build_panels(result));
            if text.is_empty() {
                EMPTY_TEXT.to_string()
            } else {
                text
            }
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_report_common::Symptom;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            symptoms: Some(vec![Symptom {
                symptom: "Fatigue".to_string(),
                trigger_events: "Poor sleep".to_string(),
            }]),
            chronic_disease_detected: Some("None".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_json() {
        let json = render_output(&sample(), OutputFormat::Json, "report.pdf").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["symptoms"][0]["trigger_events"], "Poor sleep");
        assert_eq!(value["chronic_disease_detected"], "None");
    }

    #[test]
    fn test_render_text() {
        let text = render_output(&sample(), OutputFormat::Text, "report.pdf").unwrap();
        assert!(text.starts_with("== Symptoms & Triggers =="));
        assert!(!text.contains("Chronic Disease"));
    }

    #[test]
    fn test_render_text_empty() {
        let text = render_output(&AnalysisResult::default(), OutputFormat::Text, "r.pdf").unwrap();
        assert_eq!(text, EMPTY_TEXT);
    }

    #[test]
    fn test_render_html() {
        let html = render_output(&sample(), OutputFormat::Html, "report.pdf").unwrap();
        assert!(html.contains("<title>report.pdf</title>"));
        assert!(html.contains("symptom-item"));
    }
}

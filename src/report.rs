//! HTMLレポート
//!
//! templates/report.html を askama で描画する。モデルが返した文字列は
//! テンプレート側で全てエスケープされる。

use askama::Template;
use health_report_common::Panel;

use crate::error::Result;

/// 単体で開けるHTMLレポート
#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate<'a> {
    pub title: &'a str,
    pub panels: &'a [Panel],
}

pub fn render_report(title: &str, panels: &[Panel]) -> Result<String> {
    Ok(ReportTemplate { title, panels }.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_report_common::{build_panels, AnalysisResult, Recommendations, Symptom};

    #[test]
    fn test_single_symptom() {
        let result = AnalysisResult {
            symptoms: Some(vec![Symptom {
                symptom: "Fatigue".to_string(),
                trigger_events: "Poor sleep".to_string(),
            }]),
            ..Default::default()
        };

        let html = render_report("labs.pdf", &build_panels(&result)).unwrap();
        assert!(html.contains("<h2>Symptoms &amp; Triggers</h2>"));
        assert!(html.contains("<strong>Fatigue</strong>"));
        assert!(html.contains("Trigger: Poor sleep"));
    }

    #[test]
    fn test_exercise_only_recommendations() {
        let result = AnalysisResult {
            recommendations: Some(Recommendations {
                exercise: Some(vec!["Walking".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        };

        let html = render_report("labs.pdf", &build_panels(&result)).unwrap();
        assert!(html.contains("<h3>Exercise</h3>"));
        assert!(html.contains(r#"<span class="tag">Walking</span>"#));
        assert!(!html.contains("<h3>Meditation</h3>"));
        assert!(!html.contains("<h3>Yoga</h3>"));
    }

    #[test]
    fn test_warning_is_not_a_card() {
        let result = AnalysisResult {
            warning: Some("Beep".to_string()),
            ..Default::default()
        };

        let html = render_report("labs.pdf", &build_panels(&result)).unwrap();
        assert!(html.contains(r#"<p class="cute-warning">Beep</p>"#));
        assert!(!html.contains(r#"class="glass-panel result-card""#));
    }

    #[test]
    fn test_model_text_is_escaped() {
        let result = AnalysisResult {
            chronic_disease_detected: Some("<script>alert(1)</script>".to_string()),
            motivation: Some("Tom & Jerry".to_string()),
            ..Default::default()
        };

        let html = render_report("report <1>.pdf", &build_panels(&result)).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("<title>report &lt;1&gt;.pdf</title>"));
    }

    #[test]
    fn test_document_shell() {
        let html = render_report("labs.pdf", &[]).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>labs.pdf</h1>"));
    }
}

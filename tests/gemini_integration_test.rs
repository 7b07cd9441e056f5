use health_report_ai::analyzer::GeminiAnalyzer;
use health_report_common::gemini::{GeminiRequest, DEFAULT_MODEL};
use health_report_common::parse_analysis_response;
use std::time::Duration;

#[tokio::test]
async fn gemini_analysis_integration() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let prompt = r#"Return ONLY a JSON object exactly in this format:
{
  "symptoms": [{"symptom": "Fatigue", "trigger_events": "Poor sleep"}],
  "chronic_disease_detected": "None",
  "warning": "integration test"
}
"#;

    let gemini = GeminiAnalyzer::new(api_key, DEFAULT_MODEL.to_string(), Duration::from_secs(60))
        .expect("client build failed");
    let text = gemini
        .generate(&GeminiRequest::text(prompt.to_string()))
        .await
        .expect("gemini request failed");

    let result = parse_analysis_response(&text).expect("failed to parse analysis response");
    assert_eq!(result.chronic_disease_detected.as_deref(), Some("None"));
    assert_eq!(result.symptoms.expect("symptoms missing")[0].symptom, "Fatigue");
}

//! Health Report AI Common Library
//!
//! CLI・サーバー・Web(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod prompts;
pub mod parser;
pub mod gemini;
pub mod render;
pub mod controller;
pub mod pdf;

pub use types::{
    AnalysisResult, MedicineInfo, Recommendations, ReportFile, Symptom, is_pdf_mime, PDF_MIME_TYPE,
};
pub use error::{Error, Result};
pub use prompts::{build_analysis_prompt, build_attachment_prompt, RESPONSE_TEMPLATE};
pub use parser::{extract_json, parse_analysis_response, strip_code_fences};
pub use render::{build_panels, to_text, ChipGroup, Panel};
pub use controller::{AnalysisTicket, Notice, ReportController, ViewState};

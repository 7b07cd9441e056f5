//! 解析結果の表示モデル
//!
//! AnalysisResult から固定順のパネル列を組み立てる。
//! ブラウザ側は Panel を Leptos の view! で描画し、CLI側は
//! askama テンプレート（HTML）か `to_text` で出力する。

use crate::types::{AnalysisResult, MedicineInfo, Symptom};

/// 「慢性疾患なし」を表すAIの返り値
pub const NO_DISEASE_SENTINEL: &str = "None";

/// 推奨事項のカテゴリ（チップのグループ）
#[derive(Debug, Clone, PartialEq)]
pub struct ChipGroup {
    pub label: &'static str,
    pub chips: Vec<String>,
}

/// 表示パネル（並び順は build_panels が保証）
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    ChronicDisease(String),
    Symptoms(Vec<Symptom>),
    Recommendations(Vec<ChipGroup>),
    Medicines(Vec<MedicineInfo>),
    Motivation(String),
    Warning(String),
}

impl Panel {
    /// カード見出し。警告はカードではないので None
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Panel::ChronicDisease(_) => Some("Chronic Disease Detected"),
            Panel::Symptoms(_) => Some("Symptoms & Triggers"),
            Panel::Recommendations(_) => Some("Recommendations"),
            Panel::Medicines(_) => Some("Safe Medicines"),
            Panel::Motivation(_) => Some("Motivation"),
            Panel::Warning(_) => None,
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// パネル列を組み立てる
///
/// 順序: 慢性疾患 → 症状 → 推奨事項 → 薬 → 励まし → 警告。
/// 欠落・空のフィールドはパネルごと省略する。
pub fn build_panels(result: &AnalysisResult) -> Vec<Panel> {
    let mut panels = Vec::new();

    if let Some(disease) = present(&result.chronic_disease_detected) {
        if disease != NO_DISEASE_SENTINEL {
            panels.push(Panel::ChronicDisease(disease.to_string()));
        }
    }

    if let Some(symptoms) = result.symptoms.as_ref().filter(|s| !s.is_empty()) {
        panels.push(Panel::Symptoms(symptoms.clone()));
    }

    if let Some(recs) = &result.recommendations {
        let groups = [
            ("Exercise", &recs.exercise),
            ("Meditation", &recs.meditation),
            ("Yoga", &recs.yoga),
        ]
        .into_iter()
        .filter_map(|(label, items)| {
            items.as_ref().map(|chips| ChipGroup { label, chips: chips.clone() })
        })
        .collect();
        panels.push(Panel::Recommendations(groups));
    }

    if let Some(medicines) = result.medicine_info.as_ref().filter(|m| !m.is_empty()) {
        panels.push(Panel::Medicines(medicines.clone()));
    }

    if let Some(motivation) = present(&result.motivation) {
        panels.push(Panel::Motivation(motivation.to_string()));
    }

    if let Some(warning) = present(&result.warning) {
        panels.push(Panel::Warning(warning.to_string()));
    }

    panels
}

/// 端末表示用のプレーンテキスト
pub fn to_text(panels: &[Panel]) -> String {
    let mut out = String::new();
    for panel in panels {
        if let Some(title) = panel.title() {
            out.push_str(&format!("== {} ==\n", title));
        }
        let body: String = match panel {
            Panel::ChronicDisease(disease) => format!("{}\n", disease),
            Panel::Symptoms(symptoms) => symptoms
                .iter()
                .map(|s| format!("- {}\n  Trigger: {}\n", s.symptom, s.trigger_events))
                .collect(),
            Panel::Recommendations(groups) => groups
                .iter()
                .map(|g| format!("{}: {}\n", g.label, g.chips.join(", ")))
                .collect(),
            Panel::Medicines(medicines) => medicines
                .iter()
                .map(|m| format!("- {}\n  {}\n", m.name, m.description))
                .collect(),
            Panel::Motivation(text) => format!("\"{}\"\n", text),
            Panel::Warning(text) => format!("[!] {}\n", text),
        };
        out.push_str(&body);
        out.push('\n');
    }
    out
}

//! 解析結果パネル
//!
//! Panel列をそのまま描画する。テキストは全てテキストノードとして挿入されるため、
//! モデルが返した文字列がマークアップとして解釈されることはない。

use health_report_common::Panel;
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

fn panel_body(panel: Panel) -> AnyView {
    match panel {
        Panel::ChronicDisease(disease) => view! {
            <p class="disease-name">{disease}</p>
        }
        .into_any(),
        Panel::Symptoms(symptoms) => symptoms
            .into_iter()
            .map(|s| {
                view! {
                    <div class="symptom-item">
                        <strong>{s.symptom}</strong>
                        <p class="trigger">"Trigger: "{s.trigger_events}</p>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
        Panel::Recommendations(groups) => groups
            .into_iter()
            .map(|group| {
                view! {
                    <h3>{group.label}</h3>
                    <div class="tag-group">
                        {group
                            .chips
                            .into_iter()
                            .map(|chip| view! { <span class="tag">{chip}</span> })
                            .collect_view()}
                    </div>
                }
            })
            .collect_view()
            .into_any(),
        Panel::Medicines(medicines) => medicines
            .into_iter()
            .map(|m| {
                view! {
                    <div class="medicine-item">
                        <strong>{m.name}</strong>
                        <p>{m.description}</p>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
        Panel::Motivation(text) => view! {
            <p class="motivation">"\""{text}"\""</p>
        }
        .into_any(),
        Panel::Warning(text) => view! {
            <div class="warning-box">
                <span class="warning-icon">"🤖"</span>
                <p class="cute-warning">{text}</p>
            </div>
        }
        .into_any(),
    }
}

fn panel_view(panel: Panel) -> AnyView {
    match panel.title() {
        Some(title) => view! {
            <div class="glass-panel result-card">
                <h2>{title}</h2>
                {panel_body(panel)}
            </div>
        }
        .into_any(),
        // 警告はカードに入れない
        None => panel_body(panel),
    }
}

#[component]
pub fn ResultPanels(panels: Signal<Vec<Panel>>, visible: Signal<bool>) -> impl IntoView {
    let container: NodeRef<Div> = NodeRef::new();

    // 結果が表示されたらスクロール
    Effect::new(move |_| {
        let has_panels = panels.with(|p| !p.is_empty());
        if visible.get() && has_panels {
            if let Some(el) = container.get() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    view! {
        <div class="result-section" class:hidden=move || !visible.get() node_ref=container>
            {move || panels.get().into_iter().map(panel_view).collect_view()}
        </div>
    }
}

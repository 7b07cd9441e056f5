//! 解析開始ボタン

use leptos::prelude::*;

#[component]
pub fn AnalyzeButton<F>(
    enabled: Signal<bool>,
    is_analyzing: Signal<bool>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="analyze-actions">
            <button
                class="btn btn-primary"
                disabled=move || !enabled.get()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if is_analyzing.get() { "Analyzing..." } else { "Analyze Report" }}
            </button>
        </div>
    }
}

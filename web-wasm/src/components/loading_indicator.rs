//! 解析中インジケーター

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-section">
            <div class="spinner" />
            <p class="loading-text">"Analyzing your report..."</p>
        </div>
    }
}

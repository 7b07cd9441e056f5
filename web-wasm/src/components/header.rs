//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Health Report AI"</h1>
            <p class="text-muted">"Upload your health report and get an AI-powered overview"</p>
        </header>
    }
}

//! 設定パネルコンポーネント

use leptos::html::Input;
use leptos::prelude::*;

use crate::api::AnalysisMode;
use crate::storage;

#[component]
pub fn SettingsPanel(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
    mode: ReadSignal<AnalysisMode>,
    set_mode: WriteSignal<AnalysisMode>,
    api_key_input: NodeRef<Input>,
) -> impl IntoView {
    let (api_key_status, set_api_key_status) = signal(String::new());

    view! {
        <div class="settings-panel glass-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="api-key">"Gemini API Key"</label>
                    <input
                        type="password"
                        id="api-key"
                        placeholder="Enter your API key..."
                        node_ref=api_key_input
                        disabled=move || !mode.get().needs_api_key()
                        prop:value=move || api_key.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            match storage::save_api_key(&value) {
                                Ok(()) => set_api_key_status.set(String::new()),
                                Err(e) => set_api_key_status.set(e),
                            }
                            set_api_key.set(value);
                        }
                    />
                    <a
                        href="https://aistudio.google.com/app/apikey"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="api-key-link"
                    >
                        "Get an API key →"
                    </a>
                    <div class="api-key-status">
                        {move || api_key_status.get()}
                    </div>
                </div>

                <div class="form-group">
                    <label for="analysis-mode">"Analysis mode"</label>
                    <select
                        id="analysis-mode"
                        on:change=move |ev| {
                            let value = AnalysisMode::from_key(&event_target_value(&ev)).unwrap_or_default();
                            if let Err(e) = storage::save_mode(value) {
                                gloo::console::warn!(e);
                            }
                            set_mode.set(value);
                        }
                    >
                        {AnalysisMode::ALL
                            .into_iter()
                            .map(|m| {
                                view! {
                                    <option value=m.key() selected=move || mode.get() == m>
                                        {m.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}

//! メインアプリケーションコンポーネント

use health_report_common::{is_pdf_mime, Notice, Panel, ReportController, ReportFile};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::{
    analyze_button::AnalyzeButton,
    header::Header,
    loading_indicator::LoadingIndicator,
    result_panels::ResultPanels,
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
};
use crate::storage;

const MISSING_API_KEY_MESSAGE: &str = "Please enter your Gemini API key first.";

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // APIキーと解析方式はlocalStorageから復元
    let (api_key, set_api_key) = signal(storage::load_api_key());
    let (mode, set_mode) = signal(storage::load_mode());
    let controller = RwSignal::new(ReportController::new());
    let api_key_input: NodeRef<Input> = NodeRef::new();

    let view_state = Signal::derive(move || controller.with(|c| c.view()));
    let file_name = Signal::derive(move || {
        controller.with(|c| c.current_file().map(|f| f.name.clone()))
    });
    let panels: Signal<Vec<Panel>> = Signal::derive(move || controller.with(|c| c.panels()));

    // ファイル選択（MIMEで判定し、PDFのみ読み込む）
    let on_file_selected = move |file: File| {
        if !is_pdf_mime(&file.type_()) {
            gloo::dialogs::alert(&Notice::invalid_file().message);
            return;
        }

        let name = file.name();
        let mime_type = file.type_();
        let file = gloo::file::File::from(file);

        spawn_local(async move {
            match gloo::file::futures::read_as_bytes(&file).await {
                Ok(bytes) => {
                    let report = ReportFile::new(name, mime_type, bytes);
                    if let Some(Err(e)) = controller.try_update(|c| c.select_file(report)) {
                        gloo::console::warn!(e.to_string());
                        gloo::dialogs::alert(&Notice::invalid_file().message);
                    }
                }
                Err(e) => {
                    gloo::console::error!(format!("ファイル読み込み失敗: {}", e));
                }
            }
        });
    };

    let on_remove = move |_: ()| {
        controller.update(|c| c.remove_file());
    };

    // 解析開始
    let on_analyze = move |_: ()| {
        let current_mode = mode.get_untracked();
        let key = api_key.get_untracked();

        if current_mode.needs_api_key() && key.trim().is_empty() {
            gloo::dialogs::alert(MISSING_API_KEY_MESSAGE);
            if let Some(input) = api_key_input.get_untracked() {
                input.focus().ok();
            }
            return;
        }

        let (ticket, file) = match controller.try_update(|c| c.begin_analysis()) {
            Some(Ok(started)) => started,
            Some(Err(e)) => {
                gloo::console::warn!(e.to_string());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = api::analyze(current_mode, &key, &file).await;
            if let Err(e) = &outcome {
                gloo::console::error!(format!("Error: {}", e));
            }

            // 解析中にファイルが解除されていれば結果は捨てられる
            if let Some(notice) = controller.try_update(|c| c.finish_analysis(ticket, outcome)).flatten() {
                gloo::dialogs::alert(&notice.message);
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <main class="main-content">
                <SettingsPanel
                    api_key=api_key
                    set_api_key=set_api_key
                    mode=mode
                    set_mode=set_mode
                    api_key_input=api_key_input
                />

                <section class="upload-section">
                    <UploadArea
                        upload_area_visible=Signal::derive(move || view_state.get().upload_area_visible)
                        file_name=file_name
                        on_file_selected=on_file_selected
                        on_remove=on_remove
                    />

                    <AnalyzeButton
                        enabled=Signal::derive(move || view_state.get().trigger_enabled)
                        is_analyzing=Signal::derive(move || view_state.get().loading_visible)
                        on_analyze=on_analyze
                    />
                </section>

                <Show when=move || view_state.get().loading_visible>
                    <LoadingIndicator />
                </Show>

                <ResultPanels
                    panels=panels
                    visible=Signal::derive(move || view_state.get().results_visible)
                />
            </main>
        </div>
    }
}

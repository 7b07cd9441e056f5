//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとファイル選択を受け付け、最初の1ファイルだけを親へ渡す。
//! 選択済みの間はアップロードエリアの代わりにファイル名と解除ボタンを表示する。

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

#[component]
pub fn UploadArea<F, R>(
    upload_area_visible: Signal<bool>,
    file_name: Signal<Option<String>>,
    on_file_selected: F,
    on_remove: R,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
    R: Fn(()) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input: NodeRef<Input> = NodeRef::new();

    let handle_files = move |files: FileList| {
        if let Some(file) = files.get(0) {
            on_file_selected(file);
        }
    };

    // ブラウザがファイルを開いてしまうのを防ぐ
    let suppress = |ev: &DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let on_dragenter = move |ev: DragEvent| {
        suppress(&ev);
        set_is_dragover.set(true);
    };

    let on_dragover = move |ev: DragEvent| {
        suppress(&ev);
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        suppress(&ev);
        set_is_dragover.set(false);
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            suppress(&ev);
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                handle_files(files);
            }
        }
    };

    let on_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            handle_files(files);
        }
    };

    let on_remove_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        // 同じファイルを選び直してもchangeが発火するようにする
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
        on_remove(());
    };

    view! {
        <input
            type="file"
            accept="application/pdf"
            class="hidden"
            node_ref=file_input
            on:change=on_change
        />
        <div
            class="upload-area glass-panel"
            class:dragover=move || is_dragover.get()
            class:hidden=move || !upload_area_visible.get()
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=on_click
        >
            <div class="upload-icon">"📄"</div>
            <p>"Drag & drop your health report here, or click to browse"</p>
            <p class="text-muted">"Supported format: PDF"</p>
        </div>
        <div class="file-info glass-panel" class:hidden=move || upload_area_visible.get()>
            <span class="file-icon">"📄"</span>
            <span class="file-name">{move || file_name.get().unwrap_or_default()}</span>
            <button class="btn btn-small btn-tertiary" on:click=on_remove_click>
                "Remove"
            </button>
        </div>
    }
}

//! PDFテキスト抽出Worker
//!
//! UIとは別のwasmインスタンスで pdf-extract を動かす。
//! 受信: PDFの Blob / 返信: `ExtractReply` のJSON文字列。
//! 抽出中にパニックした場合はこのWorkerだけが落ち、UI側には error イベントが届く。
//! そのため抽出はイベントハンドラ内で同期的に行う（非同期タスク内の例外は error イベントにならない）。

use health_report_common::pdf::{self, ExtractReply};
use wasm_bindgen::prelude::*;
use web_sys::{Blob, DedicatedWorkerGlobalScope, FileReaderSync, MessageEvent};

fn read_bytes(data: JsValue) -> Result<Vec<u8>, String> {
    let blob: Blob = data.dyn_into().map_err(|_| "PDFデータではありません".to_string())?;
    let reader = FileReaderSync::new().map_err(|e| format!("{:?}", e))?;
    let buffer = reader
        .read_as_array_buffer(&blob)
        .map_err(|e| format!("読み込み失敗: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn reply(scope: &DedicatedWorkerGlobalScope, reply: &ExtractReply) {
    let json = match serde_json::to_string(reply) {
        Ok(json) => json,
        Err(e) => {
            gloo::console::error!(e.to_string());
            return;
        }
    };
    if let Err(e) = scope.post_message(&JsValue::from_str(&json)) {
        gloo::console::error!(e);
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let scope: DedicatedWorkerGlobalScope = js_sys::global().unchecked_into();
    let reply_to = scope.clone();

    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
        let outcome = match read_bytes(ev.data()) {
            Ok(bytes) => ExtractReply::from(pdf::extract_text(&bytes)),
            Err(message) => ExtractReply::Failed(message),
        };
        reply(&reply_to, &outcome);
    });

    scope.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();
}

//! PDFテキスト抽出（pdf-worker 経由）
//!
//! 抽出は解析1回ごとにWorkerを起動して行い、終わったら破棄する。
//! Workerがパニックで落ちた場合は error イベントを失敗として返すので、
//! UI側の解析タスクは必ず終了する。

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use health_report_common::pdf::ExtractReply;
use health_report_common::PDF_MIME_TYPE;
use wasm_bindgen::prelude::*;
use web_sys::{ErrorEvent, Event, MessageEvent, Worker};

use super::ClientError;

/// trunk の loader shim（index.html の data-type="worker"）
pub const PDF_WORKER_URL: &str = "./pdf_worker_loader.js";

type ReplySlot = Rc<RefCell<Option<oneshot::Sender<Result<String, ClientError>>>>>;

/// 最初に届いた結果だけを渡す
fn settle(slot: &ReplySlot, outcome: Result<String, ClientError>) {
    if let Some(sender) = slot.borrow_mut().take() {
        // 受信側が先に破棄されていれば結果は不要
        sender.send(outcome).ok();
    }
}

/// Workerの返信（JSON文字列）を解釈
pub fn decode_reply(data: Option<String>) -> Result<String, ClientError> {
    let json = data.ok_or_else(|| ClientError::Worker("不正な返信".to_string()))?;
    let reply: ExtractReply =
        serde_json::from_str(&json).map_err(health_report_common::Error::from)?;
    Ok(reply.into_result()?)
}

/// 全ページのテキストを抽出
pub async fn extract_text(bytes: &[u8]) -> Result<String, ClientError> {
    let worker = Worker::new(PDF_WORKER_URL)?;
    let (sender, receiver) = oneshot::channel();
    let slot: ReplySlot = Rc::new(RefCell::new(Some(sender)));

    let on_message = {
        let slot = slot.clone();
        Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
            settle(&slot, decode_reply(ev.data().as_string()));
        })
    };

    // 読み込み失敗は ErrorEvent ではない Event で届く
    let on_error = {
        let slot = slot.clone();
        Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            ev.prevent_default();
            let message = ev
                .dyn_ref::<ErrorEvent>()
                .map(|e| e.message())
                .unwrap_or_else(|| "Workerを起動できません".to_string());
            settle(&slot, Err(ClientError::Worker(message)));
        })
    };

    worker.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    worker.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let blob: web_sys::Blob = gloo::file::Blob::new_with_options(bytes, Some(PDF_MIME_TYPE)).into();
    let outcome = match worker.post_message(&blob) {
        Ok(()) => receiver
            .await
            .unwrap_or_else(|_| Err(ClientError::Worker("Workerが応答しません".to_string()))),
        Err(e) => Err(e.into()),
    };

    worker.terminate();
    drop(on_message);
    drop(on_error);
    outcome
}

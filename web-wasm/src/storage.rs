//! ブラウザの localStorage に設定を保存
//!
//! APIキーはページ読込時に復元し、セッションをまたいで再利用する

use gloo::storage::{LocalStorage, Storage};

use crate::api::AnalysisMode;

pub const API_KEY_STORAGE_KEY: &str = "gemini_api_key";
pub const MODE_STORAGE_KEY: &str = "analysis_mode";

pub fn load_api_key() -> String {
    LocalStorage::get::<String>(API_KEY_STORAGE_KEY).unwrap_or_default()
}

pub fn save_api_key(api_key: &str) -> Result<(), String> {
    if api_key.is_empty() {
        clear_api_key();
        return Ok(());
    }
    LocalStorage::set(API_KEY_STORAGE_KEY, api_key).map_err(|e| format!("保存失敗: {}", e))
}

pub fn clear_api_key() {
    LocalStorage::delete(API_KEY_STORAGE_KEY);
}

pub fn load_mode() -> AnalysisMode {
    LocalStorage::get::<String>(MODE_STORAGE_KEY)
        .ok()
        .and_then(|s| AnalysisMode::from_key(&s))
        .unwrap_or_default()
}

pub fn save_mode(mode: AnalysisMode) -> Result<(), String> {
    LocalStorage::set(MODE_STORAGE_KEY, mode.key()).map_err(|e| format!("保存失敗: {}", e))
}

//! アップロード・解析の状態管理
//!
//! 画面側（WASM）はこの構造体を1つだけ持ち、表示状態は全て `view()` から導出する。
//! 状態遷移: 未選択 → 選択済み → (解析中 → 選択済み) → 解除

use crate::error::{Error, Result};
use crate::render::{build_panels, Panel};
use crate::types::{AnalysisResult, ReportFile};

/// 解析失敗時にユーザーへ出す唯一のメッセージ
pub const ANALYSIS_FAILED_MESSAGE: &str = "An error occurred during analysis. Please try again.";

/// PDF以外を選んだときのメッセージ
pub const INVALID_FILE_MESSAGE: &str = "Please upload a PDF file.";

/// 表示状態（DOMのhidden/disabledに対応）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub upload_area_visible: bool,
    pub file_info_visible: bool,
    pub trigger_enabled: bool,
    pub loading_visible: bool,
    pub results_visible: bool,
}

/// ユーザーへの通知（alert相当）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn analysis_failed() -> Self {
        Self { message: ANALYSIS_FAILED_MESSAGE.to_string() }
    }

    pub fn invalid_file() -> Self {
        Self { message: INVALID_FILE_MESSAGE.to_string() }
    }
}

/// 解析1回分の識別子
///
/// `begin_analysis` が発行し、`finish_analysis` に渡す。ファイル解除や次の解析で
/// 古くなった識別子の結果は捨てられる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

/// アップロード・解析コントローラ
#[derive(Debug, Clone, Default)]
pub struct ReportController {
    current_file: Option<ReportFile>,
    result: Option<AnalysisResult>,
    loading: bool,
    generation: u64,
}

impl ReportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_file(&self) -> Option<&ReportFile> {
        self.current_file.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// ファイルを選択
    ///
    /// PDF以外は拒否し、状態は一切変えない
    pub fn select_file(&mut self, file: ReportFile) -> Result<()> {
        if !file.is_pdf() {
            return Err(Error::InvalidFileType(file.mime_type));
        }
        self.current_file = Some(file);
        Ok(())
    }

    /// ファイル選択を解除（表示中の結果も消す）
    ///
    /// 実行中の解析は無効になり、その結果は届いても表示されない
    pub fn remove_file(&mut self) {
        self.current_file = None;
        self.result = None;
        self.loading = false;
        self.generation += 1;
    }

    /// 解析開始
    ///
    /// 解析対象のファイルと識別子を返す。ファイル未選択・解析中はエラー
    pub fn begin_analysis(&mut self) -> Result<(AnalysisTicket, ReportFile)> {
        if self.loading {
            return Err(Error::AnalysisInProgress);
        }
        let file = self.current_file.clone().ok_or(Error::NoFileSelected)?;
        self.generation += 1;
        self.loading = true;
        Ok((AnalysisTicket(self.generation), file))
    }

    /// 解析終了
    ///
    /// 成功なら結果を差し替える。失敗なら以前の結果を残したまま通知を返す。
    /// どちらの場合もローディングは解除される。
    /// 古い識別子の結果は状態を変えずに捨てる。
    pub fn finish_analysis<E>(
        &mut self,
        ticket: AnalysisTicket,
        outcome: std::result::Result<AnalysisResult, E>,
    ) -> Option<Notice> {
        if ticket != AnalysisTicket(self.generation) || !self.loading {
            return None;
        }
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                None
            }
            Err(_) => Some(Notice::analysis_failed()),
        }
    }

    /// 現在の表示状態
    pub fn view(&self) -> ViewState {
        let selected = self.current_file.is_some();
        ViewState {
            upload_area_visible: !selected,
            file_info_visible: selected,
            trigger_enabled: selected && !self.loading,
            loading_visible: self.loading,
            results_visible: self.result.is_some() && !self.loading,
        }
    }

    /// 表示するパネル（結果がなければ空）
    pub fn panels(&self) -> Vec<Panel> {
        self.result.as_ref().map(build_panels).unwrap_or_default()
    }
}

//! PDFテキスト抽出
//!
//! 全ページをページ番号順に抽出し、改行で連結する。
//! 画像のみのPDF（スキャン）は空文字になる。OCRは行わない。
//!
//! pdf-extract は壊れたPDFでパニックすることがあるため、抽出は
//! `catch_unwind` で包み `Error::Pdf` に変換する。ブラウザでは
//! パニックを捕捉できないので、抽出は専用のWorkerで行い、結果を
//! `ExtractReply` としてUIへ返す。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Workerから返す抽出結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ExtractReply {
    Text(String),
    Failed(String),
}

impl From<Result<String>> for ExtractReply {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => ExtractReply::Text(text),
            Err(Error::Pdf(message)) => ExtractReply::Failed(message),
            Err(e) => ExtractReply::Failed(e.to_string()),
        }
    }
}

impl ExtractReply {
    pub fn into_result(self) -> Result<String> {
        match self {
            ExtractReply::Text(text) => Ok(text),
            ExtractReply::Failed(message) => Err(Error::Pdf(message)),
        }
    }
}

/// PDFバイト列から全ページのテキストを抽出
#[cfg(feature = "pdf")]
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String> {
    let pages = extract_pages(pdf_bytes)?;
    Ok(pages.join("\n"))
}

/// ページごとのテキスト（1ページ目から順）
#[cfg(feature = "pdf")]
pub fn extract_pages(pdf_bytes: &[u8]) -> Result<Vec<String>> {
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(pdf_bytes))
        .map_err(|payload| Error::Pdf(format!("PDFの解析中にパニック: {}", panic_message(payload.as_ref()))))?
        .map_err(|e| Error::Pdf(e.to_string()))
}

#[cfg(feature = "pdf")]
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(all(test, feature = "pdf"))]
mod tests {
    use super::*;
    use lopdf::dictionary;
    use lopdf::{Document, Object, Stream};

    /// 1ページ1行のテキストを持つPDFを生成
    fn make_test_pdf(pages: &[&str]) -> Vec<u8> {
        build_pdf(pages, true)
    }

    /// `with_font` が偽ならページのリソースにフォントを登録しない
    fn build_pdf(pages: &[&str], with_font: bool) -> Vec<u8> {
        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = if with_font {
            doc.add_object(dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            })
        } else {
            doc.add_object(dictionary! {})
        };

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).expect("PDF保存失敗");
        buf
    }

    #[test]
    fn test_extract_text_single_page() {
        let pdf = make_test_pdf(&["Glucose 126 mg/dL"]);
        let text = extract_text(&pdf).unwrap();
        assert!(text.contains("Glucose"), "抽出結果: {text}");
    }

    #[test]
    fn test_extract_pages_in_order() {
        let pdf = make_test_pdf(&["FirstPage", "SecondPage"]);
        let pages = extract_pages(&pdf).unwrap();
        assert_eq!(pages.len(), 2);

        let text = extract_text(&pdf).unwrap();
        let first = text.find("FirstPage").expect("1ページ目がない");
        let second = text.find("SecondPage").expect("2ページ目がない");
        assert!(first < second);
    }

    #[test]
    fn test_extract_text_invalid_pdf() {
        let result = extract_text(b"this is not a pdf");
        assert!(matches!(result, Err(Error::Pdf(_))));
    }

    #[test]
    fn test_extract_text_missing_font_resource() {
        // 構文上は正しいが /F1 が未定義のページ（pdf-extract はパニックする）
        let pdf = build_pdf(&["Hemoglobin 13.5"], false);
        let result = extract_text(&pdf);
        assert!(matches!(result, Err(Error::Pdf(_))), "結果: {result:?}");
    }

    #[test]
    fn test_extract_reply_wire_format() {
        let ok = ExtractReply::from(Ok("Glucose".to_string()));
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"{"status":"text","value":"Glucose"}"#);

        let failed = ExtractReply::from(Err(Error::Pdf("invalid file header".to_string())));
        let decoded: ExtractReply = serde_json::from_str(&serde_json::to_string(&failed).unwrap()).unwrap();
        assert!(matches!(decoded.into_result(), Err(Error::Pdf(m)) if m == "invalid file header"));
    }
}

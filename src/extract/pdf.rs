//! PDF text extraction.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;

use crate::error::ExtractionFailure;

/// Extract the text of every page, in page order, joined by a single `\n`.
///
/// Trailing line breaks of each page are dropped so the separator is the only break between
/// pages and nothing trails the last one. Encrypted documents are rejected.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionFailure> {
    // The content-stream decoder can panic on malformed fonts or streams.
    catch_decoder_panic(|| read_pages(bytes))
}

fn catch_decoder_panic<F>(decode: F) -> Result<String, ExtractionFailure>
where
    F: FnOnce() -> Result<String, ExtractionFailure>,
{
    match panic::catch_unwind(AssertUnwindSafe(decode)) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(%message, "pdf decoder panicked");
            Err(ExtractionFailure::DecoderPanic(message))
        }
    }
}

fn read_pages(bytes: &[u8]) -> Result<String, ExtractionFailure> {
    let document = Document::load_mem(bytes)?;
    if document.trailer.get(b"Encrypt").is_ok() {
        return Err(ExtractionFailure::Encrypted);
    }

    let pages = document.get_pages();
    let mut texts: Vec<String> = Vec::with_capacity(pages.len());
    for &page_number in pages.keys() {
        let text = document.extract_text(&[page_number])?;
        texts.push(text.trim_end_matches(['\r', '\n']).to_string());
    }

    tracing::debug!(pages = texts.len(), "extracted pdf text");
    Ok(texts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoder_panic_becomes_an_error() {
        let err = catch_decoder_panic(|| panic!("bad font widths")).unwrap_err();
        assert!(matches!(err, ExtractionFailure::DecoderPanic(ref m) if m == "bad font widths"));

        let err = catch_decoder_panic(|| panic!("page {} has no contents", 3)).unwrap_err();
        assert!(matches!(err, ExtractionFailure::DecoderPanic(ref m) if m == "page 3 has no contents"));
    }

    #[test]
    fn decoder_result_passes_through() {
        assert_eq!(catch_decoder_panic(|| Ok("text".to_string())).unwrap(), "text");
        assert!(matches!(
            catch_decoder_panic(|| Err(ExtractionFailure::Encrypted)),
            Err(ExtractionFailure::Encrypted)
        ));
    }
}

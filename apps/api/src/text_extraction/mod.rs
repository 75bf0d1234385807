//! Text Extraction Service: turns an uploaded document into plain text for
//! the résumé parser.
//!
//! Extractors are tried in registration order; the first one that supports
//! the declared content type handles the file.

pub mod pdf;
pub mod plain;

use tracing::debug;

use crate::errors::AppError;

pub use pdf::PdfTextExtractor;
pub use plain::PlainTextExtractor;

/// One document format. Implementations are synchronous and may be
/// CPU-heavy; async callers should run them on the blocking pool.
pub trait TextExtractor: Send + Sync {
    /// Short format name for logs and error messages.
    fn format(&self) -> &'static str;

    fn supports(&self, content_type: &str) -> bool;

    fn extract(&self, bytes: &[u8]) -> Result<String, AppError>;
}

/// Media type without parameters, lower-cased: `Text/Plain; charset=utf-8` → `text/plain`.
pub(crate) fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

pub struct TextExtractorService {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl Default for TextExtractorService {
    fn default() -> Self {
        Self::new(vec![
            Box::new(PdfTextExtractor::new()),
            Box::new(PlainTextExtractor::new()),
        ])
    }
}

impl TextExtractorService {
    pub fn new(extractors: Vec<Box<dyn TextExtractor>>) -> Self {
        Self { extractors }
    }

    pub fn supported_formats(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.format()).collect()
    }

    pub fn extract(&self, bytes: &[u8], content_type: &str) -> Result<String, AppError> {
        if bytes.is_empty() {
            return Err(AppError::Validation(
                "No file provided or file is empty".to_string(),
            ));
        }

        let extractor = self
            .extractors
            .iter()
            .find(|e| e.supports(content_type))
            .ok_or_else(|| {
                AppError::UnsupportedMediaType(format!(
                    "File type '{content_type}' is not supported. Supported types: {}",
                    self.supported_formats().join(", ")
                ))
            })?;

        debug!(
            "Extracting text from {} bytes with the {} extractor",
            bytes.len(),
            extractor.format()
        );
        extractor.extract(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_essence_strips_parameters() {
        assert_eq!(essence("Text/Plain; charset=utf-8"), "text/plain");
        assert_eq!(essence("application/pdf"), "application/pdf");
        assert_eq!(essence(""), "");
    }

    #[test]
    fn test_dispatches_plain_text() {
        let service = TextExtractorService::default();
        let text = service
            .extract(b"Jane Doe\nSkills\nRust", "text/plain; charset=utf-8")
            .unwrap();
        assert_eq!(text, "Jane Doe\nSkills\nRust");
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        let service = TextExtractorService::default();
        assert!(matches!(
            service.extract(b"", "text/plain"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_unsupported_content_type() {
        let service = TextExtractorService::default();
        let err = service.extract(b"PK\x03\x04", "application/zip").unwrap_err();
        match err {
            AppError::UnsupportedMediaType(msg) => {
                assert!(msg.contains("application/zip"));
                assert!(msg.contains("PDF, TXT"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_first_supporting_extractor_wins() {
        struct Upper;
        impl TextExtractor for Upper {
            fn format(&self) -> &'static str {
                "UPPER"
            }
            fn supports(&self, content_type: &str) -> bool {
                essence(content_type) == "text/plain"
            }
            fn extract(&self, bytes: &[u8]) -> Result<String, AppError> {
                Ok(String::from_utf8_lossy(bytes).to_uppercase())
            }
        }

        let service = TextExtractorService::new(vec![
            Box::new(Upper),
            Box::new(PlainTextExtractor::new()),
        ]);
        assert_eq!(service.extract(b"rust", "text/plain").unwrap(), "RUST");
        assert_eq!(service.supported_formats(), vec!["UPPER", "TXT"]);
    }
}

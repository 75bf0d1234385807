use crate::errors::AppError;
use crate::text_extraction::{essence, TextExtractor};

/// PDF uploads via `pdf-extract`.
pub struct PdfTextExtractor;

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn format(&self) -> &'static str {
        "PDF"
    }

    fn supports(&self, content_type: &str) -> bool {
        essence(content_type) == "application/pdf"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, AppError> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::UnprocessableEntity(format!("PDF extraction error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_pdf_only() {
        let extractor = PdfTextExtractor::new();
        assert!(extractor.supports("application/pdf"));
        assert!(extractor.supports("Application/PDF"));
        assert!(!extractor.supports("text/plain"));
    }

    #[test]
    fn test_corrupt_pdf_is_unprocessable() {
        let err = PdfTextExtractor::new()
            .extract(b"definitely not a pdf")
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}

use crate::errors::AppError;
use crate::text_extraction::{essence, TextExtractor};

/// `text/plain` uploads, decoded as UTF-8 with invalid sequences replaced.
pub struct PlainTextExtractor;

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainTextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn format(&self) -> &'static str {
        "TXT"
    }

    fn supports(&self, content_type: &str) -> bool {
        essence(content_type) == "text/plain"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, AppError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(text.strip_prefix('\u{feff}').unwrap_or(&text[..]).to_string())
    }
}

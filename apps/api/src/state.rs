use std::sync::Arc;

use crate::config::Config;
use crate::extraction::{HeuristicResumeParser, ResumeParser};
use crate::store::{InMemoryProfileStore, ProfileStore};
use crate::text_extraction::TextExtractorService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable résumé parser. Default: `HeuristicResumeParser`.
    pub parser: Arc<dyn ResumeParser>,
    pub extractor: Arc<TextExtractorService>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl AppState {
    /// Default wiring: heuristic parser over the configured location table,
    /// PDF + plain-text extraction, in-memory profile store.
    pub fn new(config: Config) -> Self {
        let parser = HeuristicResumeParser::new(config.known_locations.clone());
        Self {
            config,
            parser: Arc::new(parser),
            extractor: Arc::new(TextExtractorService::default()),
            profiles: Arc::new(InMemoryProfileStore::default()),
        }
    }
}

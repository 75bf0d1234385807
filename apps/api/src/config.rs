use anyhow::{Context, Result};
use tracing::warn;

use crate::extraction::contact::default_known_locations;
use crate::models::profile::Address;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Largest accepted résumé upload.
    pub max_upload_bytes: usize,
    /// City/country pairs the address heuristic recognises.
    pub known_locations: Vec<Address>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            known_locations: default_known_locations(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut known_locations = default_known_locations();
        if let Ok(raw) = std::env::var("KNOWN_LOCATIONS") {
            known_locations.extend(parse_known_locations(&raw));
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            known_locations,
        })
    }
}

/// Parses `City:Country;City:Country`. Malformed pairs are skipped.
fn parse_known_locations(raw: &str) -> Vec<Address> {
    raw.split(';')
        .filter(|pair| !pair.trim().is_empty())
        .filter_map(|pair| {
            let parsed = pair
                .split_once(':')
                .map(|(city, country)| (city.trim(), country.trim()))
                .filter(|(city, country)| !city.is_empty() && !country.is_empty());
            if parsed.is_none() {
                warn!("Ignoring malformed KNOWN_LOCATIONS entry '{}'", pair.trim());
            }
            parsed.map(|(city, country)| Address {
                city: city.to_string(),
                country: country.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.known_locations, default_known_locations());
    }

    #[test]
    fn test_parse_known_locations() {
        let parsed = parse_known_locations(" Berlin : Germany ;Lisbon:Portugal;");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].city, "Berlin");
        assert_eq!(parsed[0].country, "Germany");
        assert_eq!(parsed[1].city, "Lisbon");
    }

    #[test]
    fn test_parse_known_locations_skips_malformed() {
        let parsed = parse_known_locations("Paris;:Spain;Oslo:Norway;Rome:");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].city, "Oslo");
    }
}

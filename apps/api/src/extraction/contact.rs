//! Header fields read from the top of the document or the raw text as a
//! whole, independent of sections.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::profile::{Address, Name};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern is valid")
});

// Relaxed international format, e.g. +7(778)419-92-87 or +1 555 123 45 67.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?[0-9]{1,3}[\s\-()]?[0-9]{3}[\s\-()]?[0-9]{3}[\s\-]?[0-9]{2}[\s\-]?[0-9]{2}")
        .expect("phone pattern is valid")
});

const ADDRESS_SCAN_LINES: usize = 10;

/// Location table used when no other is configured.
pub fn default_known_locations() -> Vec<Address> {
    vec![Address {
        city: "Astana".to_string(),
        country: "Kazakhstan".to_string(),
    }]
}

/// First token of line 0 is the first name, the rest the last name.
pub fn extract_name(lines: &[&str]) -> Option<Name> {
    let mut tokens = lines.first()?.split_whitespace();
    let first_name = tokens.next()?;
    let last_name = tokens.collect::<Vec<_>>().join(" ");
    if last_name.is_empty() {
        return None;
    }
    Some(Name {
        first_name: first_name.to_string(),
        last_name,
    })
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE.find(text).map(|m| m.as_str().to_string())
}

/// Returns the first known location whose city and country both appear on
/// one of the first ten lines.
pub fn extract_address(lines: &[&str], known_locations: &[Address]) -> Option<Address> {
    lines.iter().take(ADDRESS_SCAN_LINES).find_map(|line| {
        known_locations
            .iter()
            .find(|loc| line.contains(loc.city.as_str()) && line.contains(loc.country.as_str()))
            .cloned()
    })
}

/// True if the line names any known city or country.
pub fn mentions_known_location(line: &str, known_locations: &[Address]) -> bool {
    known_locations
        .iter()
        .any(|loc| line.contains(loc.city.as_str()) || line.contains(loc.country.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_two_tokens() {
        let name = extract_name(&["Jane Doe"]).unwrap();
        assert_eq!(name.first_name, "Jane");
        assert_eq!(name.last_name, "Doe");
    }

    #[test]
    fn test_name_joins_remaining_tokens() {
        let name = extract_name(&["Maria  de la   Cruz"]).unwrap();
        assert_eq!(name.first_name, "Maria");
        assert_eq!(name.last_name, "de la Cruz");
    }

    #[test]
    fn test_name_single_token_is_absent() {
        assert!(extract_name(&["Cher", "Doe"]).is_none());
        assert!(extract_name(&[]).is_none());
    }

    #[test]
    fn test_email_first_match() {
        let text = "Jane Doe\njane.doe+cv@example.co.uk | backup@example.com";
        assert_eq!(extract_email(text).as_deref(), Some("jane.doe+cv@example.co.uk"));
        assert!(extract_email("no contact details").is_none());
    }

    #[test]
    fn test_phone_with_parentheses() {
        let text = "Jane Doe | +7(778)419-92-87 | Astana";
        assert_eq!(extract_phone(text).as_deref(), Some("+7(778)419-92-87"));
    }

    #[test]
    fn test_phone_with_spaces() {
        assert_eq!(
            extract_phone("Tel: +1 555 123 45 67").as_deref(),
            Some("+1 555 123 45 67")
        );
    }

    #[test]
    fn test_phone_ignores_year_ranges() {
        assert!(extract_phone("Engineer 2019 - 2020").is_none());
    }

    #[test]
    fn test_address_found_in_header() {
        let lines = ["Jane Doe", "Astana, Kazakhstan | jane@example.com"];
        let address = extract_address(&lines, &default_known_locations()).unwrap();
        assert_eq!(address.city, "Astana");
        assert_eq!(address.country, "Kazakhstan");
    }

    #[test]
    fn test_address_needs_both_parts() {
        let lines = ["Jane Doe", "Astana"];
        assert!(extract_address(&lines, &default_known_locations()).is_none());
    }

    #[test]
    fn test_address_only_scans_first_ten_lines() {
        let mut lines = vec!["filler"; 10];
        lines.push("Astana, Kazakhstan");
        assert!(extract_address(&lines, &default_known_locations()).is_none());
    }

    #[test]
    fn test_address_uses_configured_table() {
        let known = vec![Address {
            city: "Berlin".to_string(),
            country: "Germany".to_string(),
        }];
        let lines = ["Jane Doe", "Berlin, Germany"];
        assert_eq!(extract_address(&lines, &known).unwrap().city, "Berlin");
    }

    #[test]
    fn test_mentions_known_location() {
        let known = default_known_locations();
        assert!(mentions_known_location("Kazakhstan", &known));
        assert!(!mentions_known_location("Boston, MA", &known));
    }
}

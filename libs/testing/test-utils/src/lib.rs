//! Shared test utilities for domain testing
//!
//! Ready-made event and source payloads for the domain crates and the web
//! app, shaped the way the admin form actually submits them.
//!
//! # Usage
//!
//! ```rust
//! use test_utils::fixtures;
//!
//! let input = fixtures::drift_event("Drift GP", "Zandvoort", "Netherlands", "2025-06-01T10:00");
//! assert_eq!(input.city, "Zandvoort");
//! ```

/// Ready-made payloads for the event and source domains
pub mod fixtures {
    use domain_events::CreateEvent;
    use domain_sources::CreateSource;
    use serde_json::json;

    /// A minimal valid event, dated with the `datetime-local` shape the
    /// admin form submits.
    pub fn drift_event(name: &str, city: &str, country: &str, starts_at: &str) -> CreateEvent {
        serde_json::from_value(json!({
            "name": name,
            "event_date": starts_at,
            "location": format!("{city}, {country}"),
            "city": city,
            "country": country
        }))
        .expect("valid event fixture")
    }

    /// The source row the admin form creates for hand-entered events
    pub fn manual_source(name: &str) -> CreateSource {
        serde_json::from_value(json!({
            "name": name,
            "url": "https://manual",
            "scraper_type": "manual",
            "scraper_config": {},
            "country_filter": ["Netherlands", "Germany", "Belgium", "France"],
            "is_active": true
        }))
        .expect("valid source fixture")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn event_fixture_parses_the_form_shape() {
        let input =
            fixtures::drift_event("Drift GP", "Zandvoort", "Netherlands", "2025-06-01T10:00");
        assert_eq!(input.name, "Drift GP");
        assert_eq!(input.location, "Zandvoort, Netherlands");
        assert!(input.is_active);
    }

    #[test]
    fn source_fixture_carries_manual_metadata() {
        let input = fixtures::manual_source("Manual Entry");
        assert_eq!(input.scraper_type.as_deref(), Some("manual"));
        assert_eq!(input.country_filter.len(), 4);
    }
}

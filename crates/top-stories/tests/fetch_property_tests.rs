//! Property-based tests for request validation.
//!
//! Valid identifiers always produce exactly one request with the right
//! parameters; invalid identifiers never reach the transport.

mod common;

use common::{client, API_KEY, SCIENCE_BODY};
use proptest::prelude::*;
use topstories::{FormatType, Section, StoriesClient, TopStoriesError};

// =============================================================================
// Generators
// =============================================================================

fn arb_section() -> impl Strategy<Value = Section> {
    proptest::sample::select(Section::ALL.to_vec())
}

fn arb_format() -> impl Strategy<Value = FormatType> {
    proptest::sample::select(FormatType::ALL.to_vec())
}

/// Identifiers that are not valid sections.
fn arb_unknown_section() -> impl Strategy<Value = String> {
    "[a-zA-Z-]{0,16}".prop_filter("must not be a known section", |s| {
        s.parse::<Section>().is_err()
    })
}

/// Identifiers that are neither `json` nor `jsonp`.
fn arb_unknown_format() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,8}".prop_filter("must not be a known format", |s| s != "json" && s != "jsonp")
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_valid_request_sends_once(section in arb_section(), format in arb_format()) {
        let client = client(200, SCIENCE_BODY);

        let result = client.fetch(section.as_str(), Some(format.as_str()), false);
        prop_assert!(result.is_ok());

        let requests = client.transport().requests();
        prop_assert_eq!(requests.len(), 1);
        let expected_suffix = format!("/{}.{}", section.as_str(), format.as_str());
        prop_assert!(requests[0].url.ends_with(&expected_suffix));
        prop_assert_eq!(requests[0].param("api-key"), Some(API_KEY));
    }

    #[test]
    fn prop_unknown_section_sends_nothing(
        section in arb_unknown_section(),
        format in arb_format(),
    ) {
        let client = client(200, SCIENCE_BODY);

        let result = client.fetch(&section, Some(format.as_str()), false);

        prop_assert!(matches!(result, Err(TopStoriesError::InvalidSection(_))));
        prop_assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn prop_unknown_format_sends_nothing(
        section in arb_section(),
        format in arb_unknown_format(),
    ) {
        let client = client(200, SCIENCE_BODY);

        let result = client.fetch(section.as_str(), Some(format.as_str()), false);

        prop_assert!(matches!(result, Err(TopStoriesError::InvalidFormat(_))));
        prop_assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn prop_non_empty_key_accepted(key in "[ \ta-zA-Z0-9_-]{1,32}") {
        prop_assert!(StoriesClient::new(key).is_ok());
    }
}

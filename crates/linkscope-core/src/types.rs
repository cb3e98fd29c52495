// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types for the two persisted collections.
//!
//! These types double as the wire shapes: JSON field names are camelCase
//! (`htmlVersion`, `hasLoginForm`, ...) to match the producer/consumer
//! contract of the companion frontend and crawler.

use serde::{Deserialize, Serialize};

/// A URL submitted for later crawling.
///
/// The id is assigned by the store at insertion and is monotonically
/// increasing within the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUrl {
    pub id: i64,
    pub url: String,
}

/// A completed crawl analysis record, as stored and returned by the API.
///
/// `error` is empty when the crawl succeeded. `inaccessible_links_list` is
/// an opaque serialized record of unreachable links, stored and returned
/// verbatim. `created_at` is assigned by the store at insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    pub id: i64,
    pub url: String,
    pub hostname: String,
    pub title: String,
    pub html_version: String,
    pub h1: i64,
    pub h2: i64,
    pub h3: i64,
    pub h4: i64,
    pub h5: i64,
    pub h6: i64,
    pub internal_links: i64,
    pub external_links: i64,
    pub inaccessible_links: i64,
    pub has_login_form: bool,
    pub error: String,
    pub inaccessible_links_list: String,
    pub created_at: String,
}

/// A crawl result as submitted by the external analyzer, before the store
/// assigns an id and timestamp.
///
/// Every field defaults to its zero value so a producer may omit fields it
/// did not compute; only malformed JSON or type mismatches are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCrawlResult {
    pub url: String,
    pub hostname: String,
    pub title: String,
    pub html_version: String,
    pub h1: i64,
    pub h2: i64,
    pub h3: i64,
    pub h4: i64,
    pub h5: i64,
    pub h6: i64,
    pub internal_links: i64,
    pub external_links: i64,
    pub inaccessible_links: i64,
    pub has_login_form: bool,
    pub error: String,
    pub inaccessible_links_list: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_url_serializes_with_plain_field_names() {
        let url = PendingUrl {
            id: 7,
            url: "https://example.com".to_string(),
        };
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#"{"id":7,"url":"https://example.com"}"#);
    }

    #[test]
    fn crawl_result_serializes_camel_case() {
        let result = CrawlResult {
            id: 1,
            url: "https://example.com".to_string(),
            hostname: "example.com".to_string(),
            title: "Example".to_string(),
            html_version: "HTML 5".to_string(),
            h1: 1,
            h2: 2,
            h3: 0,
            h4: 0,
            h5: 0,
            h6: 0,
            internal_links: 10,
            external_links: 3,
            inaccessible_links: 1,
            has_login_form: true,
            error: String::new(),
            inaccessible_links_list: "[\"https://example.com/dead\"]".to_string(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"htmlVersion\":\"HTML 5\""));
        assert!(json.contains("\"internalLinks\":10"));
        assert!(json.contains("\"hasLoginForm\":true"));
        assert!(json.contains("\"inaccessibleLinksList\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("html_version"));
    }

    #[test]
    fn new_crawl_result_zero_fills_missing_fields() {
        let json = r#"{"url": "https://example.com"}"#;
        let parsed: NewCrawlResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.url, "https://example.com");
        assert_eq!(parsed.hostname, "");
        assert_eq!(parsed.h1, 0);
        assert!(!parsed.has_login_form);
        assert_eq!(parsed.inaccessible_links_list, "");
    }

    #[test]
    fn new_crawl_result_rejects_type_mismatch() {
        let json = r#"{"h1": "not-a-number"}"#;
        assert!(serde_json::from_str::<NewCrawlResult>(json).is_err());
    }
}

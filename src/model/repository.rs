//! Repository records as loaded from the static dataset.
//!
//! Records are immutable after load. Timestamps are parsed exactly once,
//! when the dataset is deserialized; the raw text is kept for display.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ===== Timestamp =====

/// ISO-8601 timestamp as it appears in the dataset.
///
/// Accepted forms, tried in order:
/// - RFC 3339 (`2020-01-01T00:00:00Z`, `2020-01-01T08:00:00+08:00`)
/// - naive date-time (`2020-01-01T00:00:00`), read as UTC
/// - bare date (`2020-01-01`), midnight UTC
///
/// Anything else is kept verbatim with no instant. Such values order as the
/// Unix epoch when sorting (see [`Timestamp::sort_instant`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Timestamp {
    raw: String,
    instant: Option<DateTime<Utc>>,
}

impl Timestamp {
    /// Parse a raw timestamp. Never fails; unparseable input has no instant.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let instant = parse_instant(&raw);
        Self { raw, instant }
    }

    /// The text exactly as it appeared in the dataset.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed instant, if the raw text was understood.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    /// Whether the raw text parsed to an instant.
    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    /// Instant used for ordering. Unparseable timestamps sit at the epoch.
    pub fn sort_instant(&self) -> DateTime<Utc> {
        self.instant.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Short `YYYY-MM-DD` label, or the raw text if it never parsed.
    pub fn date_label(&self) -> String {
        match self.instant {
            Some(instant) => instant.format("%Y-%m-%d").to_string(),
            None => self.raw.clone(),
        }
    }
}

impl From<String> for Timestamp {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.raw
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}

// ===== Repository =====

/// One repository's metadata entry.
///
/// Unknown JSON fields are ignored so richer exports load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name. Non-empty; unique key for list rendering.
    pub name: String,
    /// Free-text description. `null` or missing in the dataset maps to `None`.
    #[serde(default)]
    pub description: Option<String>,
    /// Primary programming language, if GitHub detected one.
    #[serde(default)]
    pub language: Option<String>,
    /// Stargazer count.
    pub stars: u64,
    /// Fork count.
    pub forks: u64,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last update time.
    pub updated_at: Timestamp,
    /// Link to the repository page.
    pub url: String,
}

impl Repository {
    /// Description, or `fallback` when the record has none.
    pub fn description_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.description.as_deref().unwrap_or(fallback)
    }

    /// Language if present and non-empty.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|lang| !lang.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_parses_rfc3339() {
        let ts = Timestamp::parse("2014-12-24T17:49:19Z");
        assert_eq!(
            ts.instant(),
            Some(Utc.with_ymd_and_hms(2014, 12, 24, 17, 49, 19).unwrap())
        );
    }

    #[test]
    fn timestamp_parses_rfc3339_with_offset() {
        let ts = Timestamp::parse("2020-01-01T08:00:00+08:00");
        assert_eq!(
            ts.instant(),
            Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn timestamp_parses_naive_datetime_as_utc() {
        let ts = Timestamp::parse("2020-01-01T12:30:00");
        assert_eq!(
            ts.instant(),
            Some(Utc.with_ymd_and_hms(2020, 1, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn timestamp_parses_bare_date_as_midnight_utc() {
        let ts = Timestamp::parse("2019-01-01");
        assert_eq!(
            ts.instant(),
            Some(Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn unparseable_timestamp_sorts_at_epoch() {
        let ts = Timestamp::parse("not a date");
        assert!(!ts.is_valid());
        assert_eq!(ts.sort_instant(), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(ts.as_str(), "not a date");
    }

    #[test]
    fn date_label_falls_back_to_raw_text() {
        assert_eq!(Timestamp::parse("2018-05-15T01:34:26Z").date_label(), "2018-05-15");
        assert_eq!(Timestamp::parse("garbage").date_label(), "garbage");
    }

    #[test]
    fn repository_deserializes_with_null_description() {
        let json = r#"{
            "name": "Beta",
            "description": null,
            "stars": 50,
            "forks": 1,
            "language": "Rust",
            "created_at": "2019-01-01",
            "updated_at": "2022-01-01",
            "url": "https://example.com/beta",
            "license": "MIT"
        }"#;

        let repo: Repository = serde_json::from_str(json).expect("valid record");

        assert_eq!(repo.name, "Beta");
        assert_eq!(repo.description, None);
        assert_eq!(repo.language(), Some("Rust"));
        assert!(repo.created_at.is_valid());
    }

    #[test]
    fn repository_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "name": "Gamma",
            "stars": 0,
            "forks": 0,
            "created_at": "x",
            "updated_at": "y",
            "url": ""
        }"#;

        let repo: Repository = serde_json::from_str(json).expect("valid record");

        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
        assert_eq!(repo.description_or("No description"), "No description");
    }

    #[test]
    fn empty_language_reads_as_none() {
        let repo = Repository {
            name: "x".to_string(),
            description: None,
            language: Some(String::new()),
            stars: 0,
            forks: 0,
            created_at: Timestamp::parse("2020-01-01"),
            updated_at: Timestamp::parse("2020-01-01"),
            url: String::new(),
        };
        assert_eq!(repo.language(), None);
    }

    #[test]
    fn timestamp_serializes_as_raw_text() {
        let ts = Timestamp::parse("2021-01-01");
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"2021-01-01\"");
    }
}

//! Public types shared by the feed client, the gallery loader and the modal.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One Astronomy Picture of the Day record as published by the feed.
///
/// Every field is optional on the wire. Missing fields become empty strings and
/// non-string scalars are kept as their JSON text, so a record is never rejected
/// for its shape alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApodEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub explanation: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub media_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

impl ApodEntry {
    /// Media classification of this entry.
    pub fn media_kind(&self) -> MediaKind {
        MediaKind::classify(&self.media_type)
    }

    /// `"Date: {date}"`, rendered the same way whether or not the date is set.
    pub fn date_line(&self) -> String {
        format!("Date: {}", self.date)
    }

    /// Parsed publication date, when `date` is an ISO `YYYY-MM-DD` string.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Build an entry from one element of the feed array.
    ///
    /// Anything that is not a JSON object yields an entry of empty strings.
    pub fn from_json(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Media classification driving the three-way rendering rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// `media_type == "image"`
    Image,
    /// `media_type == "video"`
    Video,
    /// Anything else, including the empty string.
    Other(String),
}

impl MediaKind {
    /// Exact, case-sensitive classification.
    pub fn classify(media_type: &str) -> Self {
        match media_type {
            "image" => Self::Image,
            "video" => Self::Video,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::Other(raw) if raw.is_empty() => write!(f, "unknown"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Interpreted feed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedPayload {
    /// Non-empty array, in source order.
    Entries(Vec<ApodEntry>),
    /// Zero-length array or a body that is not an array at all.
    Empty,
}

impl FeedPayload {
    pub fn len(&self) -> usize {
        match self {
            Self::Entries(entries) => entries.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Turn a decoded JSON body into a [`FeedPayload`].
pub fn interpret_payload(body: Value) -> FeedPayload {
    match body {
        Value::Array(items) if !items.is_empty() => {
            FeedPayload::Entries(items.into_iter().map(ApodEntry::from_json).collect())
        }
        _ => FeedPayload::Empty,
    }
}

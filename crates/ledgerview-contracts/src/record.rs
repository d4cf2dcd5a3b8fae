//! The audit record as delivered by the audit service.
//!
//! Records are decoded leniently: string fields may be `null` or absent, and
//! the timestamp may arrive as epoch milliseconds or as an ISO-8601 string.
//! Nothing here validates the *meaning* of `action` or `resource_id`; the
//! upstream service is known to populate them in swapped positions, which
//! the repair step in ledgerview-core deals with.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Literal the audit service uses for "no value".
pub const NOT_AVAILABLE: &str = "N/A";

/// Marker the audit service writes when it failed to produce a value.
pub const ERROR_MARKER: &str = "ERROR";

/// One logged action, exactly as the audit service reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    /// When the action happened (UTC).  `None` if the service omitted it or
    /// sent something unparseable.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Actor identifier, often a pseudonymous hash.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_id: String,

    /// Nominally an operation tag such as `CREATE_PATIENT`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action: String,

    /// Nominally the affected entity's id or a `0x` content hash.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resource_id: String,

    /// Free-form details attached by the emitting service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Integrity hash of the record's payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_hash: Option<String>,

    /// Ledger transaction that anchored this record, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

impl AuditRecord {
    /// Build a record with the three descriptive fields set and everything
    /// else empty.
    pub fn new(
        user_id: impl Into<String>,
        action: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: None,
            user_id: user_id.into(),
            action: action.into(),
            resource_id: resource_id.into(),
            details: None,
            data_hash: None,
            transaction_hash: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_transaction_hash(mut self, hash: impl Into<String>) -> Self {
        self.transaction_hash = Some(hash.into());
        self
    }

    pub fn with_data_hash(mut self, hash: impl Into<String>) -> Self {
        self.data_hash = Some(hash.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// The transaction hash, treating an empty string as absent.
    pub fn transaction_hash(&self) -> Option<&str> {
        self.transaction_hash
            .as_deref()
            .filter(|hash| !hash.trim().is_empty())
    }
}

/// Return true if `value` carries no usable information.
///
/// Missing means one of:
/// - empty or whitespace only
/// - the literal `N/A` (any case)
/// - the error marker `ERROR` (any case), or a value starting with
///   `ERROR:` / `Error:`
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE)
        || trimmed.eq_ignore_ascii_case(ERROR_MARKER)
        || trimmed.starts_with("ERROR:")
        || trimmed.starts_with("Error:")
}

/// Parse a textual timestamp into a UTC instant.
///
/// Accepts RFC 3339 (`2024-03-01T10:15:00Z`, `...+02:00`), a naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` (or with a space instead of `T`) read as
/// UTC, or a string of digits holding epoch milliseconds.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis);
    }

    None
}

// ── serde helpers ─────────────────────────────────────────────────────────────

/// Wire shapes the audit service has been seen to use for `timestamp`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Decode a timestamp, degrading anything unreadable to `None`.
///
/// One bad row must not cost the caller the rest of the payload, so this
/// never fails; it logs and moves on.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;

    let parsed = match &raw {
        None => return Ok(None),
        Some(RawTimestamp::Millis(ms)) => DateTime::from_timestamp_millis(*ms),
        Some(RawTimestamp::FractionalMillis(ms)) => DateTime::from_timestamp_millis(*ms as i64),
        Some(RawTimestamp::Text(text)) => {
            if text.trim().is_empty() {
                return Ok(None);
            }
            parse_timestamp(text)
        }
        Some(RawTimestamp::Other(_)) => None,
    };

    if parsed.is_none() {
        match raw {
            Some(RawTimestamp::Text(text)) => {
                warn!(timestamp = %text, "unparseable audit timestamp; treating as absent")
            }
            _ => warn!("audit timestamp out of range or of an unsupported shape; treating as absent"),
        }
    }

    Ok(parsed)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

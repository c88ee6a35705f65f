//! String encoding for stored records and the invitation index.
//!
//! Records are JSON objects with camelCase field names. The `date` field is
//! written as an ISO calendar date (`2025-06-01`). On read it also accepts a
//! full RFC 3339 timestamp (`2025-06-01T07:00:00.000Z`), which is converted
//! to a calendar date in the system time zone.

use crate::{
    error::{InvitationError, Result},
    models::InvitationRecord,
};

const RECORD_CONTEXT: &str = "invitation record";
const INDEX_CONTEXT: &str = "invitation index";

/// Encodes a record for storage.
pub fn encode(record: &InvitationRecord) -> Result<String> {
    serde_json::to_string(record).map_err(|source| InvitationError::Serialization { source })
}

/// Decodes a stored record.
///
/// # Errors
///
/// Returns `InvitationError::Decode` if `raw` is not a JSON object of the
/// expected shape, or if its date cannot be read.
pub fn decode(raw: &str) -> Result<InvitationRecord> {
    decode_at(RECORD_CONTEXT, raw)
}

/// Decodes a stored record, naming `key` in any error.
pub(crate) fn decode_at(key: &str, raw: &str) -> Result<InvitationRecord> {
    serde_json::from_str(raw).map_err(|e| InvitationError::decode(key, e))
}

/// Encodes the list of known invitation IDs.
pub fn encode_ids(ids: &[String]) -> Result<String> {
    serde_json::to_string(ids).map_err(|source| InvitationError::Serialization { source })
}

/// Decodes the list of known invitation IDs.
pub fn decode_ids(raw: &str) -> Result<Vec<String>> {
    serde_json::from_str(raw).map_err(|e| InvitationError::decode(INDEX_CONTEXT, e))
}

/// Serde adapter for `Option<Date>` fields.
pub(crate) mod optional_date {
    use jiff::{civil::Date, tz::TimeZone, Timestamp};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.collect_str(date),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse(text).map(Some).map_err(D::Error::custom),
        }
    }

    fn parse(text: &str) -> Result<Date, String> {
        if let Ok(timestamp) = text.parse::<Timestamp>() {
            return Ok(timestamp.to_zoned(TimeZone::system()).date());
        }
        text.parse::<Date>()
            .map_err(|e| format!("invalid date '{text}': {e}"))
    }
}

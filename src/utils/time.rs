use chrono::DateTime;

use crate::models::{Result, ScorerError};

/// Parse a block timestamp as reported by the indexing API (RFC 3339 with a
/// trailing zone marker, e.g. `2024-03-01T12:00:00Z`) into epoch seconds,
/// interpreted as UTC. An empty or absent string maps to 0.
pub fn parse_block_timestamp(raw: &str) -> Result<i64> {
    if raw.is_empty() {
        return Ok(0);
    }

    let parsed = DateTime::parse_from_rfc3339(raw).map_err(|source| ScorerError::TimestampError {
        raw: raw.to_string(),
        source,
    })?;

    Ok(parsed.timestamp())
}

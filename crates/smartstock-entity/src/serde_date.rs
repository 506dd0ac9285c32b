//! Lenient date parsing for optional calendar dates.
//!
//! Browsers send either `2025-03-01` or a full timestamp such as
//! `2025-03-01T00:00:00`; only the date part is kept.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => {
            let date_part = text.get(..10).unwrap_or(text);
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid date '{text}': {e}")))
        }
    }
}

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BookingError, Result};

// ---------------------------------------------------------------------------
// TimeSlot — an `HH:MM` time of day
// ---------------------------------------------------------------------------

/// A bookable time of day in `HH:MM` form.
///
/// Values built with [`From`] are taken as-is, which is what the selection
/// state expects from the presentation layer. Values coming from seed files go
/// through [`TimeSlot::parse`] during deserialization and are rejected when they
/// are not a valid `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(String);

impl TimeSlot {
    /// Parse and validate an `HH:MM` string.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        parse_hh_mm(trimmed).ok_or_else(|| {
            BookingError::InvalidArgument(format!("time slot must be HH:MM, got {:?}", value))
        })?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The slot as a [`NaiveTime`], if it holds a valid `HH:MM` value.
    pub fn to_time(&self) -> Option<NaiveTime> {
        parse_hh_mm(&self.0)
    }
}

/// Exactly two hour digits, a colon, two minute digits.
fn parse_hh_mm(value: &str) -> Option<NaiveTime> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeSlot {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.0
    }
}

impl PartialEq<&str> for TimeSlot {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeSlot;

// ---------------------------------------------------------------------------
// BookingRecord — an open ticket (comanda) or a confirmed reservation
// ---------------------------------------------------------------------------

/// A single appointment. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    /// Empty for reservations listed on the client's own screen.
    #[serde(default)]
    pub client_name: String,
    pub service_name: String,
    pub price: Decimal,
    pub date: NaiveDate,
    pub time: TimeSlot,
    #[serde(default)]
    pub professional_name: Option<String>,
}

impl BookingRecord {
    pub fn new(
        id: impl Into<String>,
        client_name: impl Into<String>,
        service_name: impl Into<String>,
        price: Decimal,
        date: NaiveDate,
        time: impl Into<TimeSlot>,
    ) -> Self {
        Self {
            id: id.into(),
            client_name: client_name.into(),
            service_name: service_name.into(),
            price,
            date,
            time: time.into(),
            professional_name: None,
        }
    }

    pub fn with_professional(mut self, name: impl Into<String>) -> Self {
        self.professional_name = Some(name.into());
        self
    }
}

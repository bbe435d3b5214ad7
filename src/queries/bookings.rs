//! Booking record queries over a [`BookingStore`].
//!
//! Used for both open tickets and reservations; the store decides which.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::filter::{filter_by_date_range, DateRange};
use crate::models::BookingRecord;
use crate::store::BookingStore;

// ---------------------------------------------------------------------------
// SearchBookingsParams
// ---------------------------------------------------------------------------

/// Parameters for the booking search method. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct SearchBookingsParams {
    /// Substring of the client name (case-insensitive).
    pub client: Option<String>,
    /// Exact service name (case-insensitive).
    pub service: Option<String>,
    /// Exact professional name (case-insensitive).
    pub professional: Option<String>,
    pub range: Option<DateRange>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

// ---------------------------------------------------------------------------
// BookingQuery
// ---------------------------------------------------------------------------

/// Query interface for booking records held in a store.
pub struct BookingQuery<'a> {
    store: &'a BookingStore,
}

impl<'a> BookingQuery<'a> {
    /// Create a new `BookingQuery` bound to the given store.
    pub fn new(store: &'a BookingStore) -> Self {
        Self { store }
    }

    /// Every record, in insertion order.
    pub fn all(&self) -> &'a [BookingRecord] {
        self.store.get_all()
    }

    pub fn get(&self, id: &str) -> Option<&'a BookingRecord> {
        self.store.get(id)
    }

    /// Records dated within `[start, end]`, both inclusive.
    ///
    /// An inverted window (`start > end`) yields an empty list.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Vec<BookingRecord> {
        filter_by_date_range(self.store.get_all(), &DateRange::new(start, end))
    }

    /// Records on a single day, ordered by time of day.
    ///
    /// Records with equal times keep their insertion order.
    pub fn on(&self, date: NaiveDate) -> Vec<BookingRecord> {
        let mut day = filter_by_date_range(self.store.get_all(), &DateRange::day(date));
        day.sort_by(|a, b| a.time.to_time().cmp(&b.time.to_time()));
        day
    }

    pub fn by_service(&self, service: &str) -> Vec<&'a BookingRecord> {
        self.store
            .get_all()
            .iter()
            .filter(|r| r.service_name.eq_ignore_ascii_case(service))
            .collect()
    }

    pub fn by_professional(&self, professional: &str) -> Vec<&'a BookingRecord> {
        self.store
            .get_all()
            .iter()
            .filter(|r| {
                r.professional_name
                    .as_deref()
                    .map(|p| p.eq_ignore_ascii_case(professional))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Search with any combination of filters, then paginate.
    pub fn search(&self, params: &SearchBookingsParams) -> Vec<&'a BookingRecord> {
        let client = params.client.as_ref().map(|c| c.to_lowercase());

        self.store
            .get_all()
            .iter()
            .filter(|r| {
                if let Some(ref c) = client {
                    if !r.client_name.to_lowercase().contains(c) {
                        return false;
                    }
                }
                if let Some(ref s) = params.service {
                    if !r.service_name.eq_ignore_ascii_case(s) {
                        return false;
                    }
                }
                if let Some(ref p) = params.professional {
                    let matches = r
                        .professional_name
                        .as_deref()
                        .map(|name| name.eq_ignore_ascii_case(p))
                        .unwrap_or(false);
                    if !matches {
                        return false;
                    }
                }
                if let Some(range) = params.range {
                    if !range.contains(r.date) {
                        return false;
                    }
                }
                true
            })
            .skip(params.offset.unwrap_or(0))
            .take(params.limit.unwrap_or(usize::MAX))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Sum of prices, optionally limited to a date window.
    pub fn total_price(&self, range: Option<&DateRange>) -> Decimal {
        self.store
            .get_all()
            .iter()
            .filter(|r| range.map(|w| w.contains(r.date)).unwrap_or(true))
            .map(|r| r.price)
            .sum()
    }
}

//! In-memory booking record store.
//!
//! A store is built once from the sequence handed over by the data loader and
//! is read-only afterwards. Construction is the only place record invariants
//! are checked: ids must be unique, prices non-negative and times `HH:MM`.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{BookingError, Result};
use crate::models::BookingRecord;

/// The authoritative ordered sequence of [`BookingRecord`] for one session.
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    records: Vec<BookingRecord>,
}

impl BookingStore {
    /// Build a store from an initial sequence, preserving its order.
    ///
    /// Fails with [`BookingError::InvalidArgument`] on a duplicate id, a
    /// negative price or a time that is not `HH:MM`.
    pub fn new(records: Vec<BookingRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(BookingError::InvalidArgument(format!(
                    "duplicate booking id: {}",
                    record.id
                )));
            }
            if record.price < Decimal::ZERO {
                return Err(BookingError::InvalidArgument(format!(
                    "booking {} has negative price {}",
                    record.id, record.price
                )));
            }
            if record.time.to_time().is_none() {
                return Err(BookingError::InvalidArgument(format!(
                    "booking {} has malformed time {:?}",
                    record.id,
                    record.time.as_str()
                )));
            }
        }
        debug!(count = records.len(), "booking store loaded");
        Ok(Self { records })
    }

    /// Every record, in insertion order.
    pub fn get_all(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&BookingRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

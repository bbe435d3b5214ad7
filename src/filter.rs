//! Date-range filtering over booking records.
//!
//! [`filter_by_date_range`] is the pure selection step. [`DateRangeFilter`] is
//! the state a tickets screen keeps around it: the chosen window and the
//! outcome of the last search.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::models::BookingRecord;
use crate::store::BookingStore;

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// An inclusive `[start, end]` window of calendar dates.
///
/// `start <= end` is not enforced. An inverted window contains no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A single-day window.
    pub fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Select the records dated within `range`, keeping their relative order.
///
/// Both bounds are inclusive. Returns a new vector and never touches `records`.
pub fn filter_by_date_range(records: &[BookingRecord], range: &DateRange) -> Vec<BookingRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.date))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// DateRangeFilter
// ---------------------------------------------------------------------------

/// Result of the last filter run.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterOutcome {
    /// No search has been run since creation or the last [`DateRangeFilter::clear`].
    #[default]
    Unfiltered,
    /// A search ran and matched nothing.
    Empty,
    /// A search ran and matched at least one record.
    Matched(Vec<BookingRecord>),
}

/// Screen-level date filter state.
#[derive(Debug, Clone)]
pub struct DateRangeFilter {
    range: DateRange,
    outcome: FilterOutcome,
}

impl Default for DateRangeFilter {
    /// Both bounds start on today's local date.
    fn default() -> Self {
        Self::new(DateRange::day(Local::now().date_naive()))
    }
}

impl DateRangeFilter {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            outcome: FilterOutcome::Unfiltered,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Change the start date. The last outcome is kept until the next `apply`.
    pub fn set_start(&mut self, start: NaiveDate) {
        self.range.start = start;
    }

    /// Change the end date. The last outcome is kept until the next `apply`.
    pub fn set_end(&mut self, end: NaiveDate) {
        self.range.end = end;
    }

    /// Run the filter against `store` and remember the outcome.
    pub fn apply(&mut self, store: &BookingStore) -> &FilterOutcome {
        let matched = filter_by_date_range(store.get_all(), &self.range);
        debug!(
            start = %self.range.start,
            end = %self.range.end,
            matched = matched.len(),
            "applied date filter"
        );
        self.outcome = if matched.is_empty() {
            FilterOutcome::Empty
        } else {
            FilterOutcome::Matched(matched)
        };
        &self.outcome
    }

    /// Forget the last outcome.
    pub fn clear(&mut self) {
        self.outcome = FilterOutcome::Unfiltered;
    }

    pub fn outcome(&self) -> &FilterOutcome {
        &self.outcome
    }

    pub fn is_applied(&self) -> bool {
        !matches!(self.outcome, FilterOutcome::Unfiltered)
    }

    /// Records matched by the last search, empty if none ran.
    pub fn filtered_results(&self) -> &[BookingRecord] {
        match &self.outcome {
            FilterOutcome::Matched(records) => records,
            FilterOutcome::Unfiltered | FilterOutcome::Empty => &[],
        }
    }

    /// Records the list should show: everything before a search, the search
    /// results afterwards (possibly none).
    pub fn displayed<'a>(&'a self, store: &'a BookingStore) -> &'a [BookingRecord] {
        match &self.outcome {
            FilterOutcome::Unfiltered => store.get_all(),
            FilterOutcome::Empty => &[],
            FilterOutcome::Matched(records) => records,
        }
    }
}

//! Booking core for a barbershop/salon app.
//!
//! Holds a session's open tickets and reservations in memory, filters them by
//! date window, and tracks the professional and time slot picked while
//! scheduling. Seed data is read from JSON files in a data directory, falling
//! back to the demo data the app ships with.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use salon_booking::SalonBooking;
//!
//! let salon = SalonBooking::builder().build().unwrap();
//!
//! // Open tickets in the last week of November
//! let tickets = salon.tickets().between(
//!     NaiveDate::from_ymd_opt(2024, 11, 24).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(),
//! );
//!
//! // Pick a professional and a slot
//! let mut session = salon.scheduling();
//! session.select_professional("2");
//! session.select_time_slot("10:00");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod forms;
pub mod loader;
pub mod models;
pub mod queries;
pub mod selection;
pub mod store;

pub use catalog::Catalog;
pub use error::{BookingError, Result};
pub use filter::{filter_by_date_range, DateRange, DateRangeFilter, FilterOutcome};
pub use loader::SeedLoader;
pub use selection::{SchedulingSession, Selection, SelectionState};
pub use store::BookingStore;

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// SalonBookingBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SalonBooking`] session.
pub struct SalonBookingBuilder {
    data_dir: Option<PathBuf>,
    builtin_fallback: bool,
}

impl Default for SalonBookingBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            builtin_fallback: true,
        }
    }
}

impl SalonBookingBuilder {
    /// Set a custom data directory.
    ///
    /// If not set, the platform data directory is used (e.g.
    /// `~/.local/share/salon-booking` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable falling back to the builtin demo data when a seed file
    /// is missing. Defaults to `true`.
    pub fn builtin_fallback(mut self, enabled: bool) -> Self {
        self.builtin_fallback = enabled;
        self
    }

    /// Load every seed file and build the session.
    pub fn build(self) -> Result<SalonBooking> {
        let loader = SeedLoader::new(self.data_dir, self.builtin_fallback);
        let catalog = Catalog::load(&loader)?;
        Ok(SalonBooking {
            data_dir: loader.data_dir,
            catalog,
        })
    }
}

// ---------------------------------------------------------------------------
// SalonBooking
// ---------------------------------------------------------------------------

/// One app session: the loaded catalog plus query and state accessors.
///
/// Created via [`SalonBooking::builder()`] or [`SalonBooking::from_catalog`].
pub struct SalonBooking {
    data_dir: PathBuf,
    catalog: Catalog,
}

impl SalonBooking {
    /// Create a new builder for configuring the session.
    pub fn builder() -> SalonBookingBuilder {
        SalonBookingBuilder::default()
    }

    /// Wrap an already-built catalog, bypassing the loader.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            data_dir: PathBuf::new(),
            catalog,
        }
    }

    // -- Query accessors ---------------------------------------------------

    /// Open tickets (comandas) of the establishment.
    pub fn tickets(&self) -> queries::BookingQuery<'_> {
        queries::BookingQuery::new(&self.catalog.tickets)
    }

    /// The client's reservations.
    pub fn reservations(&self) -> queries::BookingQuery<'_> {
        queries::BookingQuery::new(&self.catalog.reservations)
    }

    pub fn professionals(&self) -> queries::ProfessionalQuery<'_> {
        queries::ProfessionalQuery::new(&self.catalog.professionals)
    }

    pub fn favorites(&self) -> queries::FavoriteQuery<'_> {
        queries::FavoriteQuery::new(&self.catalog.favorites)
    }

    /// Offered time slots, in display order.
    pub fn time_slots(&self) -> &[models::TimeSlot] {
        &self.catalog.time_slots
    }

    // -- Screen state ------------------------------------------------------

    /// Start a scheduling flow with nothing selected.
    pub fn scheduling(&self) -> SchedulingSession<'_> {
        SchedulingSession::new(&self.catalog.professionals, &self.catalog.time_slots)
    }

    /// A fresh ticket date filter, both bounds on today.
    pub fn ticket_filter(&self) -> DateRangeFilter {
        DateRangeFilter::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl fmt::Display for SalonBooking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SalonBooking(data_dir={}, tickets={}, reservations={}, professionals={})",
            self.data_dir.display(),
            self.catalog.tickets.len(),
            self.catalog.reservations.len(),
            self.catalog.professionals.len()
        )
    }
}

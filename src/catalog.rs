//! Session-scoped data: booking stores plus the reference lists screens need.

use tracing::info;

use crate::error::Result;
use crate::loader::SeedLoader;
use crate::models::{Favorite, Professional, TimeSlot};
use crate::store::BookingStore;

/// Everything loaded for one session. Created at session start, dropped at
/// session end; nothing here is shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Open tickets (comandas) for the establishment.
    pub tickets: BookingStore,
    /// The client's confirmed reservations.
    pub reservations: BookingStore,
    pub professionals: Vec<Professional>,
    pub time_slots: Vec<TimeSlot>,
    pub favorites: Vec<Favorite>,
}

impl Catalog {
    /// Load every seed through `loader`.
    pub fn load(loader: &SeedLoader) -> Result<Self> {
        let catalog = Self {
            tickets: BookingStore::new(loader.load_tickets()?)?,
            reservations: BookingStore::new(loader.load_reservations()?)?,
            professionals: loader.load_professionals()?,
            time_slots: loader.load_time_slots()?,
            favorites: loader.load_favorites()?,
        };
        info!(
            tickets = catalog.tickets.len(),
            reservations = catalog.reservations.len(),
            professionals = catalog.professionals.len(),
            time_slots = catalog.time_slots.len(),
            favorites = catalog.favorites.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

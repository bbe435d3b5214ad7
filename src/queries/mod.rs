//! Query modules over a loaded [`Catalog`](crate::catalog::Catalog).
//!
//! Each module provides a query struct that borrows from the catalog (or one of
//! its stores) and returns borrowed records. Everything is in memory, so the
//! queries cannot fail.

pub mod bookings;
pub mod favorites;
pub mod professionals;

pub use bookings::{BookingQuery, SearchBookingsParams};
pub use favorites::FavoriteQuery;
pub use professionals::ProfessionalQuery;

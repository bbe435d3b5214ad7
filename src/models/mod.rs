pub mod booking;
pub mod favorite;
pub mod professional;
pub mod time_slot;

pub use booking::*;
pub use favorite::*;
pub use professional::*;
pub use time_slot::*;

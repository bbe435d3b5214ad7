use std::collections::HashMap;
use std::path::PathBuf;

/// Time slots offered by the scheduling screen, in display order.
pub const DEFAULT_TIME_SLOTS: &[&str] = &["10:00", "11:00", "12:00", "10:30", "11:30", "12:30"];

pub fn seed_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        // Open tickets (comandas)
        ("tickets", "tickets.json"),
        // Confirmed reservations
        ("reservations", "reservations.json"),
        ("professionals", "professionals.json"),
        ("time_slots", "time_slots.json"),
        ("favorites", "favorites.json"),
    ])
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("salon-booking")
    } else {
        PathBuf::from(".salon-booking-data")
    }
}

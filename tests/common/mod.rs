//! Shared test fixtures for the salon-booking integration tests.
//!
//! Provides `setup_sample_dir()` which writes a small set of seed files into a
//! temporary data directory, and `sample_records()` for tests that work on
//! records directly.

#![allow(dead_code)]

use chrono::NaiveDate;
use flate2::write::GzEncoder;
use flate2::Compression;
use rust_decimal::Decimal;
use salon_booking::models::BookingRecord;
use salon_booking::SalonBooking;
use std::io::Write;
use std::path::Path;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn record(id: &str, date: NaiveDate) -> BookingRecord {
    BookingRecord::new(id, "Client", "Corte", Decimal::new(3500, 2), date, "11:30")
}

/// The two open tickets from the establishment's demo data.
pub fn sample_records() -> Vec<BookingRecord> {
    vec![
        BookingRecord::new(
            "1",
            "Heber Stein Mazutti",
            "Corte",
            Decimal::new(3500, 2),
            date(2024, 12, 1),
            "11:30",
        ),
        BookingRecord::new(
            "2",
            "João Silva",
            "Barba",
            Decimal::new(2000, 2),
            date(2024, 11, 27),
            "14:00",
        ),
    ]
}

/// Create a temporary data directory holding every seed file.
///
/// The caller must keep the `TempDir` alive for the duration of the test.
pub fn setup_sample_dir() -> tempfile::TempDir {
    let tmp_dir = tempfile::tempdir().unwrap();
    let dir = tmp_dir.path();

    write_json(
        dir,
        "tickets.json",
        &serde_json::json!([
            {"id": "t1", "clientName": "Ana Souza", "serviceName": "Corte", "price": "35.00", "date": "2024-12-01", "time": "11:30", "professionalName": "Kaio"},
            {"id": "t2", "clientName": "João Silva", "serviceName": "Barba", "price": "20.00", "date": "2024-11-27", "time": "14:00", "professionalName": "Kauan"},
            {"id": "t3", "clientName": "Bruno Lima", "serviceName": "Corte", "price": "40.00", "date": "2024-12-01", "time": "09:00", "professionalName": "Kaio"},
            {"id": "t4", "clientName": "Carla Dias", "serviceName": "Tonalização", "price": "30.00", "date": "2024-12-15", "time": "16:30"}
        ]),
    );
    write_json(
        dir,
        "reservations.json",
        &serde_json::json!({"data": [
            {"id": "r1", "serviceName": "Barba Prime", "price": "50.00", "date": "2024-12-01", "time": "10:30", "professionalName": "Kaio"}
        ]}),
    );
    write_json(
        dir,
        "professionals.json",
        &serde_json::json!([
            {"id": "1", "name": "Emanuel"},
            {"id": "2", "name": "Kauan"},
            {"id": "3", "name": "Kaio"}
        ]),
    );
    write_json(dir, "time_slots.json", &serde_json::json!(["09:00", "09:30", "10:00"]));
    write_json(
        dir,
        "favorites.json",
        &serde_json::json!([
            {"id": "1", "name": "Glamour Studio", "rating": 4.9, "address": "Rua Campos Sales, 647"},
            {"id": "2", "name": "ShopBarber", "rating": 5.0, "address": "Rua Campos Sales, 647", "imageUrl": "https://example.com/shop.png"}
        ]),
    );

    tmp_dir
}

/// Build a session over `setup_sample_dir()` with builtin fallback disabled.
pub fn setup_sample_salon() -> (SalonBooking, tempfile::TempDir) {
    let tmp_dir = setup_sample_dir();
    let salon = SalonBooking::builder()
        .data_dir(tmp_dir.path())
        .builtin_fallback(false)
        .build()
        .unwrap();
    (salon, tmp_dir)
}

pub fn write_json(dir: &Path, filename: &str, value: &serde_json::Value) {
    std::fs::write(dir.join(filename), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

pub fn write_json_gz(dir: &Path, filename: &str, value: &serde_json::Value) {
    let file = std::fs::File::create(dir.join(filename)).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(serde_json::to_string(value).unwrap().as_bytes())
        .unwrap();
    encoder.finish().unwrap();
}

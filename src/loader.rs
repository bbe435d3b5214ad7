//! Seed data loader.
//!
//! Reads the session's initial tickets, reservations, professionals, time slots
//! and favorites from JSON files in a data directory. Files may be plain
//! `.json` or gzipped `.json.gz`, and may hold either a bare array or a
//! `{ "data": [...] }` wrapper. When a file is missing and builtin fallback is
//! enabled, the demo data shipped with the app is used instead.
//!
//! This is the boundary where malformed input is rejected: dates, times and
//! prices are parsed into typed values here, so the store and filter only ever
//! see well-formed records.

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config;
use crate::error::{BookingError, Result};
use crate::models::{BookingRecord, Favorite, Professional, TimeSlot};

/// Loads seed files from a data directory.
pub struct SeedLoader {
    /// Directory holding the seed files.
    pub data_dir: PathBuf,
    /// If true, a missing seed file falls back to the builtin demo data.
    pub builtin_fallback: bool,
}

impl SeedLoader {
    /// Create a new loader.
    ///
    /// If `data_dir` is `None`, uses the platform-appropriate default data directory.
    /// The directory is not created; a missing directory behaves like missing files.
    pub fn new(data_dir: Option<PathBuf>, builtin_fallback: bool) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(config::default_data_dir),
            builtin_fallback,
        }
    }

    /// Locate the seed file for a logical name, preferring plain JSON over gzip.
    pub fn seed_path(&self, name: &str) -> Result<Option<PathBuf>> {
        let seed_files = config::seed_files();
        let filename = seed_files
            .get(name)
            .ok_or_else(|| BookingError::NotFound(format!("Unknown seed file: {}", name)))?;

        let plain = self.data_dir.join(filename);
        if plain.exists() {
            return Ok(Some(plain));
        }
        let gz = self.data_dir.join(format!("{}.gz", filename));
        if gz.exists() {
            return Ok(Some(gz));
        }
        Ok(None)
    }

    /// Load a seed file as JSON, with the `data` wrapper removed.
    pub fn load_json(&self, name: &str) -> Result<Value> {
        match self.seed_path(name)? {
            Some(path) => {
                debug!(path = %path.display(), "reading seed file");
                let value = read_json(&path).map_err(|e| {
                    warn!(path = %path.display(), error = %e, "unreadable seed file");
                    e
                })?;
                Ok(extract_data(value))
            }
            None if self.builtin_fallback => {
                info!(name, "seed file not found, using builtin data");
                builtin_seed(name)
                    .ok_or_else(|| BookingError::NotFound(format!("No builtin seed for {}", name)))
            }
            None => Err(BookingError::NotFound(format!(
                "Seed file for {} not found in {} and builtin fallback is disabled",
                name,
                self.data_dir.display()
            ))),
        }
    }

    /// Load a seed file and deserialize it as a list of `T`.
    pub fn load_list<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let value = self.load_json(name)?;
        match value {
            Value::Array(_) => Ok(serde_json::from_value(value)?),
            other => Err(BookingError::InvalidArgument(format!(
                "Seed {} must be a JSON array, got {}",
                name,
                kind_of(&other)
            ))),
        }
    }

    pub fn load_tickets(&self) -> Result<Vec<BookingRecord>> {
        self.load_list("tickets")
    }

    pub fn load_reservations(&self) -> Result<Vec<BookingRecord>> {
        self.load_list("reservations")
    }

    pub fn load_professionals(&self) -> Result<Vec<Professional>> {
        self.load_list("professionals")
    }

    pub fn load_time_slots(&self) -> Result<Vec<TimeSlot>> {
        self.load_list("time_slots")
    }

    /// Load favorites, rejecting ratings outside `0.0..=5.0`.
    pub fn load_favorites(&self) -> Result<Vec<Favorite>> {
        let favorites: Vec<Favorite> = self.load_list("favorites")?;
        if let Some(bad) = favorites
            .iter()
            .find(|f| !(f.rating.is_finite() && (0.0..=5.0).contains(&f.rating)))
        {
            return Err(BookingError::InvalidArgument(format!(
                "favorite {} has rating {} outside 0.0..=5.0",
                bad.id, bad.rating
            )));
        }
        Ok(favorites)
    }
}

/// Read a JSON file (handles `.gz` transparently).
fn read_json(path: &Path) -> Result<Value> {
    let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
        let mut contents = String::new();
        decoder.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Extract the `"data"` field from a JSON wrapper, or return the value as-is
/// if there is no wrapper.
fn extract_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Builtin demo data
// ---------------------------------------------------------------------------

/// The demo data the app ships with, keyed by seed name.
pub fn builtin_seed(name: &str) -> Option<Value> {
    let value = match name {
        "tickets" => json!([
            {
                "id": "1",
                "clientName": "Heber Stein Mazutti",
                "serviceName": "Corte",
                "price": "35.00",
                "date": "2024-12-01",
                "time": "11:30"
            },
            {
                "id": "2",
                "clientName": "João Silva",
                "serviceName": "Barba",
                "price": "20.00",
                "date": "2024-11-27",
                "time": "14:00"
            }
        ]),
        "reservations" => json!([
            {
                "id": "1",
                "serviceName": "Tonalização",
                "price": "30.00",
                "date": "2024-12-12",
                "time": "16:30",
                "professionalName": "Kaio"
            },
            {
                "id": "2",
                "serviceName": "Barba Prime",
                "price": "50.00",
                "date": "2024-12-01",
                "time": "10:30",
                "professionalName": "Kaio"
            }
        ]),
        "professionals" => json!([
            { "id": "1", "name": "Emanuel" },
            { "id": "2", "name": "Kauan" },
            { "id": "3", "name": "Kaio" }
        ]),
        "time_slots" => json!(config::DEFAULT_TIME_SLOTS),
        "favorites" => json!([
            { "id": "1", "name": "Glamour Studio", "rating": 4.9, "address": "Rua Campos Sales, 647" },
            { "id": "2", "name": "Barbearia na Porta", "rating": 4.9, "address": "Rua Campos Sales, 647" },
            { "id": "3", "name": "ShopBarber", "rating": 5.0, "address": "Rua Campos Sales, 647" }
        ]),
        _ => return None,
    };
    Some(value)
}

//! Seat status records sourced from a static JSON file.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Occupancy state of a seat on the grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    #[default]
    Available,
    Reserved,
    Occupied,
}

impl SeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Reserved => "reserved",
            SeatStatus::Occupied => "occupied",
        }
    }
}

/// One entry in the seat status file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatRecord {
    pub seat: String,
    pub status: SeatStatus,
}

/// Root of the seat status file: `{"seats": [{"seat": "A1-1", "status": "reserved"}, ...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeatFile {
    #[serde(default)]
    seats: Vec<SeatRecord>,
}

/// Seat statuses loaded once at startup. Seats absent from the file are
/// available.
#[derive(Debug, Clone, Default)]
pub struct SeatMap {
    statuses: HashMap<String, SeatStatus>,
}

impl SeatMap {
    /// Load statuses from the configured JSON file. A missing or malformed
    /// file logs a warning and leaves every seat available.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Could not read seat status file {:?}: {}", path, e);
                return Self::default();
            }
        };

        match serde_json::from_str::<SeatFile>(&raw) {
            Ok(file) => Self {
                statuses: file
                    .seats
                    .into_iter()
                    .map(|r| (r.seat, r.status))
                    .collect(),
            },
            Err(e) => {
                tracing::warn!("Could not parse seat status file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn status_of(&self, seat: &str) -> SeatStatus {
        self.statuses.get(seat).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

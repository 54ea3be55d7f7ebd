//! Sortable city table view model.

use serde::{Deserialize, Serialize};

use crate::models::City;

/// One row of the city table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRow {
    pub name: String,
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Epoch millis of the most recent detected outage, if any
    pub last_outage: Option<i64>,
}

impl CityRow {
    pub fn from_city(city: &City, last_outage: Option<i64>) -> Self {
        Self {
            name: city.name.to_string(),
            id: city.id.to_string(),
            lat: city.lat,
            lng: city.lng,
            country: city.country.to_string(),
            region: city.region.map(str::to_string),
            last_outage,
        }
    }
}

/// Column the table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    Country,
    /// Lexicographic on (latitude, longitude)
    Coordinates,
    LastOutage,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current sort selection with the table's toggle semantics: reselecting
/// the active key flips the direction, selecting a new key resets to
/// ascending.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Apply a header click for `key` and return the resulting state.
    pub fn toggle(self, key: SortKey) -> Self {
        if key == self.key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Sort rows by the selected key and direction.
///
/// An absent outage sorts as the earliest possible value. Ties keep
/// their input order (stable sort).
pub fn sort_rows(rows: &mut [CityRow], state: SortState) {
    rows.sort_by(|a, b| {
        let ordering = match state.key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Country => a.country.cmp(&b.country),
            SortKey::Coordinates => (a.lat, a.lng)
                .partial_cmp(&(b.lat, b.lng))
                .unwrap_or(std::cmp::Ordering::Equal),
            SortKey::LastOutage => a
                .last_outage
                .unwrap_or(i64::MIN)
                .cmp(&b.last_outage.unwrap_or(i64::MIN)),
        };
        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;

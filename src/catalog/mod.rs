//! The fixed, read-only hotel catalog.
//!
//! The catalog is deserialized once at process start from a JSON document
//! compiled into the binary. It is never mutated afterwards; the derived
//! city index is computed at load time and cached alongside the records.

use anyhow::{Context, Result};

use crate::models::Hotel;

/// Seed catalog compiled into the binary.
const HOTELS_JSON: &str = include_str!("hotels.json");

/// The immutable hotel catalog plus its derived city index.
///
/// Record order is significant: filtered views use a stable sort, so ties
/// fall back to the catalog's insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    hotels: Vec<Hotel>,
    cities: Vec<String>,
}

impl Catalog {
    /// Load the built-in catalog.
    pub fn load() -> Result<Self> {
        let hotels: Vec<Hotel> =
            serde_json::from_str(HOTELS_JSON).context("Failed to parse embedded hotel catalog")?;
        Ok(Self::from_hotels(hotels))
    }

    /// Build a catalog from an explicit record list, deriving the city
    /// index (distinct cities, sorted lexicographically).
    pub fn from_hotels(hotels: Vec<Hotel>) -> Self {
        let mut cities: Vec<String> = hotels.iter().map(|h| h.city.clone()).collect();
        cities.sort();
        cities.dedup();

        Self { hotels, cities }
    }

    /// All records, in catalog insertion order.
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Distinct city values, sorted lexicographically.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

use serde::{Deserialize, Serialize};

/// A single immutable catalog record.
///
/// Hotel names are unique within the catalog. Prices are whole currency
/// units per night; ratings range from 1.0 to 5.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub city: String,
    pub price_per_night: u32,
    pub rating: f32,
    pub description: String,
}

use chrono::NaiveDate;

use super::hotel::Hotel;
use super::trip::TripQuery;

/// The selected-hotel snapshot held in session state.
///
/// Captures both the hotel fields and the trip parameters at the moment of
/// selection, so later form edits do not retroactively change a booking.
/// `total_cost` is always derived from its three factors at construction;
/// it is never stored independently of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub hotel_name: String,
    pub city: String,
    pub price_per_night: u32,
    pub rating: f32,
    pub source_city: String,
    pub destination: String,
    pub travel_date: NaiveDate,
    pub num_days: u32,
    pub num_members: u32,
    pub total_cost: u64,
}

impl Booking {
    /// Snapshot a hotel and the current trip query into a booking.
    ///
    /// `total_cost = price_per_night × num_days × num_members`. The query's
    /// destination is taken as-is; no mismatch check against the hotel's
    /// city is performed (callers only offer hotels already filtered to the
    /// chosen destination).
    pub fn new(hotel: &Hotel, query: &TripQuery) -> Self {
        let total_cost =
            hotel.price_per_night as u64 * query.num_days as u64 * query.num_members as u64;

        Self {
            hotel_name: hotel.name.clone(),
            city: hotel.city.clone(),
            price_per_night: hotel.price_per_night,
            rating: hotel.rating,
            source_city: query.source_city.clone(),
            destination: query.destination.clone().unwrap_or_else(|| hotel.city.clone()),
            travel_date: query.travel_date,
            num_days: query.num_days,
            num_members: query.num_members,
            total_cost,
        }
    }
}

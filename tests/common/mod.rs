//! Shared test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use travel_planner::models::{Hotel, TripQuery};

/// Builder for hotel records in tests
pub struct HotelBuilder {
    name: String,
    city: String,
    price_per_night: u32,
    rating: f32,
    description: String,
}

impl HotelBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            city: "Mumbai".to_string(),
            price_per_night: 2000,
            rating: 4.0,
            description: String::new(),
        }
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    pub fn price(mut self, price: u32) -> Self {
        self.price_per_night = price;
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn build(self) -> Hotel {
        Hotel {
            name: self.name,
            city: self.city,
            price_per_night: self.price_per_night,
            rating: self.rating,
            description: self.description,
        }
    }
}

/// A trip query with a fixed date and the given destination
pub fn query_to(destination: &str) -> TripQuery {
    let mut query = TripQuery::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    query.destination = Some(destination.to_string());
    query
}

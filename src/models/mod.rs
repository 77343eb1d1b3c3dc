//! Data models for the travel planner.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Hotel`] - A single catalog record (name, city, nightly price, rating)
//! - [`TripQuery`] - The user's trip parameters and filter settings for one
//!   evaluation cycle
//! - [`Booking`] - The selected-hotel snapshot held in session state
//!
//! Hotels use serde for deserialization from the embedded catalog document.

pub mod booking;
pub mod hotel;
pub mod trip;

pub use booking::Booking;
pub use hotel::Hotel;
pub use trip::TripQuery;

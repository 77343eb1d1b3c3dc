//! Per-session booking state.
//!
//! A session holds at most one current booking. Selecting a hotel replaces
//! any prior booking unconditionally; there is no booking history and no
//! cancel flow. State lives only for the process lifetime.

use crate::models::Booking;

/// Owns the single current booking for one user session.
#[derive(Debug, Default)]
pub struct Session {
    booking: Option<Booking>,
}

impl Session {
    /// Start a session with no booking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a booking, replacing any prior one, and return a reference to
    /// the stored value.
    pub fn select(&mut self, booking: Booking) -> &Booking {
        self.booking = Some(booking);
        self.booking.as_ref().expect("booking was just stored")
    }

    /// The current booking, or `None` if nothing has been selected yet.
    pub fn current(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }
}

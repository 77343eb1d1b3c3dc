use chrono::NaiveDate;

use crate::filters::{FilterCriteria, SortMode};

/// Allowed stay length, in days.
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 30;

/// Allowed party size.
pub const MIN_MEMBERS: u32 = 1;
pub const MAX_MEMBERS: u32 = 10;

/// Budget bounds and slider step, in currency units per night.
pub const MAX_BUDGET: u32 = 10_000;
pub const BUDGET_STEP: u32 = 500;

/// Rating bounds; values move in half-star increments.
pub const MIN_RATING: f32 = 1.0;
pub const MAX_RATING: f32 = 5.0;

/// The user's trip parameters and filter settings for one evaluation cycle.
///
/// A `None` destination means "no destination chosen" and is a distinct
/// state from an empty filter result. The two budget bounds step
/// independently: an inverted range (`min_budget > max_budget`) is not
/// guarded and simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct TripQuery {
    pub source_city: String,
    pub destination: Option<String>,
    pub travel_date: NaiveDate,
    pub num_days: u32,
    pub num_members: u32,
    pub min_budget: u32,
    pub max_budget: u32,
    pub min_rating: f32,
    pub sort_mode: SortMode,
}

impl TripQuery {
    /// Create a query with the default form values: a 3-day trip for 2
    /// people, full budget range, and no rating cutoff.
    pub fn new(travel_date: NaiveDate) -> Self {
        Self {
            source_city: String::new(),
            destination: None,
            travel_date,
            num_days: 3,
            num_members: 2,
            min_budget: 0,
            max_budget: MAX_BUDGET,
            min_rating: MIN_RATING,
            sort_mode: SortMode::PriceAsc,
        }
    }

    /// Build filter criteria from the current settings, or `None` if no
    /// destination has been chosen yet.
    pub fn criteria(&self) -> Option<FilterCriteria> {
        self.destination.as_ref().map(|destination| FilterCriteria {
            destination: destination.clone(),
            min_budget: self.min_budget,
            max_budget: self.max_budget,
            min_rating: self.min_rating,
            sort_mode: self.sort_mode,
        })
    }

    /// Step the travel date forward or backward by whole days.
    pub fn step_travel_date(&mut self, delta: i64) {
        self.travel_date = self.travel_date + chrono::Duration::days(delta);
    }

    pub fn step_num_days(&mut self, delta: i64) {
        self.num_days = step_clamped(self.num_days, delta, MIN_DAYS, MAX_DAYS);
    }

    pub fn step_num_members(&mut self, delta: i64) {
        self.num_members = step_clamped(self.num_members, delta, MIN_MEMBERS, MAX_MEMBERS);
    }

    pub fn step_min_budget(&mut self, delta: i64) {
        self.min_budget = step_clamped(self.min_budget, delta * BUDGET_STEP as i64, 0, MAX_BUDGET);
    }

    pub fn step_max_budget(&mut self, delta: i64) {
        self.max_budget = step_clamped(self.max_budget, delta * BUDGET_STEP as i64, 0, MAX_BUDGET);
    }

    /// Step the minimum rating in half-star increments.
    pub fn step_min_rating(&mut self, delta: i64) {
        // Work in half-star units to avoid accumulating float error
        let half_stars = (self.min_rating * 2.0).round() as i64 + delta;
        let clamped = half_stars.clamp((MIN_RATING * 2.0) as i64, (MAX_RATING * 2.0) as i64);
        self.min_rating = clamped as f32 / 2.0;
    }

    pub fn step_sort_mode(&mut self, delta: i64) {
        self.sort_mode = if delta >= 0 { self.sort_mode.next() } else { self.sort_mode.prev() };
    }
}

fn step_clamped(value: u32, delta: i64, min: u32, max: u32) -> u32 {
    let stepped = value as i64 + delta;
    stepped.clamp(min as i64, max as i64) as u32
}

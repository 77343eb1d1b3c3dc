//! Travel Planner - Plan a trip and pick a hotel from an in-memory catalog
//!
//! This library backs a single-screen terminal tool: the user fills in trip
//! parameters (source city, destination, date, duration, party size) and
//! budget/rating filters, browses the matching hotels, and selects one
//! booking held in session state. It provides:
//!
//! - A fixed hotel [`Catalog`](catalog::Catalog) embedded in the binary,
//!   with a derived city index
//! - A pure [`filter_and_sort`](filters::filter_and_sort) engine over
//!   structured [`FilterCriteria`](filters::FilterCriteria)
//! - A per-session booking store ([`Session`](session::Session))
//! - The interactive terminal screen wiring it all together
//!
//! # Example
//!
//! ```
//! use travel_planner::catalog::Catalog;
//! use travel_planner::filters::{FilterCriteria, SortMode, filter_and_sort};
//!
//! let catalog = Catalog::load()?;
//! let criteria = FilterCriteria {
//!     destination: "Goa".to_string(),
//!     min_budget: 0,
//!     max_budget: 10_000,
//!     min_rating: 4.5,
//!     sort_mode: SortMode::PriceAsc,
//! };
//! let hotels = filter_and_sort(&catalog, &criteria);
//! println!("{} hotels match", hotels.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod filters;
pub mod models;
pub mod session;
pub mod tui;

// Re-export commonly used types
pub use catalog::Catalog;
pub use filters::{FilterCriteria, SortMode, filter_and_sort};
pub use models::{Booking, Hotel, TripQuery};
pub use session::Session;

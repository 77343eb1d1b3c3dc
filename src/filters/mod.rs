pub mod apply;
pub mod criteria;

pub use apply::filter_and_sort;
pub use criteria::{FilterCriteria, SortMode};

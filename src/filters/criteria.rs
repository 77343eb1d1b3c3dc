/// Result ordering for filtered hotel views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Price, low to high
    PriceAsc,
    /// Price, high to low
    PriceDesc,
    /// Rating, high to low
    RatingDesc,
}

impl SortMode {
    pub fn next(self) -> Self {
        match self {
            SortMode::PriceAsc => SortMode::PriceDesc,
            SortMode::PriceDesc => SortMode::RatingDesc,
            SortMode::RatingDesc => SortMode::PriceAsc,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SortMode::PriceAsc => SortMode::RatingDesc,
            SortMode::PriceDesc => SortMode::PriceAsc,
            SortMode::RatingDesc => SortMode::PriceDesc,
        }
    }

    /// Human-readable label, matching the form's sort options.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::PriceAsc => "Price (Low to High)",
            SortMode::PriceDesc => "Price (High to Low)",
            SortMode::RatingDesc => "Rating (High to Low)",
        }
    }
}

/// Selection and ordering settings for one filter evaluation.
///
/// The destination must be one of the catalog's cities; callers that have
/// no destination yet skip the filter engine entirely. The budget bounds
/// are taken as given, an inverted range matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub destination: String,
    pub min_budget: u32,
    pub max_budget: u32,
    pub min_rating: f32,
    pub sort_mode: SortMode,
}

use crate::catalog::Catalog;
use crate::models::Hotel;

use super::criteria::{FilterCriteria, SortMode};

/// Compute the filtered, sorted hotel view for the given criteria.
///
/// Selection predicate (all conditions AND-combined):
/// - `city == destination`
/// - `min_budget <= price_per_night <= max_budget`
/// - `rating >= min_rating`
///
/// Sorting is stable: hotels with equal price (or equal rating) keep their
/// catalog insertion order. An empty result is a valid outcome, not an
/// error, and `min_budget > max_budget` silently yields an empty list.
pub fn filter_and_sort(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<Hotel> {
    let mut results: Vec<Hotel> = catalog
        .hotels()
        .iter()
        .filter(|hotel| matches_criteria(hotel, criteria))
        .cloned()
        .collect();

    match criteria.sort_mode {
        SortMode::PriceAsc => results.sort_by_key(|h| h.price_per_night),
        SortMode::PriceDesc => results.sort_by(|a, b| b.price_per_night.cmp(&a.price_per_night)),
        SortMode::RatingDesc => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    results
}

fn matches_criteria(hotel: &Hotel, criteria: &FilterCriteria) -> bool {
    hotel.city == criteria.destination
        && criteria.min_budget <= hotel.price_per_night
        && hotel.price_per_night <= criteria.max_budget
        && hotel.rating >= criteria.min_rating
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(name: &str, city: &str, price: u32, rating: f32) -> Hotel {
        Hotel {
            name: name.to_string(),
            city: city.to_string(),
            price_per_night: price,
            rating,
            description: String::new(),
        }
    }

    fn criteria(destination: &str) -> FilterCriteria {
        FilterCriteria {
            destination: destination.to_string(),
            min_budget: 0,
            max_budget: 10_000,
            min_rating: 1.0,
            sort_mode: SortMode::PriceAsc,
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::from_hotels(vec![
            hotel("Plaza", "Mumbai", 5000, 4.5),
            hotel("Budget Inn", "Mumbai", 1500, 3.5),
            hotel("Residency", "Mumbai", 3500, 4.0),
            hotel("Heritage", "Delhi", 6000, 5.0),
            hotel("Comfort", "Delhi", 2000, 3.8),
        ])
    }

    #[test]
    fn test_filters_by_destination_only() {
        let results = filter_and_sort(&test_catalog(), &criteria("Delhi"));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|h| h.city == "Delhi"));
    }

    #[test]
    fn test_budget_bounds_are_inclusive() {
        let mut c = criteria("Mumbai");
        c.min_budget = 1500;
        c.max_budget = 3500;

        let results = filter_and_sort(&test_catalog(), &c);
        let names: Vec<&str> = results.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Budget Inn", "Residency"]);
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        let mut c = criteria("Mumbai");
        c.min_rating = 4.0;

        let results = filter_and_sort(&test_catalog(), &c);
        let names: Vec<&str> = results.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Residency", "Plaza"]);
    }

    #[test]
    fn test_conditions_are_and_combined() {
        let mut c = criteria("Mumbai");
        c.max_budget = 4000;
        c.min_rating = 4.0;

        let results = filter_and_sort(&test_catalog(), &c);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Residency");
    }

    #[test]
    fn test_price_ascending() {
        let results = filter_and_sort(&test_catalog(), &criteria("Mumbai"));
        let prices: Vec<u32> = results.iter().map(|h| h.price_per_night).collect();
        assert_eq!(prices, [1500, 3500, 5000]);
    }

    #[test]
    fn test_price_descending() {
        let mut c = criteria("Mumbai");
        c.sort_mode = SortMode::PriceDesc;

        let results = filter_and_sort(&test_catalog(), &c);
        let prices: Vec<u32> = results.iter().map(|h| h.price_per_night).collect();
        assert_eq!(prices, [5000, 3500, 1500]);
    }

    #[test]
    fn test_rating_descending() {
        let mut c = criteria("Mumbai");
        c.sort_mode = SortMode::RatingDesc;

        let results = filter_and_sort(&test_catalog(), &c);
        let names: Vec<&str> = results.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Plaza", "Residency", "Budget Inn"]);
    }

    #[test]
    fn test_equal_prices_keep_catalog_order() {
        let catalog = Catalog::from_hotels(vec![
            hotel("First", "Pune", 2000, 3.0),
            hotel("Second", "Pune", 2000, 4.0),
            hotel("Third", "Pune", 2000, 3.5),
        ]);

        let results = filter_and_sort(&catalog, &criteria("Pune"));
        let names: Vec<&str> = results.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_equal_ratings_keep_catalog_order() {
        let catalog = Catalog::from_hotels(vec![
            hotel("First", "Pune", 3000, 4.0),
            hotel("Second", "Pune", 1000, 4.0),
            hotel("Third", "Pune", 2000, 4.0),
        ]);

        let mut c = criteria("Pune");
        c.sort_mode = SortMode::RatingDesc;

        let results = filter_and_sort(&catalog, &c);
        let names: Vec<&str> = results.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_no_matches_returns_empty() {
        let mut c = criteria("Delhi");
        c.max_budget = 1800;

        let results = filter_and_sort(&test_catalog(), &c);
        assert!(results.is_empty());
    }

    #[test]
    fn test_unknown_destination_returns_empty() {
        let results = filter_and_sort(&test_catalog(), &criteria("Atlantis"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_inverted_budget_range_returns_empty() {
        let mut c = criteria("Mumbai");
        c.min_budget = 5000;
        c.max_budget = 1000;

        let results = filter_and_sort(&test_catalog(), &c);
        assert!(results.is_empty());
    }

    #[test]
    fn test_does_not_mutate_catalog() {
        let catalog = test_catalog();
        let before: Vec<String> = catalog.hotels().iter().map(|h| h.name.clone()).collect();

        let _ = filter_and_sort(&catalog, &criteria("Mumbai"));

        let after: Vec<String> = catalog.hotels().iter().map(|h| h.name.clone()).collect();
        assert_eq!(before, after);
    }
}

/// Integration tests for the booking flow: filter a destination, snapshot
/// a hotel into the session, and read the summary back.
mod common;

use common::{HotelBuilder, query_to};
use travel_planner::catalog::Catalog;
use travel_planner::filters::{FilterCriteria, SortMode, filter_and_sort};
use travel_planner::models::Booking;
use travel_planner::session::Session;

#[test]
fn test_taj_heritage_total_cost() {
    let catalog = Catalog::load().unwrap();
    let taj = catalog.hotels().iter().find(|h| h.name == "Taj Heritage").unwrap();

    let mut query = query_to("Delhi");
    query.num_days = 2;
    query.num_members = 3;

    let booking = Booking::new(taj, &query);
    assert_eq!(booking.price_per_night, 6000);
    assert_eq!(booking.total_cost, 36_000);
}

#[test]
fn test_filter_then_book_round_trip() {
    let catalog = Catalog::load().unwrap();

    let criteria = FilterCriteria {
        destination: "Goa".to_string(),
        min_budget: 0,
        max_budget: 10_000,
        min_rating: 4.5,
        sort_mode: SortMode::PriceAsc,
    };
    let results = filter_and_sort(&catalog, &criteria);
    assert_eq!(results.len(), 1);

    let mut session = Session::new();
    let booking = Booking::new(&results[0], &query_to("Goa"));
    session.select(booking.clone());

    assert_eq!(session.current(), Some(&booking));
    assert_eq!(session.current().unwrap().hotel_name, "Goa Beach Resort");
}

#[test]
fn test_new_session_has_no_booking() {
    let session = Session::new();
    assert!(session.current().is_none());
}

#[test]
fn test_second_booking_replaces_not_accumulates() {
    let mut session = Session::new();
    let query = query_to("Mumbai");

    let first = HotelBuilder::new("Budget Inn Mumbai").price(1500).build();
    let second = HotelBuilder::new("Royal Residency").price(3500).build();

    session.select(Booking::new(&first, &query));
    session.select(Booking::new(&second, &query));

    let current = session.current().unwrap();
    assert_eq!(current.hotel_name, "Royal Residency");
    assert_eq!(current.total_cost, 3500 * 3 * 2);
}

#[test]
fn test_rebooking_same_hotel_is_idempotent() {
    let mut session = Session::new();
    let query = query_to("Mumbai");
    let hotel = HotelBuilder::new("Grand Plaza Hotel").price(5000).rating(4.5).build();

    session.select(Booking::new(&hotel, &query));
    let after_first = session.current().unwrap().clone();

    session.select(Booking::new(&hotel, &query));
    assert_eq!(session.current(), Some(&after_first));
}

#[test]
fn test_booking_snapshot_is_detached_from_query() {
    let mut session = Session::new();
    let mut query = query_to("Jaipur");
    query.source_city = "Delhi".to_string();
    query.num_days = 5;

    let hotel = HotelBuilder::new("Heritage Haveli").city("Jaipur").price(3800).build();
    session.select(Booking::new(&hotel, &query));

    // Later edits to the query must not alter the stored booking
    query.num_days = 10;
    query.source_city.clear();

    let booking = session.current().unwrap();
    assert_eq!(booking.num_days, 5);
    assert_eq!(booking.source_city, "Delhi");
    assert_eq!(booking.total_cost, 3800 * 5 * 2);
}

#[test]
fn test_total_cost_across_valid_input_range() {
    let query_base = query_to("Mumbai");
    let hotel = HotelBuilder::new("Any").price(1200).build();

    for num_days in [1, 15, 30] {
        for num_members in [1, 5, 10] {
            let mut query = query_base.clone();
            query.num_days = num_days;
            query.num_members = num_members;

            let booking = Booking::new(&hotel, &query);
            assert_eq!(booking.total_cost, 1200u64 * num_days as u64 * num_members as u64);
        }
    }
}

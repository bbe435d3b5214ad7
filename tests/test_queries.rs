//! Catalog query tests against sample seed files.

mod common;

use common::date;
use rust_decimal::Decimal;
use salon_booking::queries::SearchBookingsParams;
use salon_booking::DateRange;

// ---------------------------------------------------------------------------
// bookings
// ---------------------------------------------------------------------------

#[test]
fn all_keeps_seed_order() {
    let (salon, _tmp) = common::setup_sample_salon();
    let ids: Vec<&str> = salon.tickets().all().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3", "t4"]);
}

#[test]
fn get_returns_none_for_unknown_id() {
    let (salon, _tmp) = common::setup_sample_salon();
    assert!(salon.tickets().get("t9").is_none());
    assert_eq!(salon.tickets().get("t2").unwrap().client_name, "João Silva");
}

#[test]
fn between_is_inclusive() {
    let (salon, _tmp) = common::setup_sample_salon();
    let results = salon.tickets().between(date(2024, 11, 27), date(2024, 12, 1));

    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);
}

#[test]
fn between_with_inverted_window_is_empty() {
    let (salon, _tmp) = common::setup_sample_salon();
    assert!(salon.tickets().between(date(2024, 12, 31), date(2024, 11, 1)).is_empty());
}

#[test]
fn on_orders_by_time() {
    let (salon, _tmp) = common::setup_sample_salon();
    let results = salon.tickets().on(date(2024, 12, 1));

    let times: Vec<&str> = results.iter().map(|r| r.time.as_str()).collect();
    assert_eq!(times, vec!["09:00", "11:30"]);
}

#[test]
fn by_service_is_case_insensitive() {
    let (salon, _tmp) = common::setup_sample_salon();
    assert_eq!(salon.tickets().by_service("corte").len(), 2);
    assert!(salon.tickets().by_service("Sobrancelha").is_empty());
}

#[test]
fn by_professional_skips_unassigned() {
    let (salon, _tmp) = common::setup_sample_salon();
    let results = salon.tickets().by_professional("KAIO");

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.professional_name.as_deref() == Some("Kaio")));
}

#[test]
fn search_combines_filters() {
    let (salon, _tmp) = common::setup_sample_salon();
    let results = salon.tickets().search(&SearchBookingsParams {
        service: Some("Corte".to_string()),
        range: Some(DateRange::day(date(2024, 12, 1))),
        client: Some("lima".to_string()),
        ..Default::default()
    });

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "t3");
}

#[test]
fn search_paginates() {
    let (salon, _tmp) = common::setup_sample_salon();
    let results = salon.tickets().search(&SearchBookingsParams {
        limit: Some(2),
        offset: Some(1),
        ..Default::default()
    });

    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["t2", "t3"]);
}

#[test]
fn total_price_over_window() {
    let (salon, _tmp) = common::setup_sample_salon();

    assert_eq!(salon.tickets().total_price(None), Decimal::new(12500, 2));
    let window = DateRange::day(date(2024, 12, 1));
    assert_eq!(salon.tickets().total_price(Some(&window)), Decimal::new(7500, 2));
}

// ---------------------------------------------------------------------------
// professionals and favorites
// ---------------------------------------------------------------------------

#[test]
fn professional_search_by_name_substring() {
    let (salon, _tmp) = common::setup_sample_salon();
    let results = salon.professionals().search("ka");

    let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Kauan", "Kaio"]);
}

#[test]
fn favorites_min_rating() {
    let (salon, _tmp) = common::setup_sample_salon();
    let top = salon.favorites().min_rating(5.0);

    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "ShopBarber");
    assert_eq!(top[0].image_url.as_deref(), Some("https://example.com/shop.png"));
    assert!(salon.favorites().get("1").unwrap().image_url.is_none());
}

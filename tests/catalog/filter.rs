use std::collections::HashSet;

use mediahub::{CatalogError, FilterParams, MediaFilter, MediaType};

use crate::support::{seeded, titles};

fn params() -> FilterParams {
    FilterParams::default()
}

#[test]
fn no_predicates_returns_everything() {
    let service = seeded();
    let all: HashSet<u64> = service.get_all().unwrap().iter().map(|s| s.id).collect();
    let filtered: HashSet<u64> = service.filter(&params()).unwrap().iter().map(|s| s.id).collect();
    assert_eq!(filtered, all);
}

#[test]
fn empty_strings_mean_unset() {
    let service = seeded();
    let found = service
        .filter(&FilterParams {
            title: Some("".into()),
            media_type: Some("".into()),
            genre: Some("".into()),
            creator: Some("".into()),
            status: Some("".into()),
            rating: None,
        })
        .unwrap();
    assert_eq!(found, service.get_all().unwrap());
}

#[test]
fn title_substring_ignores_case() {
    let service = seeded();
    let found = service
        .filter(&FilterParams {
            title: Some("dun".into()),
            ..params()
        })
        .unwrap();
    assert_eq!(titles(&found), vec!["Dune", "Dunkirk"]);
}

#[test]
fn rating_ten_is_exact() {
    let service = seeded();
    let found = service
        .filter(&FilterParams {
            rating: Some(10),
            ..params()
        })
        .unwrap();
    assert_eq!(titles(&found), vec!["Dune", "Hades"]);

    let none = service
        .filter(&FilterParams {
            rating: Some(11),
            ..params()
        })
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn unrated_items_match_rating_zero_only() {
    let service = seeded();
    let found = service.filter_by(&MediaFilter::new().rating(0)).unwrap();
    assert_eq!(titles(&found), vec!["Severance"]);
}

#[test]
fn enum_text_matches_any_case() {
    let service = seeded();
    let found = service
        .filter(&FilterParams {
            media_type: Some("Movie".into()),
            status: Some("completed".into()),
            ..params()
        })
        .unwrap();
    assert_eq!(titles(&found), vec!["Arrival"]);
}

#[test]
fn all_six_predicates_together() {
    let service = seeded();
    let found = service
        .filter(&FilterParams {
            title: Some("DUNE".into()),
            media_type: Some("book".into()),
            genre: Some("fiction".into()),
            creator: Some("herbert".into()),
            rating: Some(10),
            status: Some("COMPLETED".into()),
        })
        .unwrap();
    assert_eq!(titles(&found), vec!["Dune"]);

    let found = service
        .filter(&FilterParams {
            title: Some("DUNE".into()),
            media_type: Some("book".into()),
            genre: Some("fiction".into()),
            creator: Some("herbert".into()),
            rating: Some(9),
            status: Some("COMPLETED".into()),
        })
        .unwrap();
    assert!(found.is_empty());
}

#[test]
fn unknown_type_is_invalid_not_empty() {
    let service = seeded();
    let err = service
        .filter(&FilterParams {
            media_type: Some("PODCAST".into()),
            ..params()
        })
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidFilterValue {
            field: "type",
            value: "PODCAST".into()
        }
    );
}

#[test]
fn unknown_status_is_invalid_even_with_matching_title() {
    let service = seeded();
    let err = service
        .filter(&FilterParams {
            title: Some("Dune".into()),
            status: Some("PLANNED".into()),
            ..params()
        })
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidFilterValue { field: "status", .. }));
}

#[test]
fn typed_filter_matches_raw_params() {
    let service = seeded();
    let typed = service
        .filter_by(&MediaFilter::new().media_type(MediaType::Movie))
        .unwrap();
    let raw = service
        .filter(&FilterParams {
            media_type: Some("movie".into()),
            ..params()
        })
        .unwrap();
    assert_eq!(typed, raw);
    assert_eq!(titles(&typed), vec!["Dunkirk", "Arrival"]);
}

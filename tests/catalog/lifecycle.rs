use mediahub::{
    CatalogError, CatalogService, ExperienceStatus, InMemoryModelStore, MediaItemRequest,
    MediaType, Stored,
};

use crate::support::{arrival, request};

#[test]
fn arrival_scenario() {
    let service = CatalogService::new(InMemoryModelStore::new());

    let created = service.create(arrival()).unwrap();
    assert_eq!(created.id, 1);

    let fetched = service.get_by_id(1).unwrap().unwrap();
    assert_eq!(fetched.data.title, "Arrival");
    assert_eq!(fetched.data.media_type, MediaType::Movie);
    assert_eq!(fetched.data.genre, "Sci-Fi");
    assert_eq!(fetched.data.release_year, 2016);
    assert_eq!(fetched.data.rating, 9);

    let found = service
        .filter(&mediahub::FilterParams {
            media_type: Some("MOVIE".into()),
            rating: Some(9),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(found, vec![fetched]);

    assert!(service.delete(1).unwrap());
    assert!(service.get_by_id(1).unwrap().is_none());
}

#[test]
fn created_record_equals_input_plus_id() {
    let service = CatalogService::new(InMemoryModelStore::new());
    let input = MediaItemRequest {
        creator: Some("Ursula K. Le Guin".into()),
        status: Some(ExperienceStatus::InProgress),
        rating: Some(7),
        review: Some("Anarres or Urras?".into()),
        ..request("The Dispossessed", MediaType::Book, "Science Fiction", 1974)
    };

    let created = service.create(input.clone()).unwrap();
    let expected = Stored::new(created.id, input.into_item().unwrap());
    assert_eq!(created, expected);
    assert_eq!(service.get_by_id(created.id).unwrap(), Some(expected));
}

#[test]
fn dune_then_upper_case_dune_is_a_duplicate() {
    let service = CatalogService::new(InMemoryModelStore::new());
    service
        .create(request("Dune", MediaType::Book, "Sci-Fi", 1965))
        .unwrap();

    let err = service
        .create(request("DUNE", MediaType::Movie, "Sci-Fi", 2021))
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateTitle(ref t) if t == "DUNE"));
    assert_eq!(err.status_code(), 409);
}

#[test]
fn update_keeps_id_and_replaces_everything_else() {
    let service = CatalogService::new(InMemoryModelStore::new());
    let created = service.create(arrival()).unwrap();

    let replacement = MediaItemRequest {
        status: Some(ExperienceStatus::Completed),
        review: Some("Better the second time.".into()),
        ..request("Arrival", MediaType::Movie, "Drama", 2016)
    };
    let updated = service
        .update(created.id, replacement.clone())
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.data, replacement.into_item().unwrap());
    assert_eq!(service.get_all().unwrap(), vec![updated]);
}

#[test]
fn update_missing_id_is_absent_not_error() {
    let service = CatalogService::new(InMemoryModelStore::new());
    assert_eq!(service.update(7, arrival()).unwrap(), None);
    assert!(service.get_all().unwrap().is_empty());
}

#[test]
fn update_still_validates() {
    let service = CatalogService::new(InMemoryModelStore::new());
    let created = service.create(arrival()).unwrap();

    let err = service
        .update(
            created.id,
            MediaItemRequest {
                rating: Some(11),
                ..arrival()
            },
        )
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(service.get_by_id(created.id).unwrap().unwrap(), created);
}

#[test]
fn delete_is_idempotent_in_effect() {
    let service = CatalogService::new(InMemoryModelStore::new());
    let created = service.create(arrival()).unwrap();

    assert!(service.delete(created.id).unwrap());
    assert!(!service.delete(created.id).unwrap());
    assert!(!service.delete(created.id + 100).unwrap());
}

#[test]
fn ids_are_never_reused() {
    let service = CatalogService::new(InMemoryModelStore::new());
    let first = service.create(arrival()).unwrap();
    service.delete(first.id).unwrap();

    let second = service.create(arrival()).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn get_all_is_in_creation_order() {
    let service = crate::support::seeded();
    assert_eq!(
        crate::support::titles(&service.get_all().unwrap()),
        vec!["Dune", "Dunkirk", "Arrival", "Hades", "Severance"]
    );
}

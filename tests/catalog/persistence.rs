use mediahub::{CatalogError, CatalogService, FilterParams, JsonFileModelStore, ModelError};

use crate::support::{arrival, seed, titles};

#[test]
fn catalogue_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mediahub.json");

    let first_run = CatalogService::new(JsonFileModelStore::open(&path).unwrap());
    seed(&first_run);
    let dunkirk = first_run
        .filter(&FilterParams {
            title: Some("dunkirk".into()),
            ..Default::default()
        })
        .unwrap()
        .remove(0);
    assert!(first_run.delete(dunkirk.id).unwrap());
    let before = first_run.get_all().unwrap();
    drop(first_run);

    let second_run = CatalogService::new(JsonFileModelStore::open(&path).unwrap());
    assert_eq!(second_run.get_all().unwrap(), before);
    assert_eq!(
        titles(&before),
        vec!["Dune", "Arrival", "Hades", "Severance"]
    );

    // Uniqueness still holds against reloaded records.
    assert!(second_run.create(arrival()).is_err());

    let fresh = second_run
        .create(crate::support::request(
            "Dunkirk",
            mediahub::MediaType::Movie,
            "War",
            2017,
        ))
        .unwrap();
    assert!(fresh.id > dunkirk.id);
}

#[test]
fn failed_create_does_not_hold_the_title() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let service =
        CatalogService::new(JsonFileModelStore::open(data_dir.join("mediahub.json")).unwrap());

    let err = service.create(arrival()).unwrap_err();
    assert!(matches!(err, CatalogError::Store(ModelError::Io(_))));
    assert!(service.get_all().unwrap().is_empty());
    assert!(!service.exists_by_title("Arrival").unwrap());

    std::fs::create_dir(&data_dir).unwrap();
    let created = service.create(arrival()).unwrap();
    assert_eq!(service.get_all().unwrap(), vec![created]);
}

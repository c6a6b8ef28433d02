//! `#[derive(Model)]` on types outside the crate.

use mediahub::{InMemoryModelStore, Model, ModelsExt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(collection = "watchlist")]
struct WatchlistEntry {
    title: String,
    priority: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
struct ReadingGoal {
    books: u32,
}

#[test]
fn collection_attribute_is_used() {
    assert_eq!(WatchlistEntry::COLLECTION, "watchlist");
}

#[test]
fn collection_defaults_to_snake_case_plural() {
    assert_eq!(ReadingGoal::COLLECTION, "reading_goals");
}

#[test]
fn derived_models_share_a_store_without_colliding() {
    let store = InMemoryModelStore::new();

    let entry = store
        .models::<WatchlistEntry>()
        .insert(&WatchlistEntry {
            title: "Severance".into(),
            priority: 1,
        })
        .unwrap();
    let goal = store
        .models::<ReadingGoal>()
        .insert(&ReadingGoal { books: 24 })
        .unwrap();

    assert_ne!(entry.id, goal.id);
    assert_eq!(store.models::<WatchlistEntry>().all().unwrap(), vec![entry.clone()]);
    assert!(store.models::<ReadingGoal>().get(entry.id).unwrap().is_none());
    assert!(store
        .models::<WatchlistEntry>()
        .any(&|e| e.priority == 1)
        .unwrap());
}

use std::sync::{Arc, Barrier};
use std::thread;

use mediahub::{CatalogError, CatalogService, InMemoryModelStore, MediaItemRequest, MediaType};

use crate::support::request;

#[test]
fn concurrent_creates_of_one_title_admit_exactly_one() {
    const WRITERS: usize = 8;

    let service = Arc::new(CatalogService::new(InMemoryModelStore::new()));
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Same title, different casing per writer.
                let title = if i % 2 == 0 { "Dune" } else { "DUNE" };
                barrier.wait();
                service.create(request(title, MediaType::Book, "Sci-Fi", 1965))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let created = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(CatalogError::DuplicateTitle(_))))
        .count();
    assert_eq!(created, 1);
    assert_eq!(duplicates, WRITERS - 1);
    assert_eq!(service.get_all().unwrap().len(), 1);
}

#[test]
fn concurrent_creates_of_distinct_titles_get_distinct_ids() {
    const WRITERS: usize = 8;

    let service = Arc::new(CatalogService::new(InMemoryModelStore::new()));

    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                service
                    .create(MediaItemRequest {
                        rating: Some(1 + (i % 10) as i32),
                        ..request(&format!("Title {}", i), MediaType::Show, "Drama", 2000)
                    })
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), WRITERS);
}

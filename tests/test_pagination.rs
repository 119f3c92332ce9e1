//! Integration tests for the paginator and the doctor directory paging.

mod common;

use smilestudio::core::pagination::{current_slice, total_pages};

use common::*;

#[test]
fn test_total_pages() {
    assert_eq!(total_pages(23, 6), 4);
    assert_eq!(total_pages(24, 6), 4);
    assert_eq!(total_pages(25, 6), 5);
    assert_eq!(total_pages(1, 6), 1);
    assert_eq!(total_pages(0, 6), 1, "empty collections still have one page");
}

#[test]
fn test_current_slice() {
    let items: Vec<u32> = (1..=23).collect();
    assert_eq!(current_slice(&items, 1, 6), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(current_slice(&items, 4, 6), &[19, 20, 21, 22, 23]);
    assert_eq!(current_slice(&items, 4, 6).len(), 23 - 3 * 6);
    assert!(current_slice(&items, 5, 6).is_empty());
    assert!(current_slice(&items, 0, 6).is_empty());
    assert!(current_slice::<u32>(&[], 1, 6).is_empty());
}

#[test]
fn test_go_to_clamps() {
    let mut paginator = Paginator::new(23, 6);
    assert_eq!(paginator.page(), 1);
    assert!(paginator.go_to(99));
    assert_eq!(paginator.page(), 4);
    assert!(paginator.go_to(0));
    assert_eq!(paginator.page(), 1);
    assert!(!paginator.go_to(1), "already on page 1");
}

#[test]
fn test_next_and_prev_stop_at_bounds() {
    let mut paginator = Paginator::new(23, 6);
    assert!(!paginator.has_prev());
    assert!(!paginator.prev());
    assert_eq!(paginator.page(), 1);

    for expected in 2..=4 {
        assert!(paginator.next());
        assert_eq!(paginator.page(), expected);
    }
    assert!(!paginator.has_next());
    assert!(!paginator.next());
    assert_eq!(paginator.page(), 4);
    assert!(paginator.prev());
    assert_eq!(paginator.page(), 3);
}

#[test]
fn test_empty_collection() {
    let mut paginator = Paginator::new(0, 6);
    assert_eq!(paginator.total_pages(), 1);
    paginator.go_to(3);
    assert_eq!(paginator.page(), 1);
    assert!(paginator.slice::<u8>(&[]).is_empty());
    assert_eq!(paginator.page_numbers().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_zero_page_size_is_one() {
    let paginator = Paginator::new(3, 0);
    assert_eq!(paginator.page_size(), 1);
    assert_eq!(paginator.total_pages(), 3);
}

#[test]
fn test_doctor_directory_pages() {
    let catalog = Catalog::default();
    let doctors = catalog.doctors();
    assert_eq!(doctors.len(), 23);

    let mut paginator = Paginator::new(doctors.len(), catalog.page_size);
    assert_eq!(paginator.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(paginator.slice(&doctors)[0].name, "Dr. Anika Rahman");

    paginator.go_to(4);
    let last = paginator.slice(&doctors);
    assert_eq!(last.len(), 5);
    assert_eq!(last[0].id, 19);
    assert_eq!(last[4].name, "Dr. Sakib Rahman");
}

// Host-side tests for lightbox gallery navigation.

#![allow(dead_code)]
mod gallery {
    include!("../src/core/gallery.rs");
}

use gallery::GalleryState;

#[test]
fn opens_only_in_range() {
    let mut g = GalleryState::new(3);
    assert!(!g.is_open());
    assert!(g.open_at(2));
    assert_eq!(g.current(), Some(2));
    assert!(!g.open_at(3));
    assert_eq!(g.current(), Some(2));
}

#[test]
fn close_clears_the_index() {
    let mut g = GalleryState::new(3);
    g.open_at(1);
    g.close();
    assert!(!g.is_open());
    assert_eq!(g.current(), None);
}

#[test]
fn navigation_stops_at_the_ends() {
    let mut g = GalleryState::new(3);
    g.open_at(0);
    assert!(g.at_first());
    assert!(!g.prev());
    assert_eq!(g.current(), Some(0));

    assert!(g.next());
    assert!(g.next());
    assert!(g.at_last());
    assert!(!g.next());
    assert_eq!(g.current(), Some(2));

    assert!(g.prev());
    assert_eq!(g.current(), Some(1));
}

#[test]
fn closed_gallery_ignores_navigation() {
    let mut g = GalleryState::new(3);
    assert!(!g.next());
    assert!(!g.prev());
    assert!(!g.at_first() && !g.at_last());
}

#[test]
fn empty_gallery_never_opens() {
    let mut g = GalleryState::new(0);
    assert!(g.is_empty());
    assert!(!g.open_at(0));
    assert!(!g.at_last());
}

#[test]
fn single_item_is_both_first_and_last() {
    let mut g = GalleryState::new(1);
    g.open_at(0);
    assert!(g.at_first() && g.at_last());
    assert!(!g.next() && !g.prev());
}

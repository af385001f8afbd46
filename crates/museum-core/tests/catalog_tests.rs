// Integration tests for the exhibit catalog.

mod common;

use museum_core::*;

fn piece(id: u32, position: u32, images: &'static [&'static str]) -> Exhibit {
    Exhibit {
        id,
        name: "piece",
        era: "era",
        description: "description",
        audio_guide: "narration",
        position,
        images,
        detailed_info: "details",
    }
}

#[test]
fn builtin_catalog_has_five_dense_positions() {
    let catalog = common::catalog();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.max_position(), 5);
    let positions: Vec<u32> = catalog.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    for e in catalog.iter() {
        assert!(!e.images.is_empty());
        assert!(!e.audio_guide.is_empty());
    }
}

#[test]
fn lookup_by_id_and_position() {
    let catalog = common::catalog();
    assert_eq!(catalog.by_id(3).map(|e| e.position), Some(3));
    assert_eq!(catalog.at_position(1).map(|e| e.id), Some(1));
    assert!(catalog.at_position(0).is_none());
    assert!(catalog.at_position(6).is_none());
    assert!(catalog.by_id(42).is_none());
}

#[test]
fn catalog_is_sorted_regardless_of_input_order() {
    let catalog = Catalog::new(vec![piece(20, 2, &["b"]), piece(10, 1, &["a"])]).unwrap();
    let ids: Vec<u32> = catalog.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![10, 20]);
}

#[test]
fn rejects_duplicate_ids() {
    let err = Catalog::new(vec![piece(1, 1, &["a"]), piece(1, 2, &["b"])]).unwrap_err();
    assert!(matches!(err, GalleryError::InvalidCatalog(_)));
}

#[test]
fn rejects_gaps_in_display_positions() {
    let err = Catalog::new(vec![piece(1, 1, &["a"]), piece(2, 3, &["b"])]).unwrap_err();
    assert!(matches!(err, GalleryError::InvalidCatalog(_)));
}

#[test]
fn rejects_positions_not_starting_at_one() {
    assert!(Catalog::new(vec![piece(1, 0, &["a"])]).is_err());
    assert!(Catalog::new(vec![piece(1, 2, &["a"])]).is_err());
}

#[test]
fn rejects_exhibit_without_images() {
    let err = Catalog::new(vec![piece(1, 1, &[])]).unwrap_err();
    assert!(err.to_string().contains("no images"));
}

#[test]
fn rejects_empty_catalog() {
    assert!(Catalog::new(Vec::new()).is_err());
}

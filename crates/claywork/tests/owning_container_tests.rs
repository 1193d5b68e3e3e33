//! Tests for OwningContainer (composition)

use claywork::*;
use pretty_assertions::assert_eq;

fn red_and_grey() -> OwningContainer {
    let mut bag = OwningContainer::new();
    bag.add(Playdoh::new("red", 12)).unwrap();
    bag.add(Clay::new("grey", 500)).unwrap();
    bag
}

// ═══════════════════════════════════════════════════════════════════════
// Insertion
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_add_takes_ownership() {
    let bag = red_and_grey();
    assert_eq!(bag.len(), 2);
    assert!(bag.get(0).unwrap().is::<Playdoh>());
    assert!(bag.get(1).unwrap().is::<Clay>());
}

#[test]
fn test_add_cloned_does_not_alias() {
    let mut external = Playdoh::new("red", 12);
    let mut bag = OwningContainer::new();
    bag.add_cloned(&external).unwrap();

    external.color = "blue".to_string();

    assert_eq!(
        bag.render_at(0).unwrap(),
        r#"Playdoh { color: "red", weight: 12 }"#
    );
}

#[test]
fn test_add_cloned_from_handle_snapshots() {
    let cell = ValueCell::new(Clay::new("grey", 500));
    let mut bag = OwningContainer::new();
    bag.add_cloned_from(&cell.handle()).unwrap();

    cell.with_mut(|v| v.downcast_mut::<Clay>().unwrap().weight = 1)
        .unwrap();
    drop(cell);

    assert_eq!(
        bag.render_at(0).unwrap(),
        r#"Clay { color: "grey", weight: 500 }"#
    );
}

#[test]
fn test_add_cloned_from_dangling_handle_fails() {
    let cell = ValueCell::new(Clay::new("grey", 500));
    let handle = cell.handle();
    drop(cell);

    let mut bag = OwningContainer::new();
    assert_eq!(
        bag.add_cloned_from(&handle),
        Err(ContainerError::DanglingReference { tag: handle.tag() })
    );
    assert!(bag.is_empty());
}

#[test]
fn test_capacity_exceeded_leaves_container_unchanged() {
    let mut bag = OwningContainer::with_config(ContainerConfig::with_max_len(2));
    bag.add(Playdoh::new("red", 1)).unwrap();
    bag.add(Playdoh::new("green", 2)).unwrap();
    let before = bag.render();

    assert_eq!(
        bag.add(Playdoh::new("blue", 3)),
        Err(ContainerError::CapacityExceeded { max: 2 })
    );
    assert_eq!(
        bag.add_cloned(&Clay::new("grey", 4)),
        Err(ContainerError::CapacityExceeded { max: 2 })
    );
    assert_eq!(bag.render(), before);

    bag.remove(0).unwrap();
    assert!(bag.add(Playdoh::new("blue", 3)).is_ok());
}

// ═══════════════════════════════════════════════════════════════════════
// Removal
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_remove_shifts_following_values() {
    let mut bag = red_and_grey();
    bag.remove(0).unwrap();

    assert_eq!(bag.len(), 1);
    assert_eq!(
        bag.render_at(0).unwrap(),
        r#"Clay { color: "grey", weight: 500 }"#
    );
}

#[test]
fn test_remove_on_empty_is_index_error() {
    let mut bag = OwningContainer::new();
    assert_eq!(
        bag.remove(0),
        Err(ContainerError::IndexError { index: 0, len: 0 })
    );
    assert!(bag.is_empty());
}

#[test]
fn test_remove_past_end_leaves_state() {
    let mut bag = red_and_grey();
    let before = bag.copy();

    assert_eq!(
        bag.remove(2),
        Err(ContainerError::IndexError { index: 2, len: 2 })
    );
    assert_eq!(bag.len(), 2);
    assert!(bag.compare(&before));
}

#[test]
fn test_take_past_end() {
    let mut bag = red_and_grey();
    assert!(bag.take(5).is_err());
    assert_eq!(bag.len(), 2);
}

// ═══════════════════════════════════════════════════════════════════════
// Copying
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_copy_is_structurally_equal() {
    let bag = red_and_grey();
    let copy = bag.copy();

    assert_eq!(copy.len(), bag.len());
    for index in 0..bag.len() {
        assert!(bag.get(index).unwrap().compare(copy.get(index).unwrap()));
    }
    assert_eq!(bag, copy);
}

#[test]
fn test_copy_shares_no_identity() {
    let bag = red_and_grey();
    let copy = bag.copy();

    for (a, b) in bag.iter().zip(copy.iter()) {
        let a = a as *const dyn Value as *const ();
        let b = b as *const dyn Value as *const ();
        assert_ne!(a, b);
    }
}

#[test]
fn test_dropping_copy_keeps_source() {
    let bag = red_and_grey();
    let before = bag.render();
    {
        let mut copy = bag.copy();
        copy.remove(0).unwrap();
    }
    assert_eq!(bag.render(), before);
}

#[test]
fn test_copy_survives_original() {
    let bag = red_and_grey();
    let copy = bag.copy();
    drop(bag);

    assert_eq!(
        copy.render_at(0).unwrap(),
        r#"Playdoh { color: "red", weight: 12 }"#
    );
    assert_eq!(
        copy.render_at(1).unwrap(),
        r#"Clay { color: "grey", weight: 500 }"#
    );
}

#[test]
fn test_copy_keeps_config() {
    let bag = OwningContainer::with_config(ContainerConfig::with_max_len(3));
    assert_eq!(bag.copy().config().max_len, Some(3));
}

// ═══════════════════════════════════════════════════════════════════════
// Comparison and Rendering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_containers_differ_by_variant() {
    let mut a = OwningContainer::new();
    a.add(Playdoh::new("red", 12)).unwrap();
    let mut b = OwningContainer::new();
    b.add(Clay::new("red", 12)).unwrap();

    assert!(!a.compare(&b));
    assert_ne!(a, b);
}

#[test]
fn test_containers_differ_by_length() {
    let a = red_and_grey();
    let mut b = a.copy();
    b.remove(1).unwrap();
    assert!(!a.compare(&b));
}

#[test]
fn test_render_whole_container() {
    let bag = red_and_grey();
    assert_eq!(
        bag.to_string(),
        r#"[Playdoh { color: "red", weight: 12 }, Clay { color: "grey", weight: 500 }]"#
    );
}

mod common;

use classdir::{merge, LayoutError, MergeOptions, Transaction};
use common::*;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::fs;

fn options() -> MergeOptions {
    MergeOptions {
        place: quiet(),
        ..MergeOptions::default()
    }
}

fn write_file(dir: &std::path::Path, name: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), name).unwrap();
}

#[test]
fn test_merge_unions_classes_under_default_name() {
    init_logging();
    let temp = tempfile::tempdir().unwrap();
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    write_file(&a.join("cat"), "a1.jpg");
    write_file(&a.join("dog"), "a2.jpg");
    write_file(&b.join("cat"), "b1.jpg");
    write_file(&b.join("dog"), "b2.jpg");
    write_file(&b.join("dog"), "b3.jpg");

    let mut tx = Transaction::new();
    let report = merge(&mut tx, &[&a, &b], &options()).unwrap();
    tx.commit();

    let base = temp.path().join("a-b");
    assert_eq!(report.base_dir, base);
    assert_eq!(
        names_in(&base.join("cat")),
        BTreeSet::from(["a1.jpg".to_string(), "b1.jpg".to_string()])
    );
    assert_eq!(names_in(&base.join("dog")).len(), 3);
    assert_eq!(report.classes["dog"], 3);
    assert_eq!(report.tally.total(), 5);
}

#[test]
fn test_classes_come_from_first_source() {
    let temp = tempfile::tempdir().unwrap();
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    write_file(&a.join("cat"), "a1.jpg");
    write_file(&b.join("cat"), "b1.jpg");
    write_file(&b.join("owl"), "b2.jpg");

    let mut tx = Transaction::new();
    let report = merge(&mut tx, &[&a, &b], &options()).unwrap();
    tx.commit();

    assert_eq!(names_in(&report.base_dir), BTreeSet::from(["cat".to_string()]));
}

#[test]
fn test_custom_separator_and_explicit_base() {
    let temp = tempfile::tempdir().unwrap();
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    write_file(&a.join("cat"), "a1.jpg");
    write_file(&b.join("cat"), "b1.jpg");

    let mut tx = Transaction::new();
    let opts = MergeOptions {
        separator: "+".to_string(),
        ..options()
    };
    let report = merge(&mut tx, &[&a, &b], &opts).unwrap();
    assert_eq!(report.base_dir, temp.path().join("a+b"));

    let explicit = temp.path().join("merged");
    let opts = MergeOptions {
        base_dir: Some(explicit.clone()),
        ..options()
    };
    let report = merge(&mut tx, &[&a, &b], &opts).unwrap();
    tx.commit();

    assert_eq!(report.base_dir, explicit);
    assert_eq!(names_in(&explicit.join("cat")).len(), 2);
}

#[test]
fn test_class_missing_from_later_source_rolls_back() {
    let temp = tempfile::tempdir().unwrap();
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    write_file(&a.join("cat"), "a1.jpg");
    write_file(&a.join("dog"), "a2.jpg");
    write_file(&b.join("cat"), "b1.jpg");

    let mut tx = Transaction::new();
    let err = merge(&mut tx, &[&a, &b], &options()).unwrap_err();

    assert!(matches!(err, LayoutError::Listing { .. }));
    assert!(!temp.path().join("a-b").exists());
    assert!(tx.is_empty());
}

#[test]
fn test_duplicate_file_name_in_copy_mode_rolls_back() {
    let temp = tempfile::tempdir().unwrap();
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    write_file(&a.join("cat"), "same.jpg");
    write_file(&b.join("cat"), "same.jpg");

    let mut tx = Transaction::new();
    let opts = MergeOptions {
        place: quiet_copy(),
        ..options()
    };
    let err = merge(&mut tx, &[&a, &b], &opts).unwrap_err();

    assert!(matches!(err, LayoutError::Copy { .. }));
    assert!(!temp.path().join("a-b").exists());
    // The first source copy was not overwritten before the rollback
    assert_eq!(fs::read(a.join("cat").join("same.jpg")).unwrap(), b"same.jpg");
}

#[test]
fn test_no_sources_is_rejected() {
    let mut tx = Transaction::new();
    let sources: [&std::path::Path; 0] = [];
    let err = merge(&mut tx, &sources, &options()).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidArgument(_)));
}

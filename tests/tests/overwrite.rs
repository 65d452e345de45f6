//! Filling caller-owned records from matching rows.

use csvbind_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_overwrite_by_predicate() {
    // GIVEN
    let file = CsvFile::with_contents(CONFIGURATION_SEED);
    let mut target = DisplayConfiguration {
        name: "right".into(),
        index: 1,
        ..Default::default()
    };

    // WHEN
    let applied = CsvStore::new()
        .overwrite_into(file.path(), &mut target, |d: &DisplayConfiguration| d.index == 1)
        .unwrap();

    // THEN
    assert!(applied);
    assert_eq!(
        target,
        DisplayConfiguration {
            name: "right".into(),
            ..configuration(1, 3.5, 3.9, 1921, 1081)
        }
    );
    assert_eq!(file.contents(), CONFIGURATION_SEED);
}

#[test]
fn test_overwrite_by_key_column() {
    let file = CsvFile::with_contents(CONFIGURATION_SEED);
    let mut target = configuration(0, 0.0, 0.0, 0, 0);

    let applied = CsvStore::new()
        .overwrite_where(file.path(), &mut target, "index")
        .unwrap();

    assert!(applied);
    assert_eq!(target, configuration(0, 2.5, 2.9, 1920, 1080));
}

#[test]
fn test_no_match_leaves_target_unchanged() {
    let file = CsvFile::with_contents(CONFIGURATION_SEED);
    let mut target = configuration(5, 1.0, 1.0, 10, 10);

    let applied = CsvStore::new()
        .overwrite_where(file.path(), &mut target, "index")
        .unwrap();

    assert!(!applied);
    assert_eq!(target, configuration(5, 1.0, 1.0, 10, 10));
}

#[test]
fn test_header_only_file_is_insufficient() {
    let file = CsvFile::with_contents("index,width\n");
    let mut target = configuration(0, 1.0, 1.0, 10, 10);

    let err = CsvStore::new()
        .overwrite_where(file.path(), &mut target, "index")
        .unwrap_err();

    assert!(err.is_insufficient_data());
    assert_eq!(target, configuration(0, 1.0, 1.0, 10, 10));
}

#[test]
fn test_key_column_must_be_bound() {
    let file = CsvFile::with_contents("name,index\nleft,0\n");
    let mut target = DisplayConfiguration::default();

    let err = CsvStore::new()
        .overwrite_where(file.path(), &mut target, "name")
        .unwrap_err();

    assert!(matches!(err, StoreError::FilterColumnNotFound { ref column, .. } if column == "name"));
}

#[test]
fn test_ignored_column_in_file_is_not_applied() {
    // GIVEN
    let file = CsvFile::with_contents(
        "name,index,size_x,size_y,width,height\nfrom-file,1,3.5,3.9,1921,1081\n",
    );
    let mut target = DisplayConfiguration {
        name: "mine".into(),
        index: 1,
        ..Default::default()
    };

    // WHEN
    let applied = CsvStore::new()
        .overwrite_where(file.path(), &mut target, "index")
        .unwrap();

    // THEN
    assert!(applied);
    assert_eq!(target.name, "mine");
    assert_eq!(target.width, 1921);
    assert_eq!(target.size_y, 3.9);
}

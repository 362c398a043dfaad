use name_sorter::core::write::{create_write_strategy, WriteStrategyKind, DEFAULT_OUTPUT_FILE};
use name_sorter::{PersonName, SorterError, WriteStrategy};
use std::fs;
use tempfile::TempDir;

fn names(entries: &[(&[&str], &str)]) -> Vec<PersonName> {
    entries
        .iter()
        .map(|(given, last)| {
            PersonName::new(given.iter().map(|s| s.to_string()).collect(), *last)
        })
        .collect()
}

#[test]
fn test_file_strategy_writes_one_name_per_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.txt");
    let strategy = create_write_strategy(WriteStrategyKind::File, path.to_str());

    strategy
        .write(&names(&[(&["File"], "Writer"), (&["X"], "Y")]))
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "File Writer\nX Y\n");
}

#[test]
fn test_file_strategy_overwrites_existing_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.txt");
    let strategy = create_write_strategy(WriteStrategyKind::File, path.to_str());

    strategy.write(&names(&[(&["Old"], "Content")])).unwrap();
    strategy.write(&names(&[(&["New"], "Content")])).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "New Content\n");
}

#[test]
fn test_file_strategy_creates_empty_file_for_empty_batch() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.txt");
    let strategy = create_write_strategy(WriteStrategyKind::File, path.to_str());

    strategy.write(&[]).unwrap();

    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_file_strategy_fails_on_unwritable_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing-dir").join("out.txt");
    let strategy = create_write_strategy(WriteStrategyKind::File, path.to_str());

    let result = strategy.write(&names(&[(&["X"], "Y")]));

    assert!(matches!(result, Err(SorterError::IoError(_))));
}

#[test]
fn test_unknown_tag_falls_back_to_file_strategy() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fallback.txt");
    let strategy = create_write_strategy(WriteStrategyKind::from_tag("printer"), path.to_str());

    strategy.write(&names(&[(&["Fall"], "Back")])).unwrap();

    assert!(path.exists());
}

#[test]
fn test_default_output_file_name() {
    assert_eq!(DEFAULT_OUTPUT_FILE, "sorted-names-list.txt");
}

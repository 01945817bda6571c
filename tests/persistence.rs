use cpap_tracker::store::{SlotBackend, SqliteSlots, ENTRIES_KEY};
use cpap_tracker::{EntryCollection, EntryStore, StoreError, UsageRecord};
use pretty_assertions::assert_eq;

fn open(path: &std::path::Path) -> EntryStore {
    EntryStore::new(SqliteSlots::open(path).unwrap())
}

#[test]
fn test_entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cpap_data.sqlite");

    let first = EntryCollection::new().appended(UsageRecord::new("2024-01-01", "22:00"));
    open(&path).save(&first).unwrap();

    let second = first.appended(UsageRecord::new("2024-01-02", "23:15"));
    open(&path).save(&second).unwrap();

    assert_eq!(open(&path).load().unwrap(), second);
}

#[test]
fn test_fresh_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir.path().join("cpap_data.sqlite"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_reported_and_recoverable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cpap_data.sqlite");
    SqliteSlots::open(&path)
        .unwrap()
        .write(ENTRIES_KEY, "[{\"date\":")
        .unwrap();

    let store = open(&path);
    assert!(matches!(store.load(), Err(StoreError::CorruptStore(_))));
    assert!(store.load_or_empty().is_empty());

    let fresh = EntryCollection::new().appended(UsageRecord::new("2024-02-01", "21:45"));
    store.save(&fresh).unwrap();
    assert_eq!(store.load().unwrap(), fresh);
}

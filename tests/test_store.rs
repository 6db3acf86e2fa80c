//! Integration tests for the file-backed portfolio store.
//!
//! Tests cover:
//! - Save/load round-trips, including list-item ids
//! - Missing and malformed data files treated as a first run
//! - Wholesale replacement on save
//! - Parent directory creation and temp-file cleanup

mod common;

use std::fs;

use common::*;
use folio::{JsonFileStore, PortfolioStore};

#[test]
fn test_round_trip_is_deep_equal() -> anyhow::Result<()> {
    // 1. Save a fully populated record
    let (store, _dir) = temp_store();
    let record = sample_record();
    store.save(&record)?;

    // 2. Load it back and compare everything, ids included
    let loaded = store.load()?.expect("record should exist after save");
    assert_eq!(loaded, record);
    assert_eq!(loaded.projects[0].id, record.projects[0].id);

    Ok(())
}

#[test]
fn test_missing_file_is_a_first_run() -> anyhow::Result<()> {
    let (store, _dir) = temp_store();
    assert_eq!(store.load()?, None);
    Ok(())
}

#[test]
fn test_malformed_file_is_treated_as_absent() -> anyhow::Result<()> {
    // 1. Write garbage where the record should be
    let (store, _dir) = temp_store();
    fs::write(store.path(), "{ not json at all")?;

    // 2. Loading fails closed instead of erroring out
    assert_eq!(store.load()?, None);

    Ok(())
}

#[test]
fn test_save_replaces_the_record_wholesale() -> anyhow::Result<()> {
    // 1. Save one record, then a completely different one
    let (store, _dir) = temp_store();
    store.save(&sample_record())?;

    let replacement = folio::PortfolioRecord {
        name: "Grace Hopper".to_string(),
        ..folio::PortfolioRecord::default()
    };
    store.save(&replacement)?;

    // 2. Only the replacement remains
    let loaded = store.load()?.expect("record should exist");
    assert_eq!(loaded.name, "Grace Hopper");
    assert!(loaded.projects.is_empty());

    Ok(())
}

#[test]
fn test_save_creates_missing_parent_directories() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let store = JsonFileStore::new(dir.path().join("nested/deeper/portfolio.json"));

    store.save(&sample_record())?;
    assert!(store.load()?.is_some());

    Ok(())
}

#[test]
fn test_save_leaves_no_temp_file_behind() -> anyhow::Result<()> {
    let (store, dir) = temp_store();
    store.save(&sample_record())?;

    let entries: Vec<_> = fs::read_dir(dir.path())?
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["portfolio.json"]);

    Ok(())
}

//! Tests for Inventory
//!
//! These tests verify:
//! - Load from missing, empty, header-only and mixed-quality files
//! - Capture (store + single-line append)
//! - Restock lowest (in-place update + full rewrite)
//! - Search, value per item, highest quantity
//! - Empty-store preconditions

use std::fs;
use std::path::PathBuf;

use shoestock::config::{Config, SyncStrategy};
use shoestock::inventory::{Inventory, LoadStatus};
use shoestock::record::Shoe;
use shoestock::storage::HEADER;
use shoestock::InventoryError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_inventory() -> (TempDir, PathBuf, Inventory) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.txt");
    let config = Config::builder()
        .inventory_path(&path)
        .sync_strategy(SyncStrategy::EveryWrite)
        .build();
    let inventory = Inventory::new(config);
    (temp_dir, path, inventory)
}

fn write_inventory(path: &PathBuf, lines: &[&str]) {
    let mut contents = format!("{}\n", HEADER);
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(path, contents).unwrap();
}

/// Quantities [5, 12, 3, 12]
fn setup_loaded_inventory() -> (TempDir, PathBuf, Inventory) {
    let (temp, path, mut inventory) = setup_temp_inventory();
    write_inventory(
        &path,
        &[
            "UK,AB1,RunnerX,10.00,5",
            "US,CD2,Trail Pro,120,12",
            "ZA,EF3,Court Classic,45.5,3",
            "JP,GH4,Sprint Lite,80,12",
        ],
    );
    inventory.load().unwrap();
    (temp, path, inventory)
}

fn file_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_creates_header_only_file() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    assert!(!path.exists());

    let report = inventory.load().unwrap();

    assert_eq!(report.status, LoadStatus::Created);
    assert_eq!(report.loaded, 0);
    assert!(inventory.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{}\n", HEADER));
}

#[test]
fn test_load_empty_file() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    fs::write(&path, "").unwrap();

    let report = inventory.load().unwrap();

    assert_eq!(report.status, LoadStatus::EmptyFile);
    assert!(inventory.is_empty());
}

#[test]
fn test_load_header_only() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    write_inventory(&path, &[]);

    let report = inventory.load().unwrap();

    assert_eq!(report.status, LoadStatus::Loaded);
    assert_eq!(report.loaded, 0);
    assert!(report.skipped.is_empty());
    assert!(inventory.is_empty());
}

#[test]
fn test_load_preserves_file_order_and_duplicates() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    write_inventory(
        &path,
        &[
            "UK,AB1,RunnerX,59.99,20",
            "US,AB1,RunnerX US,61,4",
            "ZA,CD2,Trail Pro,120,3",
        ],
    );

    let report = inventory.load().unwrap();

    assert_eq!(report.loaded, 3);
    let codes: Vec<&str> = inventory.records().iter().map(|s| s.code()).collect();
    assert_eq!(codes, vec!["AB1", "AB1", "CD2"]);
    assert_eq!(inventory.records()[0].country(), "UK");
}

#[test]
fn test_load_skips_wrong_field_counts() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    write_inventory(
        &path,
        &[
            "UK,AB1,RunnerX,59.99,20",
            "UK,XX1,Broken,10",
            "UK,XX2,Broken,Too,10,4",
            "US,CD2,Trail Pro,120,3",
        ],
    );

    let report = inventory.load().unwrap();

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.skipped[0].line_number, 3);
    assert!(matches!(
        report.skipped[0].reason,
        InventoryError::MalformedLine { found: 4 }
    ));
    assert!(matches!(
        report.skipped[1].reason,
        InventoryError::MalformedLine { found: 6 }
    ));
    assert!(inventory.find_by_code("XX1").is_err());
    assert!(inventory.find_by_code("XX2").is_err());
}

#[test]
fn test_load_skips_non_numeric_cost() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    write_inventory(
        &path,
        &[
            "US,CD2,Trail Pro,120,3",
            "UK,AB1,RunnerX,abc,10",
            "ZA,EF3,Court Classic,45.5,8",
        ],
    );

    let report = inventory.load().unwrap();

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, "UK,AB1,RunnerX,abc,10");
    assert_eq!(inventory.records()[0].code(), "CD2");
    assert_eq!(inventory.records()[1].code(), "EF3");
}

#[test]
fn test_load_replaces_previous_contents() {
    let (_temp, path, mut inventory) = setup_loaded_inventory();
    assert_eq!(inventory.len(), 4);

    write_inventory(&path, &["UK,AB1,RunnerX,59.99,20"]);
    inventory.load().unwrap();

    assert_eq!(inventory.len(), 1);
}

#[test]
fn test_load_io_error_keeps_partial_records() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    let mut bytes = format!("{}\n", HEADER).into_bytes();
    bytes.extend_from_slice(b"UK,AB1,R,1,2\nUK,\xff\xfe,R,1,2\nUS,CD2,T,1,3\n");
    fs::write(&path, bytes).unwrap();

    let result = inventory.load();

    assert!(matches!(result, Err(InventoryError::Io(_))));
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.records()[0].code(), "AB1");
}

#[test]
fn test_load_reports_skipped_line_with_trimmed_fields() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    write_inventory(&path, &["UK,AB1,RunnerX,59.99,20", " UK , XX1 ,Broken, 10 "]);

    let report = inventory.load().unwrap();

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line_number, 3);
    assert_eq!(report.skipped[0].line, "UK,XX1,Broken,10");
}

// =============================================================================
// Capture Tests
// =============================================================================

#[test]
fn test_capture_appends_one_line() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    inventory.load().unwrap();

    let shoe = Shoe::parse("UK", "AB1", "RunnerX", "59.99", "20").unwrap();
    inventory.capture(shoe).unwrap();

    assert_eq!(inventory.len(), 1);
    assert_eq!(
        inventory.records()[0],
        Shoe::new("UK", "AB1", "RunnerX", 59.99, 20)
    );
    assert_eq!(
        file_lines(&path),
        vec![HEADER.to_string(), "UK,AB1,RunnerX,59.99,20".to_string()]
    );
}

#[test]
fn test_capture_does_not_touch_existing_lines() {
    let (_temp, path, mut inventory) = setup_loaded_inventory();
    let before = file_lines(&path);

    inventory
        .capture(Shoe::new("FR", "IJ5", "Velo", 99.9, 1))
        .unwrap();

    let after = file_lines(&path);
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().unwrap(), "FR,IJ5,Velo,99.9,1");
}

#[test]
fn test_captured_record_survives_reload() {
    let (_temp, _path, mut inventory) = setup_loaded_inventory();

    inventory
        .capture(Shoe::new("FR", "IJ5", "Velo", 99.9, 1))
        .unwrap();
    inventory.load().unwrap();

    assert_eq!(inventory.len(), 5);
    assert_eq!(inventory.find_by_code("ij5").unwrap().product(), "Velo");
}

#[test]
fn test_capture_rejects_comma_in_text_field() {
    let (_temp, path, mut inventory) = setup_loaded_inventory();
    let before = file_lines(&path);

    let result = inventory.capture(Shoe::new("UK", "KL6", "Runner, Red", 50.0, 2));

    assert!(matches!(
        result,
        Err(InventoryError::UnsupportedComma { field: "product", .. })
    ));
    assert_eq!(inventory.len(), 4);
    assert_eq!(file_lines(&path), before);
}

// =============================================================================
// Restock Tests
// =============================================================================

#[test]
fn test_lowest_picks_minimum_quantity() {
    let (_temp, _path, inventory) = setup_loaded_inventory();

    let lowest = inventory.lowest().unwrap();

    assert_eq!(lowest.code(), "EF3");
    assert_eq!(lowest.quantity(), 3);
}

#[test]
fn test_lowest_tie_picks_first() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    write_inventory(
        &path,
        &["UK,AB1,RunnerX,10,2", "US,CD2,Trail,10,2", "ZA,EF3,Court,10,9"],
    );
    inventory.load().unwrap();

    assert_eq!(inventory.lowest().unwrap().code(), "AB1");
}

#[test]
fn test_restock_lowest_updates_only_that_record_and_rewrites() {
    let (_temp, path, mut inventory) = setup_loaded_inventory();

    let restocked = inventory.restock_lowest(5).unwrap();
    assert_eq!(restocked.code(), "EF3");
    assert_eq!(restocked.quantity(), 8);

    let quantities: Vec<u32> = inventory.records().iter().map(|s| s.quantity()).collect();
    assert_eq!(quantities, vec![5, 12, 8, 12]);

    assert_eq!(
        file_lines(&path),
        vec![
            HEADER.to_string(),
            "UK,AB1,RunnerX,10,5".to_string(),
            "US,CD2,Trail Pro,120,12".to_string(),
            "ZA,EF3,Court Classic,45.5,8".to_string(),
            "JP,GH4,Sprint Lite,80,12".to_string(),
        ]
    );
}

#[test]
fn test_restock_reflects_earlier_captures() {
    let (_temp, path, mut inventory) = setup_loaded_inventory();
    inventory
        .capture(Shoe::new("FR", "IJ5", "Velo", 99.9, 1))
        .unwrap();

    inventory.restock_lowest(10).unwrap();

    let lines = file_lines(&path);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[5], "FR,IJ5,Velo,99.9,11");
}

#[test]
fn test_restock_zero_is_cancelled_without_rewrite() {
    let (_temp, path, mut inventory) = setup_loaded_inventory();
    // Leave a marker the rewrite would remove
    fs::write(&path, "marker\n").unwrap();

    let result = inventory.restock_lowest(0);

    assert!(matches!(result, Err(InventoryError::RestockCancelled)));
    assert_eq!(inventory.lowest().unwrap().quantity(), 3);
    assert_eq!(fs::read_to_string(&path).unwrap(), "marker\n");
}

#[test]
fn test_restock_overflow_is_rejected() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    write_inventory(&path, &[&format!("UK,AB1,RunnerX,10,{}", u32::MAX - 1)]);
    inventory.load().unwrap();

    let result = inventory.restock_lowest(5);

    assert!(matches!(
        result,
        Err(InventoryError::QuantityOverflow { .. })
    ));
    assert_eq!(inventory.records()[0].quantity(), u32::MAX - 1);
}

#[test]
fn test_restock_rewrite_failure_restores_quantity() {
    let (temp, _path, _) = setup_temp_inventory();
    let path = temp.path().join("inventory.txt");
    write_inventory(&path, &["UK,AB1,RunnerX,10,5"]);

    let mut inventory = Inventory::with_path(&path);
    inventory.load().unwrap();

    // Replace the file with a directory so the rewrite cannot open it
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let result = inventory.restock_lowest(5);

    assert!(matches!(result, Err(InventoryError::Io(_))));
    assert_eq!(inventory.records()[0].quantity(), 5);
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_search_is_case_insensitive() {
    let (_temp, _path, inventory) = setup_loaded_inventory();

    let shoe = inventory.find_by_code("ab1").unwrap();

    assert_eq!(shoe.product(), "RunnerX");
}

#[test]
fn test_search_trims_query() {
    let (_temp, _path, inventory) = setup_loaded_inventory();

    assert_eq!(inventory.find_by_code("  cd2 ").unwrap().code(), "CD2");
}

#[test]
fn test_search_has_no_partial_matching() {
    let (_temp, _path, inventory) = setup_loaded_inventory();

    let result = inventory.find_by_code("AB");

    assert!(matches!(result, Err(InventoryError::NotFound(ref code)) if code == "AB"));
}

#[test]
fn test_search_returns_first_duplicate() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    write_inventory(&path, &["UK,AB1,First,10,1", "US,ab1,Second,10,1"]);
    inventory.load().unwrap();

    assert_eq!(inventory.find_by_code("AB1").unwrap().product(), "First");
}

#[test]
fn test_value_per_item() {
    let (_temp, _path, inventory) = setup_loaded_inventory();

    let values = inventory.value_per_item().unwrap();

    assert_eq!(values.len(), 4);
    assert_eq!(values[0].code, "AB1");
    assert_eq!(values[0].product, "RunnerX");
    assert!((values[0].value - 50.0).abs() < 1e-9);
    assert!((values[2].value - 136.5).abs() < 1e-9);
}

#[test]
fn test_value_cost_ten_quantity_three() {
    let (_temp, path, mut inventory) = setup_temp_inventory();
    write_inventory(&path, &["UK,AB1,RunnerX,10.00,3"]);
    inventory.load().unwrap();

    let values = inventory.value_per_item().unwrap();

    assert_eq!(format!("{:.2}", values[0].value), "30.00");
}

#[test]
fn test_highest_quantity_tie_picks_first() {
    let (_temp, _path, inventory) = setup_loaded_inventory();

    let highest = inventory.highest_quantity().unwrap();

    assert_eq!(highest.code(), "CD2");
    assert_eq!(highest.quantity(), 12);
}

// =============================================================================
// Empty Store Tests
// =============================================================================

#[test]
fn test_operations_on_empty_store() {
    let (_temp, path, mut inventory) = setup_temp_inventory();

    assert!(matches!(inventory.list(), Err(InventoryError::EmptyInventory)));
    assert!(matches!(inventory.lowest(), Err(InventoryError::EmptyInventory)));
    assert!(matches!(
        inventory.restock_lowest(5),
        Err(InventoryError::EmptyInventory)
    ));
    assert!(matches!(
        inventory.find_by_code("AB1"),
        Err(InventoryError::EmptyInventory)
    ));
    assert!(matches!(
        inventory.value_per_item(),
        Err(InventoryError::EmptyInventory)
    ));
    assert!(matches!(
        inventory.highest_quantity(),
        Err(InventoryError::EmptyInventory)
    ));

    // Nothing touched the disk
    assert!(!path.exists());
}

//! End-to-end dataset generation tests.
//!
//! These run the full generate -> write workflow into a temporary
//! directory and read the CSV files back.

use promo_pulse::{write_all, OUTPUT_FILES, PRODUCTS_FILE, SALES_FILE, STORES_FILE};
use retail_core::DatasetConfig;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SEED: u64 = 42;

fn small_config() -> DatasetConfig {
    let mut config = DatasetConfig {
        seed: SEED,
        ..DatasetConfig::default()
    };
    config.sales.count = 3_000;
    config.inventory.days = 2;
    config
}

fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[test]
fn test_reference_dataset_sizes() {
    let temp_dir = TempDir::new().unwrap();
    let config = DatasetConfig::default();

    let summary = write_all(&config, temp_dir.path()).unwrap();

    assert_eq!(summary.rows_written("products"), Some(300));
    assert_eq!(summary.rows_written("stores"), Some(18));
    let sales = summary.rows_written("sales_raw").unwrap();
    assert!((30_150..=30_300).contains(&sales), "sales rows: {sales}");
    assert_eq!(
        summary.rows_written("inventory_snapshot"),
        Some(30 * 150 * 18)
    );
    assert_eq!(summary.rows_written("campaign_plan"), Some(10));

    for file in OUTPUT_FILES {
        assert!(temp_dir.path().join(file).exists(), "{file} missing");
    }
}

#[test]
fn test_headers() {
    let temp_dir = TempDir::new().unwrap();
    write_all(&small_config(), temp_dir.path()).unwrap();

    let expected: HashMap<&str, &str> = [
        (
            "products.csv",
            "product_id,category,brand,base_price_aed,unit_cost_aed,tax_rate,launch_flag",
        ),
        ("stores.csv", "store_id,city,channel,fulfillment_type"),
        (
            "sales_raw.csv",
            "order_id,order_time,product_id,store_id,qty,selling_price_aed,discount_pct,payment_status,return_flag,city_raw",
        ),
        (
            "inventory_snapshot.csv",
            "snapshot_date,product_id,store_id,stock_on_hand,reorder_point,lead_time_days",
        ),
        (
            "campaign_plan.csv",
            "campaign_id,start_date,end_date,city,channel,category,discount_pct,promo_budget_aed",
        ),
    ]
    .into_iter()
    .collect();

    for file in OUTPUT_FILES {
        let content = fs::read_to_string(temp_dir.path().join(file)).unwrap();
        assert_eq!(content.lines().next(), Some(expected[file]), "{file}");
    }
}

#[test]
fn test_rerun_overwrites_with_identical_content() {
    let temp_dir = TempDir::new().unwrap();
    let config = small_config();

    write_all(&config, temp_dir.path()).unwrap();
    let first: Vec<Vec<u8>> = OUTPUT_FILES
        .iter()
        .map(|f| fs::read(temp_dir.path().join(f)).unwrap())
        .collect();

    write_all(&config, temp_dir.path()).unwrap();
    let second: Vec<Vec<u8>> = OUTPUT_FILES
        .iter()
        .map(|f| fs::read(temp_dir.path().join(f)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_same_seed_same_bytes_across_directories() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();

    write_all(&small_config(), dir_a.path()).unwrap();
    write_all(&small_config(), dir_b.path()).unwrap();

    for file in OUTPUT_FILES {
        let a = fs::read(dir_a.path().join(file)).unwrap();
        let b = fs::read(dir_b.path().join(file)).unwrap();
        assert_eq!(a, b, "{file} differs");
    }
}

#[test]
fn test_different_seed_changes_sales() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let mut other = small_config();
    other.seed = SEED + 1;

    write_all(&small_config(), dir_a.path()).unwrap();
    write_all(&other, dir_b.path()).unwrap();

    let a = fs::read(dir_a.path().join(SALES_FILE)).unwrap();
    let b = fs::read(dir_b.path().join(SALES_FILE)).unwrap();
    assert_ne!(a, b);

    // The store directory does not depend on the seed.
    let a = fs::read(dir_a.path().join(STORES_FILE)).unwrap();
    let b = fs::read(dir_b.path().join(STORES_FILE)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_creates_nested_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("nested").join("data");

    write_all(&small_config(), &out).unwrap();
    assert!(out.join(PRODUCTS_FILE).exists());
}

#[test]
fn test_output_directory_blocked_by_file() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("data");
    fs::write(&blocker, "not a directory").unwrap();

    let result = write_all(&small_config(), &blocker);
    assert!(result.is_err());
}

#[test]
fn test_written_defects_match_report() {
    let temp_dir = TempDir::new().unwrap();
    let summary = write_all(&small_config(), temp_dir.path()).unwrap();

    let (_, products) = read_rows(&temp_dir.path().join(PRODUCTS_FILE));
    let empty_costs = products.iter().filter(|r| r[4].is_empty()).count();
    let expected_empty = summary
        .dataset
        .products
        .products
        .iter()
        .filter(|p| p.unit_cost.is_none())
        .count();
    assert_eq!(empty_costs, expected_empty);

    let (headers, sales) = read_rows(&temp_dir.path().join(SALES_FILE));
    assert_eq!(headers.len(), 10);
    assert_eq!(sales.len(), summary.dataset.sales.orders.len());

    let unparseable = sales
        .iter()
        .filter(|r| chrono::NaiveDateTime::parse_from_str(&r[1], "%Y-%m-%d %H:%M:%S").is_err())
        .count();
    let corrupted = summary
        .dataset
        .sales
        .report
        .count(retail_generator::DefectKind::CorruptedTimestamp);
    assert_eq!(unparseable, corrupted);

    let mut ids: HashMap<&str, usize> = HashMap::new();
    for row in &sales {
        *ids.entry(row[0].as_str()).or_default() += 1;
    }
    let repeated = ids.values().filter(|n| **n > 1).count();
    assert_eq!(repeated, summary.dataset.sales.duplicate_count());
}

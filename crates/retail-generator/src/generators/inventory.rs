//! Daily inventory snapshot generator.

use crate::defects::inventory::{inject_extreme_stock, inject_negative_stock};
use crate::defects::{DefectKind, DefectReport};
use crate::generator::GeneratorError;
use crate::stream::{Component, RandomStream};
use chrono::Duration;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::index;
use rand_distr::Normal;
use retail_core::{InventoryConfig, InventorySnapshot, Product, Store};

const STOCK_MEAN: f64 = 35.0;
const STOCK_SD: f64 = 20.0;

const REORDER_MEAN: f64 = 15.0;
const REORDER_SD: f64 = 6.0;
const REORDER_FLOOR: f64 = 5.0;

const LEAD_TIMES: [u32; 6] = [2, 3, 4, 5, 7, 10];
const LEAD_TIME_WEIGHTS: [f64; 6] = [0.10, 0.20, 0.25, 0.20, 0.15, 0.10];

/// Inventory table plus the defects injected into it.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryBatch {
    pub snapshots: Vec<InventorySnapshot>,
    /// Product IDs tracked in the snapshot, in sampling order.
    pub tracked_products: Vec<String>,
    pub report: DefectReport,
}

/// Number of products tracked for a catalog of `catalog_size`.
pub fn tracked_count(catalog_size: usize, sample_fraction: f64) -> usize {
    ((catalog_size as f64 * sample_fraction).round() as usize).min(catalog_size)
}

/// Generate one row per day, tracked product and store, then inject stock
/// defects.
///
/// Rows are ordered date-major, then tracked product, then store.
pub fn generate_inventory_snapshot(
    products: &[Product],
    stores: &[Store],
    config: &InventoryConfig,
    seed: u64,
) -> Result<InventoryBatch, GeneratorError> {
    let mut rng = RandomStream::new(seed).rng_for(Component::Inventory);

    let amount = tracked_count(products.len(), config.sample_fraction);
    let tracked_products: Vec<String> = index::sample(&mut rng, products.len(), amount)
        .iter()
        .map(|idx| products[idx].product_id.clone())
        .collect();

    let stock = Normal::new(STOCK_MEAN, STOCK_SD)?;
    let reorder = Normal::new(REORDER_MEAN, REORDER_SD)?;
    let lead_times = WeightedIndex::new(LEAD_TIME_WEIGHTS)?;

    let capacity = config.days as usize * tracked_products.len() * stores.len();
    let mut snapshots = Vec::with_capacity(capacity);
    for day in 0..config.days {
        let snapshot_date = config.start_date + Duration::days(i64::from(day));
        for product_id in &tracked_products {
            for store in stores {
                // Truncation toward zero floors the non-negative draws.
                let stock_on_hand = stock.sample(&mut rng).max(0.0) as i64;
                let reorder_point = reorder.sample(&mut rng).max(REORDER_FLOOR) as i64;
                let lead_time_days = LEAD_TIMES[lead_times.sample(&mut rng)];

                snapshots.push(InventorySnapshot {
                    snapshot_date,
                    product_id: product_id.clone(),
                    store_id: store.store_id.clone(),
                    stock_on_hand,
                    reorder_point,
                    lead_time_days,
                });
            }
        }
    }

    let mut report = DefectReport::default();
    let snapshots = report.record(
        DefectKind::NegativeStock,
        inject_negative_stock(snapshots, &mut rng, &config.negative_stock),
    );
    let snapshots = report.record(
        DefectKind::ExtremeStock,
        inject_extreme_stock(snapshots, &mut rng, &config.extreme_stock),
    );

    Ok(InventoryBatch {
        snapshots,
        tracked_products,
        report,
    })
}

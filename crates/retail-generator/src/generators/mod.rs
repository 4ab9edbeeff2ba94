//! Table generators.
//!
//! Each generator samples clean rows from its component stream and then
//! runs the defect passes of its table, recording them in a
//! [`crate::DefectReport`].

pub mod campaigns;
pub mod inventory;
pub mod products;
pub mod sales;
pub mod stores;

pub use campaigns::generate_campaign_plan;
pub use inventory::{generate_inventory_snapshot, InventoryBatch};
pub use products::{generate_products, ProductCatalog};
pub use sales::{generate_sales_raw, SalesBatch};
pub use stores::generate_stores;

use rand::Rng;

/// Pick one element uniformly. `values` must not be empty.
pub(crate) fn pick<T: Copy, R: Rng>(rng: &mut R, values: &[T]) -> T {
    values[rng.gen_range(0..values.len())]
}

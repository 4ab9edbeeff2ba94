//! Defects of the inventory snapshot table.

use super::{resolve_rate, rewrite_masked, Injected};
use rand::Rng;
use retail_core::{DefectRate, InventorySnapshot};

/// Stock value written by [`inject_extreme_stock`].
pub const EXTREME_STOCK: i64 = 9999;

/// Most negative stock written by [`inject_negative_stock`].
pub const MIN_NEGATIVE_STOCK: i64 = -60;

/// Replace the stock of masked rows with a negative count in `[-60, -1]`.
pub fn inject_negative_stock<R: Rng>(
    snapshots: Vec<InventorySnapshot>,
    rng: &mut R,
    rate: &DefectRate,
) -> Injected<InventorySnapshot> {
    let p = resolve_rate(rate, rng);
    rewrite_masked(snapshots, rng, p, |snapshot, rng| {
        snapshot.stock_on_hand = rng.gen_range(MIN_NEGATIVE_STOCK..=-1);
    })
}

/// Replace the stock of masked rows with [`EXTREME_STOCK`].
pub fn inject_extreme_stock<R: Rng>(
    snapshots: Vec<InventorySnapshot>,
    rng: &mut R,
    rate: &DefectRate,
) -> Injected<InventorySnapshot> {
    let p = resolve_rate(rate, rng);
    rewrite_masked(snapshots, rng, p, |snapshot, _| {
        snapshot.stock_on_hand = EXTREME_STOCK;
    })
}

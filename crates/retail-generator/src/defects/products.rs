//! Defects of the product master table.

use super::{resolve_rate, rewrite_masked, round2, Injected};
use rand::Rng;
use retail_core::{DefectRate, Product};

/// Unit cost as a multiple of base price for cost-above-price rows.
const COST_ABOVE_PRICE_RATIO: (f64, f64) = (1.05, 1.25);

/// Drop the unit cost of masked rows.
pub fn inject_missing_cost<R: Rng>(
    products: Vec<Product>,
    rng: &mut R,
    rate: &DefectRate,
) -> Injected<Product> {
    let p = resolve_rate(rate, rng);
    rewrite_masked(products, rng, p, |product, _| {
        product.unit_cost = None;
    })
}

/// Raise the unit cost of masked rows above their base price.
///
/// Runs after [`inject_missing_cost`] with an independent mask, so it may
/// refill a cost that pass dropped.
pub fn inject_cost_above_price<R: Rng>(
    products: Vec<Product>,
    rng: &mut R,
    rate: &DefectRate,
) -> Injected<Product> {
    let p = resolve_rate(rate, rng);
    let (low, high) = COST_ABOVE_PRICE_RATIO;
    rewrite_masked(products, rng, p, |product, rng| {
        product.unit_cost = Some(round2(product.base_price * rng.gen_range(low..high)));
    })
}

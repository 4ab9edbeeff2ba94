//! Defects of the raw sales table.
//!
//! Applied by [`crate::generate_sales_raw`] in this order:
//!
//! 1. [`inject_inconsistent_city`] - every row
//! 2. [`inject_missing_discount`]
//! 3. [`inject_duplicate_orders`] - appends rows
//! 4. [`inject_corrupted_timestamps`] - sees the duplicates
//! 5. [`inject_quantity_outliers`]
//! 6. [`inject_price_outliers`]
//! 7. [`inject_malformed_payment`]

use super::{resolve_rate, rewrite_masked, round2, Injected};
use chrono::{Duration, NaiveDateTime};
use rand::seq::index;
use rand::Rng;
use retail_core::{DefectRate, PaymentLabel, SalesOrder, DIRTY_CITIES, ORDER_TIME_FORMAT};

/// Replacement values for corrupted `order_time` fields.
pub const CORRUPTED_TIMESTAMPS: [&str; 4] = ["not_a_time", "2024-13-45", "2023/99/99", ""];

/// Replacement values for corrupted payment labels.
pub const MALFORMED_PAYMENT_LABELS: [&str; 3] = ["paid", "PAID", "unknown"];

/// Minutes a duplicated order is shifted by, inclusive.
pub const DUPLICATE_OFFSET_MINUTES: (i64, i64) = (1, 240);

/// Quantity of an outlier row, inclusive.
pub const QUANTITY_OUTLIER_RANGE: (u32, u32) = (20, 30);

/// Factor applied to the price of an outlier row.
pub const PRICE_OUTLIER_FACTOR: (f64, f64) = (3.0, 5.0);

/// Fill `city_raw` of every row from the dirty city vocabulary.
pub fn inject_inconsistent_city<R: Rng>(
    mut orders: Vec<SalesOrder>,
    rng: &mut R,
) -> Injected<SalesOrder> {
    for order in &mut orders {
        order.city_raw = DIRTY_CITIES[rng.gen_range(0..DIRTY_CITIES.len())];
    }
    let affected = orders.len();
    Injected {
        rows: orders,
        affected,
    }
}

/// Null the discount of masked rows.
pub fn inject_missing_discount<R: Rng>(
    orders: Vec<SalesOrder>,
    rng: &mut R,
    rate: &DefectRate,
) -> Injected<SalesOrder> {
    let p = resolve_rate(rate, rng);
    rewrite_masked(orders, rng, p, |order, _| {
        order.discount_pct = None;
    })
}

/// Append copies of a random subset of orders with a later timestamp.
///
/// Exactly `floor(len * rate)` distinct rows are copied, so every
/// duplicated `order_id` appears exactly twice after this pass.
pub fn inject_duplicate_orders<R: Rng>(
    mut orders: Vec<SalesOrder>,
    rng: &mut R,
    rate: &DefectRate,
) -> Injected<SalesOrder> {
    let p = resolve_rate(rate, rng);
    let count = ((orders.len() as f64 * p).floor() as usize).min(orders.len());
    let picked = index::sample(rng, orders.len(), count);

    let (low, high) = DUPLICATE_OFFSET_MINUTES;
    let mut duplicates = Vec::with_capacity(count);
    for idx in picked.iter() {
        let mut duplicate = orders[idx].clone();
        let offset = Duration::minutes(rng.gen_range(low..=high));
        if let Ok(time) = NaiveDateTime::parse_from_str(&duplicate.order_time, ORDER_TIME_FORMAT) {
            duplicate.order_time = (time + offset).format(ORDER_TIME_FORMAT).to_string();
        }
        duplicates.push(duplicate);
    }

    orders.extend(duplicates);
    Injected {
        rows: orders,
        affected: count,
    }
}

/// Replace the `order_time` of masked rows with a malformed literal.
pub fn inject_corrupted_timestamps<R: Rng>(
    orders: Vec<SalesOrder>,
    rng: &mut R,
    rate: &DefectRate,
) -> Injected<SalesOrder> {
    let p = resolve_rate(rate, rng);
    rewrite_masked(orders, rng, p, |order, rng| {
        let literal = CORRUPTED_TIMESTAMPS[rng.gen_range(0..CORRUPTED_TIMESTAMPS.len())];
        order.order_time = literal.to_string();
    })
}

/// Overwrite the quantity of masked rows with an implausibly large value.
pub fn inject_quantity_outliers<R: Rng>(
    orders: Vec<SalesOrder>,
    rng: &mut R,
    rate: &DefectRate,
) -> Injected<SalesOrder> {
    let p = resolve_rate(rate, rng);
    let (low, high) = QUANTITY_OUTLIER_RANGE;
    rewrite_masked(orders, rng, p, |order, rng| {
        order.quantity = rng.gen_range(low..=high);
    })
}

/// Multiply the selling price of masked rows by a large factor.
pub fn inject_price_outliers<R: Rng>(
    orders: Vec<SalesOrder>,
    rng: &mut R,
    rate: &DefectRate,
) -> Injected<SalesOrder> {
    let p = resolve_rate(rate, rng);
    let (low, high) = PRICE_OUTLIER_FACTOR;
    rewrite_masked(orders, rng, p, |order, rng| {
        order.selling_price = round2(order.selling_price * rng.gen_range(low..high));
    })
}

/// Replace the payment status of masked rows with a malformed label.
pub fn inject_malformed_payment<R: Rng>(
    orders: Vec<SalesOrder>,
    rng: &mut R,
    rate: &DefectRate,
) -> Injected<SalesOrder> {
    let p = resolve_rate(rate, rng);
    rewrite_masked(orders, rng, p, |order, rng| {
        let label = MALFORMED_PAYMENT_LABELS[rng.gen_range(0..MALFORMED_PAYMENT_LABELS.len())];
        order.payment_status = PaymentLabel::Malformed(label);
    })
}

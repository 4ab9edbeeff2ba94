//! Raw sales transaction generator.
//!
//! Orders are sampled clean, then pushed through the sales defect passes in
//! a fixed order (see [`crate::defects::sales`]). Duplication runs before
//! timestamp corruption so duplicated rows can be corrupted too.

use crate::defects::sales::{
    inject_corrupted_timestamps, inject_duplicate_orders, inject_inconsistent_city,
    inject_malformed_payment, inject_missing_discount, inject_price_outliers,
    inject_quantity_outliers,
};
use crate::defects::{round2, DefectKind, DefectReport};
use crate::generator::GeneratorError;
use crate::stream::{Component, RandomStream};
use chrono::Duration;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::Poisson;
use retail_core::{
    ConfigError, PaymentLabel, PaymentStatus, Product, SalesConfig, SalesOrder, Store,
    ORDER_TIME_FORMAT,
};

const QUANTITY_LAMBDA: f64 = 2.2;
const QUANTITY_MAX: u32 = 12;

const DISCOUNT_BUCKETS: [u8; 7] = [0, 5, 10, 15, 20, 25, 30];
const DISCOUNT_WEIGHTS: [f64; 7] = [0.35, 0.10, 0.15, 0.15, 0.12, 0.08, 0.05];

/// Aligned with [`PaymentStatus::ALL`].
const PAYMENT_WEIGHTS: [f64; 3] = [0.90, 0.06, 0.04];

/// Chance that a non-refunded order is returned anyway.
const RETURN_PROBABILITY: f64 = 0.03;

/// Sales table plus the defects injected into it.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesBatch {
    pub orders: Vec<SalesOrder>,
    /// Orders sampled before duplication.
    pub base_count: usize,
    pub report: DefectReport,
}

impl SalesBatch {
    /// Number of appended duplicate rows.
    pub fn duplicate_count(&self) -> usize {
        self.orders.len() - self.base_count
    }
}

/// Generate `config.count` orders over the configured window, then inject
/// the sales defects.
pub fn generate_sales_raw(
    products: &[Product],
    stores: &[Store],
    config: &SalesConfig,
    seed: u64,
) -> Result<SalesBatch, GeneratorError> {
    if config.window_end <= config.window_start {
        return Err(ConfigError::InvalidValue {
            field: "sales.window_end".to_string(),
            reason: format!(
                "window ends at {} but starts at {}",
                config.window_end, config.window_start
            ),
        }
        .into());
    }
    if config.count > 0 {
        if products.is_empty() {
            return Err(GeneratorError::EmptyInput {
                table: "sales",
                dependency: "products",
            });
        }
        if stores.is_empty() {
            return Err(GeneratorError::EmptyInput {
                table: "sales",
                dependency: "stores",
            });
        }
    }

    let mut rng = RandomStream::new(seed).rng_for(Component::Sales);

    let orders = sample_orders(products, stores, config, &mut rng)?;
    let base_count = orders.len();

    let mut report = DefectReport::default();
    let orders = report.record(
        DefectKind::InconsistentCity,
        inject_inconsistent_city(orders, &mut rng),
    );
    let orders = report.record(
        DefectKind::MissingDiscount,
        inject_missing_discount(orders, &mut rng, &config.missing_discount),
    );
    let orders = report.record(
        DefectKind::DuplicateOrder,
        inject_duplicate_orders(orders, &mut rng, &config.duplicate_orders),
    );
    let orders = report.record(
        DefectKind::CorruptedTimestamp,
        inject_corrupted_timestamps(orders, &mut rng, &config.corrupted_timestamps),
    );
    let orders = report.record(
        DefectKind::QuantityOutlier,
        inject_quantity_outliers(orders, &mut rng, &config.quantity_outliers),
    );
    let orders = report.record(
        DefectKind::PriceOutlier,
        inject_price_outliers(orders, &mut rng, &config.price_outliers),
    );
    let orders = report.record(
        DefectKind::MalformedPayment,
        inject_malformed_payment(orders, &mut rng, &config.malformed_payment),
    );

    Ok(SalesBatch {
        orders,
        base_count,
        report,
    })
}

fn sample_orders<R: Rng>(
    products: &[Product],
    stores: &[Store],
    config: &SalesConfig,
    rng: &mut R,
) -> Result<Vec<SalesOrder>, GeneratorError> {
    let quantities = Poisson::new(QUANTITY_LAMBDA)?;
    let discounts = WeightedIndex::new(DISCOUNT_WEIGHTS)?;
    let payments = WeightedIndex::new(PAYMENT_WEIGHTS)?;
    let window_minutes = (config.window_end - config.window_start).num_minutes();

    let orders = (1..=config.count)
        .map(|index| {
            let product = &products[rng.gen_range(0..products.len())];
            let store = &stores[rng.gen_range(0..stores.len())];

            let drawn: f64 = quantities.sample(rng);
            let quantity = (drawn as u32 + 1).clamp(1, QUANTITY_MAX);

            let discount_pct = DISCOUNT_BUCKETS[discounts.sample(rng)];
            let discount = f64::from(discount_pct) / 100.0;
            let selling_price = round2(product.base_price * (1.0 - discount));

            let status = PaymentStatus::ALL[payments.sample(rng)];
            let return_flag =
                status == PaymentStatus::Refunded || rng.gen_bool(RETURN_PROBABILITY);

            let minute = rng.gen_range(0..=window_minutes);
            let order_time = (config.window_start + Duration::minutes(minute))
                .format(ORDER_TIME_FORMAT)
                .to_string();

            SalesOrder {
                order_id: SalesOrder::id_for(index),
                order_time,
                product_id: product.product_id.clone(),
                store_id: store.store_id.clone(),
                quantity,
                selling_price,
                discount_pct: Some(discount_pct),
                payment_status: PaymentLabel::Status(status),
                return_flag,
                // Filled by the inconsistent-city pass.
                city_raw: "",
            }
        })
        .collect();

    Ok(orders)
}

//! Product catalog generator.

use super::pick;
use crate::defects::products::{inject_cost_above_price, inject_missing_cost};
use crate::defects::{round2, DefectKind, DefectReport};
use crate::generator::GeneratorError;
use crate::stream::{Component, RandomStream};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::LogNormal;
use retail_core::{Category, LaunchFlag, Product, ProductConfig, BRANDS};

/// Selection weights, aligned with [`Category::ALL`].
const CATEGORY_WEIGHTS: [f64; 5] = [0.22, 0.28, 0.18, 0.18, 0.14];

/// Unit cost as a share of base price before defects.
const COST_RATIO: (f64, f64) = (0.50, 0.82);

const NEW_LAUNCH_PROBABILITY: f64 = 0.18;

pub const TAX_RATE: f64 = 0.05;

/// Log-normal price parameters and clamp band of a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub mean: f64,
    pub sigma: f64,
    pub min: f64,
    pub max: f64,
}

impl PriceBand {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Electronics => PriceBand {
                mean: 4.2,
                sigma: 0.45,
                min: 49.0,
                max: 2999.0,
            },
            Category::Fashion => PriceBand {
                mean: 3.3,
                sigma: 0.45,
                min: 9.0,
                max: 999.0,
            },
            Category::Grocery | Category::Home | Category::Beauty => PriceBand {
                mean: 2.6,
                sigma: 0.45,
                min: 2.5,
                max: 299.0,
            },
        }
    }

    fn sampler(&self) -> Result<LogNormal<f64>, GeneratorError> {
        Ok(LogNormal::new(self.mean, self.sigma)?)
    }
}

/// Product table plus the defects injected into it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    pub products: Vec<Product>,
    pub report: DefectReport,
}

/// Generate `config.count` products.
///
/// Missing costs are injected first, then cost-above-price rows, each with
/// its own mask.
pub fn generate_products(
    config: &ProductConfig,
    seed: u64,
) -> Result<ProductCatalog, GeneratorError> {
    let mut rng = RandomStream::new(seed).rng_for(Component::Products);

    let products = sample_products(config.count, &mut rng)?;

    let mut report = DefectReport::default();
    let products = report.record(
        DefectKind::MissingCost,
        inject_missing_cost(products, &mut rng, &config.missing_cost),
    );
    let products = report.record(
        DefectKind::CostAbovePrice,
        inject_cost_above_price(products, &mut rng, &config.cost_above_price),
    );

    Ok(ProductCatalog { products, report })
}

fn sample_products<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<Product>, GeneratorError> {
    let categories = WeightedIndex::new(CATEGORY_WEIGHTS)?;
    let bands: Vec<PriceBand> = Category::ALL
        .iter()
        .map(|c| PriceBand::for_category(*c))
        .collect();
    let samplers = bands
        .iter()
        .map(PriceBand::sampler)
        .collect::<Result<Vec<_>, _>>()?;

    let (low, high) = COST_RATIO;
    let products = (1..=count)
        .map(|index| {
            let slot = categories.sample(rng);
            let band = &bands[slot];
            let price = samplers[slot].sample(rng).clamp(band.min, band.max);
            let base_price = round2(price);
            let unit_cost = round2(base_price * rng.gen_range(low..high));
            let brand = pick(rng, &BRANDS);
            let launch_flag = if rng.gen_bool(NEW_LAUNCH_PROBABILITY) {
                LaunchFlag::New
            } else {
                LaunchFlag::Regular
            };

            Product {
                product_id: Product::id_for(index),
                category: Category::ALL[slot],
                brand,
                base_price,
                unit_cost: Some(unit_cost),
                tax_rate: TAX_RATE,
                launch_flag,
            }
        })
        .collect();

    Ok(products)
}

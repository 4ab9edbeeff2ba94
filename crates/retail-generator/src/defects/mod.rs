//! Defect-injection passes.
//!
//! Every pass has the shape `(rows, rng, rate) -> Injected<T>`: it draws its
//! own mask over the whole table, rewrites the masked rows, and reports how
//! many rows it touched. Passes are applied one after another in a fixed
//! order by the table generators.

pub mod inventory;
pub mod products;
pub mod sales;

use rand::Rng;
use retail_core::DefectRate;
use std::fmt;

/// Kind of defect injected into a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefectKind {
    MissingCost,
    CostAbovePrice,
    InconsistentCity,
    MissingDiscount,
    DuplicateOrder,
    CorruptedTimestamp,
    QuantityOutlier,
    PriceOutlier,
    MalformedPayment,
    NegativeStock,
    ExtremeStock,
}

impl DefectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefectKind::MissingCost => "missing_cost",
            DefectKind::CostAbovePrice => "cost_above_price",
            DefectKind::InconsistentCity => "inconsistent_city",
            DefectKind::MissingDiscount => "missing_discount",
            DefectKind::DuplicateOrder => "duplicate_order",
            DefectKind::CorruptedTimestamp => "corrupted_timestamp",
            DefectKind::QuantityOutlier => "quantity_outlier",
            DefectKind::PriceOutlier => "price_outlier",
            DefectKind::MalformedPayment => "malformed_payment",
            DefectKind::NegativeStock => "negative_stock",
            DefectKind::ExtremeStock => "extreme_stock",
        }
    }
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a defect pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Injected<T> {
    pub rows: Vec<T>,
    /// Rows rewritten (or, for duplication, rows appended).
    pub affected: usize,
}

/// Per-table tally of injected defects, in pass order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefectReport {
    entries: Vec<(DefectKind, usize)>,
}

impl DefectReport {
    /// Record a pass and hand back its rows.
    pub fn record<T>(&mut self, kind: DefectKind, injected: Injected<T>) -> Vec<T> {
        tracing::debug!("Defect pass {}: {} rows", kind, injected.affected);
        self.entries.push((kind, injected.affected));
        injected.rows
    }

    /// Rows affected by a kind of defect (0 if the pass never ran).
    pub fn count(&self, kind: DefectKind) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, n)| n)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DefectKind, usize)> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Log one line per pass.
    pub fn log_summary(&self, table: &str, rows: usize) {
        for (kind, affected) in &self.entries {
            let share = if rows > 0 {
                *affected as f64 / rows as f64 * 100.0
            } else {
                0.0
            };
            tracing::info!(
                "{}: {} rows with {} ({:.2}% of {})",
                table,
                affected,
                kind,
                share,
                rows
            );
        }
    }
}

/// Draw the rate a pass runs at. Ranges are sampled once per call.
pub fn resolve_rate<R: Rng>(rate: &DefectRate, rng: &mut R) -> f64 {
    match *rate {
        DefectRate::Fixed { rate } => rate,
        DefectRate::Range { min, max } if min < max => rng.gen_range(min..max),
        DefectRate::Range { min, .. } => min,
    }
}

/// Indices of rows selected by an independent Bernoulli(`p`) draw each.
pub fn bernoulli_mask<R: Rng>(rng: &mut R, len: usize, p: f64) -> Vec<usize> {
    (0..len).filter(|_| rng.gen::<f64>() < p).collect()
}

/// Draw a mask, then rewrite each masked row in index order.
pub(crate) fn rewrite_masked<T, R, F>(
    mut rows: Vec<T>,
    rng: &mut R,
    p: f64,
    mut rewrite: F,
) -> Injected<T>
where
    R: Rng,
    F: FnMut(&mut T, &mut R),
{
    let mask = bernoulli_mask(rng, rows.len(), p);
    for &idx in &mask {
        rewrite(&mut rows[idx], rng);
    }
    Injected {
        rows,
        affected: mask.len(),
    }
}

/// Round to cents.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

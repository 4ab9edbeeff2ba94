//! Retail entities and the closed vocabularies they draw from.
//!
//! ## Tables
//!
//! - [`Product`] - product master, keyed by `P####`
//! - [`Store`] - store dimension, keyed by `S###`
//! - [`SalesOrder`] - raw order facts, keyed (nominally) by `O#######`
//! - [`InventorySnapshot`] - daily stock per (date, product, store)
//! - [`CampaignPlan`] - promotional calendar, keyed by `C##`
//!
//! Rows of the sales and inventory tables are allowed to carry injected
//! defects, so their fields are typed loosely where a defect can replace a
//! well-formed value (e.g. `order_time` is a string, not a timestamp).

use chrono::NaiveDate;
use std::fmt;

/// Format of a well-formed `order_time` value.
pub const ORDER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Brand pool; brands are drawn uniformly.
pub const BRANDS: [&str; 23] = [
    "Samsung",
    "Apple",
    "Sony",
    "Xiaomi",
    "Anker",
    "Nike",
    "Adidas",
    "Zara",
    "H&M",
    "Carrefour",
    "Lulu",
    "Almarai",
    "Barakat",
    "Mai Dubai",
    "Masafi",
    "Sephora",
    "MAC",
    "Nivea",
    "Garnier",
    "Home Centre",
    "IKEA",
    "Dettol",
    "Ariel",
];

/// Inconsistent spellings and casings of the canonical cities, as typed
/// into a free-form order field.
pub const DIRTY_CITIES: [&str; 8] = [
    "Dubai",
    "DUBAI",
    "dubai",
    "Dubayy",
    "Abu Dhabi",
    "ABU DHABI",
    "Sharjah",
    "sharjah",
];

// ============================================================================
// Vocabularies
// ============================================================================

/// City served by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Dubai,
    AbuDhabi,
    Sharjah,
}

impl City {
    /// All cities in directory order.
    pub const ALL: [City; 3] = [City::Dubai, City::AbuDhabi, City::Sharjah];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Dubai => "Dubai",
            City::AbuDhabi => "Abu Dhabi",
            City::Sharjah => "Sharjah",
        }
    }
}

/// Sales channel of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    App,
    Web,
    Marketplace,
}

impl Channel {
    /// All channels in directory order.
    pub const ALL: [Channel; 3] = [Channel::App, Channel::Web, Channel::Marketplace];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::App => "App",
            Channel::Web => "Web",
            Channel::Marketplace => "Marketplace",
        }
    }
}

/// Who fulfills the orders of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FulfillmentType {
    Own,
    ThirdParty,
}

impl FulfillmentType {
    /// All fulfillment types in directory order.
    pub const ALL: [FulfillmentType; 2] = [FulfillmentType::Own, FulfillmentType::ThirdParty];

    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentType::Own => "Own",
            FulfillmentType::ThirdParty => "3PL",
        }
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Grocery,
    Fashion,
    Home,
    Beauty,
}

impl Category {
    /// All categories, in the order their selection weights are declared.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Grocery,
        Category::Fashion,
        Category::Home,
        Category::Beauty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Grocery => "Grocery",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
            Category::Beauty => "Beauty",
        }
    }
}

/// Whether a product is a new launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchFlag {
    New,
    Regular,
}

impl LaunchFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchFlag::New => "New",
            LaunchFlag::Regular => "Regular",
        }
    }
}

/// Canonical payment outcome of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Paid,
        PaymentStatus::Failed,
        PaymentStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

/// Payment label as it appears in the raw sales table.
///
/// Most rows carry a canonical [`PaymentStatus`]; a small share is
/// overwritten with a malformed label such as `"PAID"` or `"unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentLabel {
    Status(PaymentStatus),
    Malformed(&'static str),
}

impl PaymentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentLabel::Status(status) => status.as_str(),
            PaymentLabel::Malformed(label) => label,
        }
    }

    /// The canonical status, if the label has not been corrupted.
    pub fn status(&self) -> Option<PaymentStatus> {
        match self {
            PaymentLabel::Status(status) => Some(*status),
            PaymentLabel::Malformed(_) => None,
        }
    }
}

/// A campaign dimension: either every value (`All`) or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope<T> {
    All,
    Only(T),
}

impl<T> Scope<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Scope::All)
    }
}

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    City,
    Channel,
    FulfillmentType,
    Category,
    LaunchFlag,
    PaymentStatus,
    PaymentLabel
);

impl<T: fmt::Display> fmt::Display for Scope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => f.write_str("All"),
            Scope::Only(value) => value.fmt(f),
        }
    }
}

// ============================================================================
// Tables
// ============================================================================

/// A row of the product master table.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: String,
    pub category: Category,
    pub brand: &'static str,
    pub base_price: f64,
    /// `None` when the cost was dropped by defect injection.
    pub unit_cost: Option<f64>,
    pub tax_rate: f64,
    pub launch_flag: LaunchFlag,
}

impl Product {
    /// Format the 1-based product index as a product ID (`P0001`).
    pub fn id_for(index: usize) -> String {
        format!("P{index:04}")
    }

    /// Whether the unit cost exceeds the base price.
    pub fn cost_exceeds_price(&self) -> bool {
        self.unit_cost.is_some_and(|cost| cost > self.base_price)
    }
}

/// A row of the store directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub store_id: String,
    pub city: City,
    pub channel: Channel,
    pub fulfillment_type: FulfillmentType,
}

impl Store {
    /// Format the 1-based store index as a store ID (`S001`).
    pub fn id_for(index: usize) -> String {
        format!("S{index:03}")
    }
}

/// A row of the raw sales table.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesOrder {
    /// Not unique: duplicated orders repeat the ID with a later timestamp.
    pub order_id: String,
    /// Formatted with [`ORDER_TIME_FORMAT`] unless corrupted.
    pub order_time: String,
    pub product_id: String,
    pub store_id: String,
    pub quantity: u32,
    pub selling_price: f64,
    pub discount_pct: Option<u8>,
    pub payment_status: PaymentLabel,
    pub return_flag: bool,
    /// Free-form city as entered with the order.
    pub city_raw: &'static str,
}

impl SalesOrder {
    /// Format the 1-based order index as an order ID (`O0000001`).
    pub fn id_for(index: usize) -> String {
        format!("O{index:07}")
    }
}

/// A row of the daily inventory snapshot table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySnapshot {
    pub snapshot_date: NaiveDate,
    pub product_id: String,
    pub store_id: String,
    /// Non-negative unless a negative or extreme defect was injected.
    pub stock_on_hand: i64,
    pub reorder_point: i64,
    pub lead_time_days: u32,
}

/// A row of the campaign plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignPlan {
    pub campaign_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub city: Scope<City>,
    pub channel: Scope<Channel>,
    pub category: Scope<Category>,
    pub discount_pct: u8,
    pub promo_budget: u32,
}

impl CampaignPlan {
    /// Format the 1-based campaign index as a campaign ID (`C01`).
    pub fn id_for(index: usize) -> String {
        format!("C{index:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_formats() {
        assert_eq!(Product::id_for(7), "P0007");
        assert_eq!(Store::id_for(18), "S018");
        assert_eq!(SalesOrder::id_for(30000), "O0030000");
        assert_eq!(CampaignPlan::id_for(10), "C10");
    }

    #[test]
    fn test_vocabulary_labels() {
        assert_eq!(City::AbuDhabi.to_string(), "Abu Dhabi");
        assert_eq!(FulfillmentType::ThirdParty.to_string(), "3PL");
        assert_eq!(PaymentLabel::Malformed("PAID").to_string(), "PAID");
        assert_eq!(
            PaymentLabel::Status(PaymentStatus::Refunded).to_string(),
            "Refunded"
        );
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::<City>::All.to_string(), "All");
        assert_eq!(Scope::Only(Channel::Marketplace).to_string(), "Marketplace");
        assert!(Scope::<Category>::All.is_all());
    }

    #[test]
    fn test_cost_exceeds_price() {
        let mut product = Product {
            product_id: Product::id_for(1),
            category: Category::Home,
            brand: "IKEA",
            base_price: 10.0,
            unit_cost: Some(6.5),
            tax_rate: 0.05,
            launch_flag: LaunchFlag::Regular,
        };
        assert!(!product.cost_exceeds_price());

        product.unit_cost = Some(11.2);
        assert!(product.cost_exceeds_price());

        product.unit_cost = None;
        assert!(!product.cost_exceeds_price());
    }
}

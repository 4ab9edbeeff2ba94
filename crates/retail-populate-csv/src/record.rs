//! Column layout and cell formatting of each table.
//!
//! Nullable cells are written as empty fields and money with two decimals.
//! Cells of defective rows are written verbatim (an empty `order_time`
//! stays empty, a stock of `-12` stays negative).

use retail_core::{CampaignPlan, InventorySnapshot, Product, SalesOrder, Store};
use std::fmt::Display;

/// A row that can be written as a CSV record.
pub trait CsvRecord {
    /// Column names, in record order.
    const HEADERS: &'static [&'static str];

    /// Format the row as one cell per column.
    fn to_record(&self) -> Vec<String>;
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn optional<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

impl CsvRecord for Product {
    const HEADERS: &'static [&'static str] = &[
        "product_id",
        "category",
        "brand",
        "base_price_aed",
        "unit_cost_aed",
        "tax_rate",
        "launch_flag",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.product_id.clone(),
            self.category.to_string(),
            self.brand.to_string(),
            money(self.base_price),
            optional(self.unit_cost.map(money)),
            self.tax_rate.to_string(),
            self.launch_flag.to_string(),
        ]
    }
}

impl CsvRecord for Store {
    const HEADERS: &'static [&'static str] = &["store_id", "city", "channel", "fulfillment_type"];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.store_id.clone(),
            self.city.to_string(),
            self.channel.to_string(),
            self.fulfillment_type.to_string(),
        ]
    }
}

impl CsvRecord for SalesOrder {
    const HEADERS: &'static [&'static str] = &[
        "order_id",
        "order_time",
        "product_id",
        "store_id",
        "qty",
        "selling_price_aed",
        "discount_pct",
        "payment_status",
        "return_flag",
        "city_raw",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.order_time.clone(),
            self.product_id.clone(),
            self.store_id.clone(),
            self.quantity.to_string(),
            money(self.selling_price),
            optional(self.discount_pct),
            self.payment_status.to_string(),
            flag(self.return_flag),
            self.city_raw.to_string(),
        ]
    }
}

impl CsvRecord for InventorySnapshot {
    const HEADERS: &'static [&'static str] = &[
        "snapshot_date",
        "product_id",
        "store_id",
        "stock_on_hand",
        "reorder_point",
        "lead_time_days",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.snapshot_date.to_string(),
            self.product_id.clone(),
            self.store_id.clone(),
            self.stock_on_hand.to_string(),
            self.reorder_point.to_string(),
            self.lead_time_days.to_string(),
        ]
    }
}

impl CsvRecord for CampaignPlan {
    const HEADERS: &'static [&'static str] = &[
        "campaign_id",
        "start_date",
        "end_date",
        "city",
        "channel",
        "category",
        "discount_pct",
        "promo_budget_aed",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.campaign_id.clone(),
            self.start_date.to_string(),
            self.end_date.to_string(),
            self.city.to_string(),
            self.channel.to_string(),
            self.category.to_string(),
            self.discount_pct.to_string(),
            self.promo_budget.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use retail_core::{
        Category, Channel, City, FulfillmentType, LaunchFlag, PaymentLabel, PaymentStatus, Scope,
    };

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, day).unwrap()
    }

    #[test]
    fn test_product_record() {
        let mut product = Product {
            product_id: "P0001".to_string(),
            category: Category::Electronics,
            brand: "H&M",
            base_price: 129.5,
            unit_cost: Some(80.0),
            tax_rate: 0.05,
            launch_flag: LaunchFlag::New,
        };
        assert_eq!(
            product.to_record(),
            vec!["P0001", "Electronics", "H&M", "129.50", "80.00", "0.05", "New"]
        );

        product.unit_cost = None;
        assert_eq!(product.to_record()[4], "");
    }

    #[test]
    fn test_store_record() {
        let store = Store {
            store_id: "S002".to_string(),
            city: City::AbuDhabi,
            channel: Channel::Web,
            fulfillment_type: FulfillmentType::ThirdParty,
        };
        assert_eq!(store.to_record(), vec!["S002", "Abu Dhabi", "Web", "3PL"]);
    }

    #[test]
    fn test_sales_record_with_defects() {
        let order = SalesOrder {
            order_id: "O0000042".to_string(),
            order_time: String::new(),
            product_id: "P0007".to_string(),
            store_id: "S003".to_string(),
            quantity: 25,
            selling_price: 1234.5,
            discount_pct: None,
            payment_status: PaymentLabel::Malformed("unknown"),
            return_flag: true,
            city_raw: "DUBAI",
        };
        assert_eq!(
            order.to_record(),
            vec!["O0000042", "", "P0007", "S003", "25", "1234.50", "", "unknown", "1", "DUBAI"]
        );
    }

    #[test]
    fn test_sales_record_clean() {
        let order = SalesOrder {
            order_id: "O0000001".to_string(),
            order_time: "2025-12-01 08:15:00".to_string(),
            product_id: "P0001".to_string(),
            store_id: "S001".to_string(),
            quantity: 3,
            selling_price: 9.0,
            discount_pct: Some(10),
            payment_status: PaymentLabel::Status(PaymentStatus::Paid),
            return_flag: false,
            city_raw: "Dubai",
        };
        let record = order.to_record();
        assert_eq!(record.len(), SalesOrder::HEADERS.len());
        assert_eq!(record[6], "10");
        assert_eq!(record[7], "Paid");
        assert_eq!(record[8], "0");
    }

    #[test]
    fn test_inventory_record() {
        let snapshot = InventorySnapshot {
            snapshot_date: date(3),
            product_id: "P0010".to_string(),
            store_id: "S018".to_string(),
            stock_on_hand: -12,
            reorder_point: 15,
            lead_time_days: 7,
        };
        assert_eq!(
            snapshot.to_record(),
            vec!["2025-12-03", "P0010", "S018", "-12", "15", "7"]
        );
    }

    #[test]
    fn test_campaign_record() {
        let campaign = CampaignPlan {
            campaign_id: "C01".to_string(),
            start_date: date(4),
            end_date: date(18),
            city: Scope::All,
            channel: Scope::Only(Channel::App),
            category: Scope::Only(Category::Beauty),
            discount_pct: 15,
            promo_budget: 60_000,
        };
        assert_eq!(
            campaign.to_record(),
            vec!["C01", "2025-12-04", "2025-12-18", "All", "App", "Beauty", "15", "60000"]
        );
    }

    #[test]
    fn test_headers_match_record_width() {
        assert_eq!(Product::HEADERS.len(), 7);
        assert_eq!(Store::HEADERS.len(), 4);
        assert_eq!(SalesOrder::HEADERS.len(), 10);
        assert_eq!(InventorySnapshot::HEADERS.len(), 6);
        assert_eq!(CampaignPlan::HEADERS.len(), 8);
    }
}

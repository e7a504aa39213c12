//! Aggregate statistics over the catalog.
//!
//! These are plain values computed from loaded rows; the database does the
//! counting and averaging, this module only carries the results around.

/// A product name paired with its price, used for min/max price lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedProduct {
    pub name: String,
    pub price: f64,
}

/// Overall catalog statistics.
#[derive(Debug, Clone, Default)]
pub struct CatalogSummary {
    pub total_categories: i64,
    pub total_products: i64,
    /// Mean product price; `None` when the catalog holds no products.
    pub average_price: Option<f64>,
    pub cheapest: Option<PricedProduct>,
    pub priciest: Option<PricedProduct>,
}

impl CatalogSummary {
    /// True when no products have been inserted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_products == 0
    }
}

/// Per-category item count and total value.
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    pub category_name: String,
    pub product_count: usize,
    pub total_value: f64,
}

impl CategoryBreakdown {
    /// Build a breakdown row from a category name and its product prices.
    #[must_use]
    pub fn new(category_name: impl Into<String>, prices: &[f64]) -> Self {
        Self {
            category_name: category_name.into(),
            product_count: prices.len(),
            total_value: prices.iter().sum(),
        }
    }
}

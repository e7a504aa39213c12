//! Sample catalog data and idempotent seeding.
//!
//! The sample set is fixed: five categories and seventeen products. Seeding
//! inserts categories first so their ids exist, then resolves each product's
//! category id by name. A database that already holds categories is left
//! untouched.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::store::catalog::SqliteCatalog;
use crate::store::model::{NewCategoryRow, NewProductRow};

/// Sample category names.
pub const SAMPLE_CATEGORIES: [&str; 5] = [
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
    "Sports & Outdoors",
];

/// Sample products as (name, price, category name).
pub const SAMPLE_PRODUCTS: [(&str, f64, &str); 17] = [
    ("Smartphone", 699.99, "Electronics"),
    ("Laptop", 1299.99, "Electronics"),
    ("Wireless Headphones", 149.99, "Electronics"),
    ("Smart TV", 599.99, "Electronics"),
    ("T-Shirt", 19.99, "Clothing"),
    ("Jeans", 59.99, "Clothing"),
    ("Running Shoes", 89.99, "Clothing"),
    ("Winter Jacket", 129.99, "Clothing"),
    ("Python Programming Book", 39.99, "Books"),
    ("Data Science Handbook", 49.99, "Books"),
    ("Science Fiction Novel", 14.99, "Books"),
    ("Garden Hose", 24.99, "Home & Garden"),
    ("Lawn Mower", 299.99, "Home & Garden"),
    ("Plant Pot Set", 34.99, "Home & Garden"),
    ("Basketball", 29.99, "Sports & Outdoors"),
    ("Camping Tent", 159.99, "Sports & Outdoors"),
    ("Yoga Mat", 24.99, "Sports & Outdoors"),
];

/// What `seed_if_empty` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Sample rows were written.
    Seeded { categories: usize, products: usize },
    /// Categories already existed; nothing was written.
    AlreadySeeded { categories: i64 },
}

/// Populate the catalog with the sample rows unless it already holds data.
///
/// # Errors
/// Returns an error if a query fails or a sample product names a category
/// that was not inserted.
pub fn seed_if_empty(catalog: &SqliteCatalog) -> Result<SeedOutcome> {
    let existing = catalog.category_count()?;
    if existing > 0 {
        debug!(categories = existing, "catalog already seeded");
        return Ok(SeedOutcome::AlreadySeeded {
            categories: existing,
        });
    }

    let category_rows: Vec<NewCategoryRow> = SAMPLE_CATEGORIES
        .iter()
        .map(|name| NewCategoryRow {
            category_name: (*name).to_string(),
        })
        .collect();
    let categories = catalog.insert_categories(&category_rows)?;
    info!(count = categories, "seeded categories");

    // Categories must be committed first so their ids resolve by name.
    let mut product_rows = Vec::with_capacity(SAMPLE_PRODUCTS.len());
    for (name, price, category_name) in SAMPLE_PRODUCTS {
        let category_id = catalog
            .category_id_by_name(category_name)?
            .ok_or_else(|| Error::UnknownCategory(category_name.to_string()))?;
        product_rows.push(NewProductRow {
            product_name: name.to_string(),
            price,
            category_id,
        });
    }
    let products = catalog.insert_products(&product_rows)?;
    info!(count = products, "seeded products");

    Ok(SeedOutcome::Seeded {
        categories,
        products,
    })
}

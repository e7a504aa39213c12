//! Handlers for the catalog commands.
//!
//! This module orchestrates database access, seeding, and formatting for
//! the shelfline CLI commands. Every handler has a `--json` branch that
//! emits a single machine-readable document instead of styled text.

use std::path::Path;

use serde_json::json;
use tabled::{Table, Tabled};

use crate::cli::{output, paths};
use crate::domain::summary::{CatalogSummary, CategoryBreakdown};
use crate::error::{Error, Result};
use crate::seed::{seed_if_empty, SeedOutcome};
use crate::store::catalog::SqliteCatalog;
use crate::store::connection::{create_pool, run_migrations};
use crate::store::model::{CategoryRow, ProductRow};

/// One line of the joined product detail table.
#[derive(Tabled)]
struct ProductLine {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl ProductLine {
    fn new(product: &ProductRow, category_name: &str) -> Self {
        Self {
            name: product.product_name.clone(),
            price: format!("${:.2}", product.price),
            category: category_name.to_string(),
        }
    }
}

/// Open the catalog database, creating the file and tables as needed.
fn open_catalog(db_path: &Path) -> Result<SqliteCatalog> {
    paths::ensure_parent_dir(db_path)?;
    let pool = create_pool(&db_path.to_string_lossy())?;
    run_migrations(&pool)?;
    Ok(SqliteCatalog::new(pool))
}

fn category_to_json(row: &CategoryRow) -> serde_json::Value {
    json!({
        "id": row.category_id,
        "name": row.category_name,
    })
}

fn product_to_json(row: &ProductRow, category_name: &str) -> serde_json::Value {
    json!({
        "id": row.product_id,
        "name": row.product_name,
        "price": row.price,
        "category": category_name,
    })
}

fn summary_to_json(summary: &CatalogSummary) -> serde_json::Value {
    json!({
        "total_categories": summary.total_categories,
        "total_products": summary.total_products,
        "average_price": summary.average_price,
        "cheapest": summary.cheapest.as_ref().map(|p| json!({
            "name": p.name,
            "price": p.price,
        })),
        "priciest": summary.priciest.as_ref().map(|p| json!({
            "name": p.name,
            "price": p.price,
        })),
    })
}

fn breakdown_to_json(groups: &[(CategoryRow, Vec<ProductRow>)]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = groups
        .iter()
        .map(|(category, items)| {
            let prices: Vec<f64> = items.iter().map(|p| p.price).collect();
            let breakdown = CategoryBreakdown::new(&category.category_name, &prices);
            json!({
                "category": category.category_name,
                "product_count": breakdown.product_count,
                "total_value": breakdown.total_value,
                "products": items
                    .iter()
                    .map(|p| product_to_json(p, &category.category_name))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    json!(entries)
}

fn print_categories(rows: &[CategoryRow]) {
    output::section("Categories");
    for row in rows {
        let id = format!("{:>2}", row.category_id.unwrap_or_default());
        println!("  {}  {}", output::muted(id), row.category_name);
    }
}

fn print_breakdown(groups: &[(CategoryRow, Vec<ProductRow>)]) {
    output::section("Products by Category");
    for (category, items) in groups {
        let prices: Vec<f64> = items.iter().map(|p| p.price).collect();
        let breakdown = CategoryBreakdown::new(&category.category_name, &prices);

        println!();
        println!(
            "  {} ({} items)",
            output::highlight(&category.category_name),
            breakdown.product_count
        );
        for product in items {
            println!("    {:<25} ${:>8.2}", product.product_name, product.price);
        }
        println!("    {:<25} ${:>8.2}", "Total value", breakdown.total_value);
    }
}

fn print_summary(summary: &CatalogSummary) {
    output::section("Overall Statistics");
    output::field("Categories", summary.total_categories);
    output::field("Products", summary.total_products);
    output::field(
        "Avg price",
        summary
            .average_price
            .map(|p| format!("${p:.2}"))
            .unwrap_or_else(|| "N/A".to_string()),
    );
    if let Some(priciest) = &summary.priciest {
        output::field(
            "Priciest",
            format!("{} (${:.2})", priciest.name, priciest.price),
        );
    }
    if let Some(cheapest) = &summary.cheapest {
        output::field(
            "Cheapest",
            format!("{} (${:.2})", cheapest.name, cheapest.price),
        );
    }
}

fn print_detail_table(joined: &[(ProductRow, CategoryRow)]) {
    output::section("Product Detail");
    let lines: Vec<ProductLine> = joined
        .iter()
        .map(|(product, category)| ProductLine::new(product, &category.category_name))
        .collect();
    let table = Table::new(lines).to_string();
    output::lines(&table);
}

/// Execute `show`: the full catalog report, seeding an empty database first.
pub fn execute_show(db_path: &Path) -> Result<()> {
    let catalog = open_catalog(db_path)?;
    let outcome = seed_if_empty(&catalog)?;

    let categories = catalog.list_categories()?;
    let groups = catalog.category_breakdown()?;
    let summary = catalog.summary()?;
    let joined = catalog.list_products_with_categories()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "show",
            "seeded": matches!(outcome, SeedOutcome::Seeded { .. }),
            "categories": categories.iter().map(category_to_json).collect::<Vec<_>>(),
            "breakdown": breakdown_to_json(&groups),
            "summary": summary_to_json(&summary),
            "products": joined
                .iter()
                .map(|(p, c)| product_to_json(p, &c.category_name))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    if output::verbosity() > 0 {
        output::field("Database", db_path.display());
    }
    if let SeedOutcome::AlreadySeeded { categories } = outcome {
        output::note(&format!(
            "Database already contains {categories} categories. Using existing data."
        ));
    }

    print_categories(&categories);
    print_breakdown(&groups);
    print_summary(&summary);
    print_detail_table(&joined);

    Ok(())
}

/// Execute `seed`: create the tables and insert the sample rows.
pub fn execute_seed(db_path: &Path) -> Result<()> {
    let catalog = open_catalog(db_path)?;
    let outcome = seed_if_empty(&catalog)?;

    if output::is_json() {
        let payload = match &outcome {
            SeedOutcome::Seeded {
                categories,
                products,
            } => json!({
                "command": "seed",
                "status": "seeded",
                "categories": categories,
                "products": products,
            }),
            SeedOutcome::AlreadySeeded { categories } => json!({
                "command": "seed",
                "status": "already_seeded",
                "categories": categories,
            }),
        };
        output::json_output(payload);
        return Ok(());
    }

    match outcome {
        SeedOutcome::Seeded {
            categories,
            products,
        } => {
            output::success("Seeded sample catalog");
            output::field("Categories", categories);
            output::field("Products", products);
        }
        SeedOutcome::AlreadySeeded { categories } => {
            output::note(&format!(
                "Database already contains {categories} categories. Nothing to do."
            ));
        }
    }

    Ok(())
}

/// Execute `categories`: list categories with their ids.
pub fn execute_categories(db_path: &Path) -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    let catalog = open_catalog(db_path)?;
    let categories = catalog.list_categories()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "categories",
            "count": categories.len(),
            "categories": categories.iter().map(category_to_json).collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    print_categories(&categories);
    if categories.is_empty() {
        output::note("No categories yet.");
        output::hint(&format!(
            "run {} to insert the sample rows",
            output::highlight("shelfline seed")
        ));
    }

    Ok(())
}

/// Execute `products [--category NAME]`: joined product list.
pub fn execute_products(db_path: &Path, category: Option<&str>) -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    let catalog = open_catalog(db_path)?;
    let joined: Vec<(ProductRow, CategoryRow)> = match category {
        Some(name) => {
            let category_id = catalog
                .category_id_by_name(name)?
                .ok_or_else(|| Error::UnknownCategory(name.to_string()))?;
            let row = CategoryRow {
                category_id: Some(category_id),
                category_name: name.to_string(),
            };
            catalog
                .products_in_category(category_id)?
                .into_iter()
                .map(|product| (product, row.clone()))
                .collect()
        }
        None => catalog.list_products_with_categories()?,
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "products",
            "filter": category,
            "count": joined.len(),
            "products": joined
                .iter()
                .map(|(p, c)| product_to_json(p, &c.category_name))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    if joined.is_empty() {
        output::note("No products to show.");
        return Ok(());
    }

    print_detail_table(&joined);

    Ok(())
}

/// Execute `summary`: overall catalog statistics.
pub fn execute_summary(db_path: &Path) -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    let catalog = open_catalog(db_path)?;
    let summary = catalog.summary()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "summary",
            "summary": summary_to_json(&summary),
        }));
        return Ok(());
    }

    if summary.is_empty() {
        output::note("No products in catalog.");
        output::hint(&format!(
            "run {} to insert the sample rows",
            output::highlight("shelfline seed")
        ));
        return Ok(());
    }

    print_summary(&summary);

    Ok(())
}

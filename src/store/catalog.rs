//! SQLite catalog store implementation.
//!
//! Provides the read and write queries for categories and products using
//! SQLite and Diesel ORM. All queries are straight-line: inserts, ordered
//! listings, one inner join, and a handful of aggregates.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::SqliteConnection;

use crate::domain::summary::{CatalogSummary, PricedProduct};
use crate::error::{Error, Result};
use crate::store::connection::DbPool;
use crate::store::model::{CategoryRow, NewCategoryRow, NewProductRow, ProductRow};
use crate::store::schema::{categories, products};

/// SQLite-backed catalog store.
///
/// Holds the connection pool and exposes the typed query surface the CLI
/// commands are built on.
pub struct SqliteCatalog {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteCatalog {
    /// Create a new catalog store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    /// Insert categories, returning the number of rows written.
    pub fn insert_categories(&self, rows: &[NewCategoryRow]) -> Result<usize> {
        let mut conn = self.conn()?;
        diesel::insert_into(categories::table)
            .values(rows)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert products, returning the number of rows written.
    pub fn insert_products(&self, rows: &[NewProductRow]) -> Result<usize> {
        let mut conn = self.conn()?;
        diesel::insert_into(products::table)
            .values(rows)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count all categories.
    pub fn category_count(&self) -> Result<i64> {
        let mut conn = self.conn()?;
        categories::table
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count all products.
    pub fn product_count(&self) -> Result<i64> {
        let mut conn = self.conn()?;
        products::table
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// List all categories ordered by id.
    pub fn list_categories(&self) -> Result<Vec<CategoryRow>> {
        let mut conn = self.conn()?;
        categories::table
            .order(categories::category_id.asc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Look up a category id by its unique name.
    pub fn category_id_by_name(&self, name: &str) -> Result<Option<i32>> {
        let mut conn = self.conn()?;
        let id: Option<Option<i32>> = categories::table
            .filter(categories::category_name.eq(name))
            .select(categories::category_id)
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(id.flatten())
    }

    /// List the products belonging to one category, ordered by id.
    pub fn products_in_category(&self, category_id: i32) -> Result<Vec<ProductRow>> {
        let mut conn = self.conn()?;
        products::table
            .filter(products::category_id.eq(category_id))
            .order(products::product_id.asc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// List every product joined with its category, ordered by product id.
    pub fn list_products_with_categories(&self) -> Result<Vec<(ProductRow, CategoryRow)>> {
        let mut conn = self.conn()?;
        products::table
            .inner_join(categories::table)
            .select((ProductRow::as_select(), CategoryRow::as_select()))
            .order(products::product_id.asc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// The least expensive product, if any.
    pub fn cheapest_product(&self) -> Result<Option<ProductRow>> {
        let mut conn = self.conn()?;
        products::table
            .order(products::price.asc())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// The most expensive product, if any.
    pub fn priciest_product(&self) -> Result<Option<ProductRow>> {
        let mut conn = self.conn()?;
        products::table
            .order(products::price.desc())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Mean product price, `None` when the catalog is empty.
    pub fn average_price(&self) -> Result<Option<f64>> {
        let mut conn = self.conn()?;
        products::table
            .select(diesel::dsl::avg(products::price))
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Every category paired with its products, in category id order.
    pub fn category_breakdown(&self) -> Result<Vec<(CategoryRow, Vec<ProductRow>)>> {
        let cats = self.list_categories()?;
        let mut groups = Vec::with_capacity(cats.len());
        for category in cats {
            let items = self.products_in_category(category.category_id.unwrap_or_default())?;
            groups.push((category, items));
        }
        Ok(groups)
    }

    /// Assemble the overall catalog statistics.
    pub fn summary(&self) -> Result<CatalogSummary> {
        let total_categories = self.category_count()?;
        let total_products = self.product_count()?;
        let average_price = self.average_price()?;
        let cheapest = self.cheapest_product()?.map(|row| PricedProduct {
            name: row.product_name,
            price: row.price,
        });
        let priciest = self.priciest_product()?.map(|row| PricedProduct {
            name: row.product_name,
            price: row.price,
        });

        Ok(CatalogSummary {
            total_categories,
            total_products,
            average_price,
            cheapest,
            priciest,
        })
    }
}

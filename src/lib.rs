//! Shelfline - SQLite-backed product catalog demo.
//!
//! This crate is a small demonstration of Diesel ORM over an embedded
//! SQLite database: two related tables, a fixed set of sample rows, and a
//! handful of read queries with console-formatted output.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Plain catalog types: summary and breakdown aggregates
//! - [`error`] - Error types for the crate
//! - [`seed`] - Sample data and idempotent seeding
//! - [`store`] - Diesel schema, models, pool, and the catalog queries
//! - [`cli`] - Command definitions, handlers, and output formatting
//!
//! # Example
//!
//! ```no_run
//! use shelfline::seed::seed_if_empty;
//! use shelfline::store::catalog::SqliteCatalog;
//! use shelfline::store::connection::{create_pool, run_migrations};
//!
//! # fn main() -> shelfline::error::Result<()> {
//! let pool = create_pool("catalog.db")?;
//! run_migrations(&pool)?;
//! let catalog = SqliteCatalog::new(pool);
//! seed_if_empty(&catalog)?;
//! println!("{} products", catalog.product_count()?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod seed;
pub mod store;

//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{categories, products};

/// Database row for a category (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryRow {
    pub category_id: Option<i32>,
    pub category_name: String,
}

/// Database row for a category (insertable).
///
/// The id is assigned by SQLite on insert.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow {
    pub category_name: String,
}

/// Database row for a product (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub product_id: Option<i32>,
    pub product_name: String,
    pub price: f64,
    pub category_id: i32,
}

/// Database row for a product (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub product_name: String,
    pub price: f64,
    pub category_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::connection::{create_pool, run_migrations};

    #[test]
    fn new_category_row_is_insertable() {
        // Type check - if this compiles, the Insertable derive works
        let _row = NewCategoryRow {
            category_name: "Electronics".to_string(),
        };
    }

    #[test]
    fn new_product_row_is_insertable() {
        let _row = NewProductRow {
            product_name: "Smartphone".to_string(),
            price: 699.99,
            category_id: 1,
        };
    }

    #[test]
    fn category_row_roundtrip_with_db() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        let row = NewCategoryRow {
            category_name: "Books".to_string(),
        };

        diesel::insert_into(categories::table)
            .values(&row)
            .execute(&mut conn)
            .unwrap();

        let loaded: CategoryRow = categories::table.first(&mut conn).unwrap();

        assert!(loaded.category_id.is_some());
        assert_eq!(loaded.category_name, "Books");
    }

    #[test]
    fn category_name_is_unique() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        let row = NewCategoryRow {
            category_name: "Books".to_string(),
        };

        diesel::insert_into(categories::table)
            .values(&row)
            .execute(&mut conn)
            .unwrap();

        let duplicate = diesel::insert_into(categories::table)
            .values(&row)
            .execute(&mut conn);

        assert!(duplicate.is_err());
    }

    #[test]
    fn product_row_roundtrip_with_db() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        diesel::insert_into(categories::table)
            .values(&NewCategoryRow {
                category_name: "Electronics".to_string(),
            })
            .execute(&mut conn)
            .unwrap();

        let new_row = NewProductRow {
            product_name: "Wireless Headphones".to_string(),
            price: 149.99,
            category_id: 1,
        };

        diesel::insert_into(products::table)
            .values(&new_row)
            .execute(&mut conn)
            .unwrap();

        let loaded: ProductRow = products::table
            .order(products::product_id.desc())
            .first(&mut conn)
            .unwrap();

        assert!(loaded.product_id.is_some());
        assert_eq!(loaded.product_name, "Wireless Headphones");
        assert!((loaded.price - 149.99).abs() < 0.001);
        assert_eq!(loaded.category_id, 1);
    }

    #[test]
    fn product_row_with_special_characters() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        diesel::insert_into(categories::table)
            .values(&NewCategoryRow {
                category_name: "Home & Garden".to_string(),
            })
            .execute(&mut conn)
            .unwrap();

        let row = NewProductRow {
            product_name: "Café \"déco\" pot 10″ éàü".to_string(),
            price: 12.5,
            category_id: 1,
        };

        diesel::insert_into(products::table)
            .values(&row)
            .execute(&mut conn)
            .unwrap();

        let loaded: ProductRow = products::table.first(&mut conn).unwrap();

        assert!(loaded.product_name.contains("déco"));
    }
}

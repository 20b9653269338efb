use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::models::category::{Category, NewCategory};
use crate::models::product::{NewProduct, Product};
use crate::schema::{categories, products};

pub fn create_category(conn: &mut PgConnection, name: &str) -> QueryResult<Category> {
    diesel::insert_into(categories::table)
        .values(&NewCategory {
            name: name.to_string(),
        })
        .returning(Category::as_returning())
        .get_result(conn)
}

pub fn get_category_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<Option<Category>> {
    categories::table
        .filter(categories::id.eq(id))
        .select(Category::as_select())
        .first(conn)
        .optional()
}

/// `category_id` must reference an existing category; the foreign key
/// rejects the insert otherwise.
pub fn create_product(
    conn: &mut PgConnection,
    name: &str,
    price: BigDecimal,
    category_id: i32,
) -> QueryResult<Product> {
    diesel::insert_into(products::table)
        .values(&NewProduct {
            name: name.to_string(),
            price,
            category_id,
        })
        .returning(Product::as_returning())
        .get_result(conn)
}

pub fn get_product_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<Option<Product>> {
    products::table
        .filter(products::id.eq(id))
        .select(Product::as_select())
        .first(conn)
        .optional()
}

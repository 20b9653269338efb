use diesel::prelude::*;

use crate::models::order_item::{NewOrderItem, OrderItem};
use crate::schema::order_items;

pub fn create_order_item(
    conn: &mut PgConnection,
    order_id: i32,
    product_id: i32,
    quantity: i32,
) -> QueryResult<OrderItem> {
    diesel::insert_into(order_items::table)
        .values(&NewOrderItem {
            order_id,
            product_id,
            quantity,
        })
        .returning(OrderItem::as_returning())
        .get_result(conn)
}

/// The line items of an order in creation order (ascending serial id).
pub fn get_items_for_order(conn: &mut PgConnection, order_id: i32) -> QueryResult<Vec<OrderItem>> {
    order_items::table
        .filter(order_items::order_id.eq(order_id))
        .select(OrderItem::as_select())
        .order(order_items::id.asc())
        .load(conn)
}

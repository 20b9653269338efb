use diesel::prelude::*;

use crate::models::order::{NewOrder, Order};
use crate::schema::orders;

pub fn create_order(conn: &mut PgConnection, user_id: i32, paid: bool) -> QueryResult<Order> {
    diesel::insert_into(orders::table)
        .values(&NewOrder { user_id, paid })
        .returning(Order::as_returning())
        .get_result(conn)
}

pub fn get_order_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<Option<Order>> {
    orders::table
        .filter(orders::id.eq(id))
        .select(Order::as_select())
        .first(conn)
        .optional()
}

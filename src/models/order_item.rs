use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::order_items;

/// One line item of an order. Serial ids double as insertion order, which the
/// items endpoint relies on when returning the line-item list.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(crate::models::order::Order))]
#[diesel(belongs_to(crate::models::product::Product))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

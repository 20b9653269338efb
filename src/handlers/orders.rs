use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::{repositories, AppConfig};

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemsResponse {
    pub data: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub paid: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub data: OrderResponse,
}

impl From<crate::models::order_item::OrderItem> for OrderItemResponse {
    fn from(item: crate::models::order_item::OrderItem) -> Self {
        OrderItemResponse {
            id: item.id,
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn authorization_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

/// Parse a path segment as a positive integer order id.
///
/// Done by hand instead of `web::Path<i32>` so that authentication can run
/// before syntactic validation: an unauthenticated caller must get 401 even
/// for a malformed id.
fn parse_order_id(raw: &str) -> Result<i32, AppError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidInput(format!(
            "'{}' is not a valid order id",
            raw
        ))),
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders/{order_id}/items
///
/// Returns the order's line items, in creation order, to the order's owner.
/// The checks run in a fixed precedence: authentication, then id syntax,
/// then existence, then ownership. An unauthenticated caller never learns
/// whether the order exists.
#[utoipa::path(
    get,
    path = "/orders/{order_id}/items",
    params(
        ("order_id" = String, Path, description = "Order id (positive integer)"),
    ),
    responses(
        (status = 200, description = "Line items in creation order", body = OrderItemsResponse),
        (status = 400, description = "Malformed order id"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller does not own the order"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order_items(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let caller_id = auth::verify_bearer(authorization_header(&req), &config.jwt_secret)?;
    let order_id = parse_order_id(&path.into_inner())?;

    let items = web::block(move || {
        let mut conn = pool.get()?;

        let order =
            repositories::orders::get_order_by_id(&mut conn, order_id)?.ok_or(AppError::NotFound)?;
        if order.user_id != caller_id {
            return Err(AppError::Forbidden);
        }

        Ok::<_, AppError>(repositories::order_items::get_items_for_order(
            &mut conn, order_id,
        )?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderItemsResponse {
        data: items.into_iter().map(OrderItemResponse::from).collect(),
    }))
}

/// POST /orders
///
/// Creates an unpaid order owned by the authenticated caller.
#[utoipa::path(
    post,
    path = "/orders",
    responses(
        (status = 201, description = "Order created", body = CreateOrderResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    let caller_id = auth::verify_bearer(authorization_header(&req), &config.jwt_secret)?;

    let order = web::block(move || {
        let mut conn = pool.get()?;
        Ok::<_, AppError>(repositories::orders::create_order(
            &mut conn, caller_id, false,
        )?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CreateOrderResponse {
        data: OrderResponse {
            id: order.id,
            user_id: order.user_id,
            paid: order.paid,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_positive_integers() {
        assert_eq!(parse_order_id("7").unwrap(), 7);
        assert_eq!(parse_order_id("1").unwrap(), 1);
    }

    #[test]
    fn parse_rejects_non_integers() {
        assert!(matches!(
            parse_order_id("x"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_order_id("1.5"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(parse_order_id(""), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn parse_rejects_non_positive_ids() {
        assert!(matches!(
            parse_order_id("0"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_order_id("-3"),
            Err(AppError::InvalidInput(_))
        ));
    }
}

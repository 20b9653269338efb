//! Test-only support: database reset and authorization-header minting.
//! Lives in the test tree so none of it is linked into production builds.

use chrono::Duration;
use diesel::RunQueryDsl;
use shop_service::{auth, DbPool};

/// Wipe all rows and restart the serial id sequences so each scenario starts
/// from a known-empty store with ids beginning at 1.
pub fn reset_database(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for reset");
    diesel::sql_query(
        "TRUNCATE TABLE order_items, orders, products, categories, users RESTART IDENTITY CASCADE",
    )
    .execute(&mut conn)
    .expect("Failed to reset database");
}

/// Mint an `authorization` header value for `user_id`, signed with `secret`.
pub fn authorization_header_for_user(user_id: i32, secret: &str) -> String {
    let token = auth::mint_token(user_id, secret, Duration::hours(1))
        .expect("Failed to mint test token");
    format!("Bearer {}", token)
}

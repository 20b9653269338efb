//! Narrow data-access modules, one per entity family. Every function is a
//! single atomic statement against a borrowed connection; callers own the
//! pool checkout and any `web::block` wrapping.

pub mod order_items;
pub mod orders;
pub mod products;
pub mod users;

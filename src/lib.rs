pub mod auth;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Process-wide configuration handed to handlers via `web::Data`.
#[derive(Clone)]
pub struct AppConfig {
    /// Secret used to verify (and mint) bearer credentials.
    pub jwt_secret: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::get_order_items,
        handlers::orders::create_order,
        handlers::users::signup,
    ),
    components(schemas(
        handlers::orders::OrderItemResponse,
        handlers::orders::OrderItemsResponse,
        handlers::orders::OrderResponse,
        handlers::orders::CreateOrderResponse,
        handlers::users::SignupRequest,
        handlers::users::UserResponse,
        handlers::users::SignupResponse,
    ))
)]
struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    config: AppConfig,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(web::scope("/users").route("", web::post().to(handlers::users::signup)))
            .service(
                web::scope("/orders")
                    .route("", web::post().to(handlers::orders::create_order))
                    .route(
                        "/{order_id}/items",
                        web::get().to(handlers::orders::get_order_items),
                    ),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}

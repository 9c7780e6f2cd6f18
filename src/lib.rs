pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use db::{create_pool, DbPool};
pub use infrastructure::store::PgStore;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::products::create_product,
        handlers::products::get_product,
        handlers::products::vendor_products,
        handlers::cart::add_to_cart,
        handlers::cart::get_cart,
        handlers::cart::remove_from_cart,
        handlers::orders::checkout_cart,
        handlers::orders::order_history,
        handlers::orders::vendor_orders,
    ),
    components(schemas(
        handlers::ApiResponse,
        handlers::products::CreateProductRequest,
        handlers::products::ProductResponse,
        handlers::cart::CartItemResponse,
        handlers::orders::CartCheckoutRequest,
        handlers::orders::CartItemRequest,
        handlers::orders::OrderLineResponse,
        handlers::orders::OrderResponse,
    )),
    tags(
        (name = "products", description = "Catalog management"),
        (name = "cart", description = "Shopping cart"),
        (name = "orders", description = "Checkout and order views"),
    )
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let store = PgStore::new(pool);
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .wrap(Logger::default())
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/products")
                            .route("", web::post().to(handlers::products::create_product))
                            .route(
                                "/view/{product_id}",
                                web::get().to(handlers::products::get_product),
                            )
                            .route(
                                "/vendor/{vendor_id}",
                                web::get().to(handlers::products::vendor_products),
                            ),
                    )
                    .service(
                        web::scope("/cart")
                            // GET takes a buyer id, DELETE a cart entry id;
                            // one resource so both methods share the pattern.
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(handlers::cart::get_cart))
                                    .route(web::delete().to(handlers::cart::remove_from_cart)),
                            )
                            .route(
                                "/{product_id}/{user_id}",
                                web::post().to(handlers::cart::add_to_cart),
                            ),
                    )
                    .service(
                        web::scope("/orders")
                            .route(
                                "/checkout/{user_id}",
                                web::post().to(handlers::orders::checkout_cart),
                            )
                            .route(
                                "/history/{user_id}",
                                web::get().to(handlers::orders::order_history),
                            )
                            .route(
                                "/vendor/{vendor_id}",
                                web::get().to(handlers::orders::vendor_orders),
                            ),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}

pub mod application;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;
pub mod state;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Settings;
pub use db::{create_pool, DbPool};
pub use state::AppState;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Largest accepted image upload.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Registers every storefront route. Shared by the server and the HTTP tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    use handlers::{admin, menu, sessions};

    cfg.service(
        web::scope("/menu")
            .route("", web::get().to(menu::list_menu))
            .route("/{id}", web::get().to(menu::get_menu_item)),
    )
    .route("/header-images", web::get().to(menu::list_header_images))
    .service(
        web::scope("/sessions")
            .route("", web::post().to(sessions::open_session))
            .route("/{id}", web::delete().to(sessions::close_session))
            .route("/{id}/cart", web::get().to(sessions::get_cart))
            .route("/{id}/cart", web::post().to(sessions::add_to_cart))
            .route("/{id}/cart/{item_id}", web::put().to(sessions::update_quantity))
            .route("/{id}/customer", web::put().to(sessions::update_customer))
            .route("/{id}/location", web::post().to(sessions::share_location))
            .route("/{id}/order", web::post().to(sessions::place_order)),
    )
    .service(
        web::scope("/admin")
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
            .route("/menu-items", web::get().to(admin::list_menu_items))
            .route("/menu-items", web::post().to(admin::create_menu_item))
            .route("/menu-items/{id}", web::put().to(admin::update_menu_item))
            .route("/menu-items/{id}", web::delete().to(admin::delete_menu_item))
            .route("/header-images", web::get().to(admin::list_header_slots))
            .route("/header-images/{id}", web::put().to(admin::replace_header_image))
            .route("/uploads", web::post().to(admin::upload_image)),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: AppState,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let openapi = handlers::ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .configure(routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}

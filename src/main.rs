use dotenvy::dotenv;
use storefront::{build_server, create_pool, run_migrations, AppState, Settings};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env()?;

    let pool = create_pool(&settings.database_url)?;
    run_migrations(&pool)?;

    let state = AppState::from_settings(pool, &settings);

    log::info!(
        "Starting storefront at http://{}:{}",
        settings.host,
        settings.port
    );

    build_server(state, &settings.host, settings.port)?.await?;
    Ok(())
}

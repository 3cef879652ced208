use std::sync::Arc;

use order_rpc::infrastructure::DieselOrderStore;
use order_rpc::{build_server, create_pool, run_migrations, Config, OrderStore, StartupError};

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    // Loads `.env` first so RUST_LOG may come from it.
    let config = Config::from_env()?;
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let pool = create_pool(&config.database_url, config.pool_size)?;
    run_migrations(&pool)?;

    let store: Arc<dyn OrderStore> = Arc::new(DieselOrderStore::new(pool));

    log::info!(
        "Order service listening on http://{}:{}",
        config.host,
        config.port
    );

    let served = build_server(store.clone(), &config.host, config.port)?.await;

    store.close()?;
    served?;
    Ok(())
}

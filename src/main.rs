use std::sync::Arc;

use dotenvy::dotenv;

use impression_counter::api;
use impression_counter::config::Config;
use impression_counter::error::ApplicationError;
use impression_counter::logger;
use impression_counter::service::Store;
use impression_counter::time::SystemClock;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    dotenv().ok();

    let config = Config::from_env()?;

    let _guard = logger::init(&config)?;

    let app = api::create_app(Store::new(), config.ttl(), Arc::new(SystemClock));
    api::serve(config.host, app).await
}

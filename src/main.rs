use std::sync::Arc;

use log::info;
use rocket::{launch, Build, Rocket};

use racing_catalog_analytics::modules::catalog_api::{CatalogApi, SharedCatalog};
use racing_catalog_analytics::modules::helpers::config::Config;
use racing_catalog_analytics::modules::helpers::logging::setup_logging;

#[launch]
fn rocket() -> Rocket<Build> {
    let config = Config::from_env().expect("Failed to load configuration");
    setup_logging(&config).expect("Failed to setup logging");

    info!(target: "main", "Using catalog api at {}", config.catalog_api_url);
    let catalog: SharedCatalog = Arc::new(CatalogApi::new(&config.catalog_api_url));

    // start the webserver
    racing_catalog_analytics::build(catalog, &config)
}

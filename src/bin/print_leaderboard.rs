use log::{error, info, warn};
use snafu::ResultExt;

use racing_catalog_analytics::errors::{CustomResult, LoggingSnafu};
use racing_catalog_analytics::modules::analytics;
use racing_catalog_analytics::modules::catalog_api::{CarCatalog, CatalogApi};
use racing_catalog_analytics::modules::helpers::config::Config;
use racing_catalog_analytics::modules::helpers::logging::setup_logging;
use racing_catalog_analytics::modules::models::session::Session;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // logging might not be set up yet
        eprintln!("{err}");
        error!(target: "print_leaderboard", "{}", err);
        std::process::exit(1);
    }
}

async fn run() -> CustomResult<()> {
    let config = Config::from_env()?;
    setup_logging(&config).context(LoggingSnafu)?;

    let api = CatalogApi::new(&config.catalog_api_url);

    let session = match &config.catalog_credentials {
        Some(credentials) => {
            let response = api.login(credentials).await?;
            response.session().unwrap_or_else(|| {
                warn!(target: "print_leaderboard", "login as {} failed, continuing without a token", credentials.email);
                Session::anonymous()
            })
        }
        None => Session::anonymous(),
    };

    let cars = api.get_cars(&session).await?;
    info!(target: "print_leaderboard", "Loaded {} cars: date={}", cars.len(), chrono::Local::now().naive_local());

    for entry in analytics::rank(&cars)? {
        info!(
            target: "print_leaderboard",
            "#{} {} ({}) overall={} speed={} acceleration={} aero={} efficiency={}",
            entry.rank,
            entry.performance.car_name,
            entry.constructor,
            entry.performance.overall_score,
            entry.performance.speed_score,
            entry.performance.acceleration_score,
            entry.performance.aerodynamics_score,
            entry.performance.efficiency_score,
        );
    }

    match analytics::aggregate(&cars) {
        Some(stats) => info!(
            target: "print_leaderboard",
            "averages over {} cars: top speed {} km/h, 0-100 {}s, downforce {} kgf, weight {} kg",
            stats.total_cars, stats.avg_top_speed, stats.avg_acceleration, stats.avg_downforce, stats.avg_weight
        ),
        None => warn!(target: "print_leaderboard", "catalog is empty, no averages"),
    }

    Ok(())
}

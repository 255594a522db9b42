use rocket::{routes, Build, Rocket};

use crate::modules::catalog_api::SharedCatalog;
use crate::modules::helpers::config::Config;
use crate::modules::helpers::fairings::cors::CORS;

pub mod errors;
pub mod macros {
    pub mod catalog_error_handler;
}
pub mod modules;
pub mod routes {
    pub mod api {
        pub mod analytics;
        pub mod auth;
        pub mod car;
    }
}

use crate::routes::api;

/// # build the webserver
/// mounts every api route under `/api`, with `catalog` as the source of cars
pub fn build(catalog: SharedCatalog, config: &Config) -> Rocket<Build> {
    rocket::build()
        .manage(catalog)
        .attach(CORS::new(&config.cors_allowed_origin))
        .mount(
            "/api",
            routes![
                // auth
                api::auth::login,
                api::auth::signup,
                // cars
                api::car::get_all,
                api::car::get_one,
                api::car::create,
                api::car::update,
                api::car::delete_one,
                api::car::get_performance,
                api::car::get_radar,
                // analytics
                api::analytics::get_leaderboard,
                api::analytics::get_stats,
                api::analytics::get_speeds,
                api::analytics::compare,
            ],
        )
}

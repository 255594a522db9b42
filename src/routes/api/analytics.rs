use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, State};

use crate::macros::catalog_error_handler::api_handle_error_http;
use crate::modules::analytics;
use crate::modules::catalog_api::SharedCatalog;
use crate::modules::models::comparison::Comparison;
use crate::modules::models::leaderboard::LeaderboardEntry;
use crate::modules::models::session::Session;
use crate::modules::models::stats::{AggregateStats, SpeedBar};

#[get("/leaderboard")]
pub async fn get_leaderboard(catalog: &State<SharedCatalog>, session: Session) -> Result<Json<Vec<LeaderboardEntry>>, Status> {
    let cars = api_handle_error_http!(catalog.get_cars(&session).await, "routes/api/analytics:get_leaderboard", "cars");
    let leaderboard = api_handle_error_http!(analytics::rank(&cars), "routes/api/analytics:get_leaderboard", "leaderboard");

    Ok(Json(leaderboard))
}

/// `null` when the catalog is empty
#[get("/stats")]
pub async fn get_stats(catalog: &State<SharedCatalog>, session: Session) -> Result<Json<Option<AggregateStats>>, Status> {
    let cars = api_handle_error_http!(catalog.get_cars(&session).await, "routes/api/analytics:get_stats", "cars");
    Ok(Json(analytics::aggregate(&cars)))
}

#[get("/speeds")]
pub async fn get_speeds(catalog: &State<SharedCatalog>, session: Session) -> Result<Json<Vec<SpeedBar>>, Status> {
    let cars = api_handle_error_http!(catalog.get_cars(&session).await, "routes/api/analytics:get_speeds", "cars");
    Ok(Json(analytics::speed_chart(&cars)))
}

/// # compare two cars
/// without ids the first two cars of the catalog are compared. when only
/// `first` is given it is compared with the first other car.
#[get("/compare?<first>&<second>")]
pub async fn compare(
    first: Option<&str>,
    second: Option<&str>,
    catalog: &State<SharedCatalog>,
    session: Session,
) -> Result<Json<Comparison>, Status> {
    let cars = api_handle_error_http!(catalog.get_cars(&session).await, "routes/api/analytics:compare", "cars");

    let first_id = first.or_else(|| cars.first().map(|car| car.car_id.as_str()));
    // the default second car is the first one that differs from the first
    let second_id = second.or_else(|| {
        cars.iter()
            .map(|car| car.car_id.as_str())
            .find(|car_id| Some(*car_id) != first_id)
    });
    let (Some(first_id), Some(second_id)) = (first_id, second_id) else {
        log::warn!(target: "routes/api/analytics:compare", "not enough cars to compare ({} in catalog)", cars.len());
        return Err(Status::NotFound);
    };

    let find = |car_id: &str| cars.iter().find(|car| car.car_id == car_id);
    let (Some(first_car), Some(second_car)) = (find(first_id), find(second_id)) else {
        return Err(Status::NotFound);
    };

    let comparison = api_handle_error_http!(
        analytics::compare_pair(first_car, second_car),
        "routes/api/analytics:compare",
        format!("comparison of {} and {}", first_id, second_id)
    );

    Ok(Json(comparison))
}

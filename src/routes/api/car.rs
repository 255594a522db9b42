use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

use crate::macros::catalog_error_handler::api_handle_error_http;
use crate::modules::analytics;
use crate::modules::catalog_api::SharedCatalog;
use crate::modules::models::car::{Car, CarUpdate};
use crate::modules::models::performance::{PerformanceScore, RadarPoint};
use crate::modules::models::session::Session;

/**************************************************************************************************/
/**************** CRUD ****************************************************************************/
/**************************************************************************************************/

#[get("/cars")]
pub async fn get_all(catalog: &State<SharedCatalog>, session: Session) -> Result<Json<Vec<Car>>, Status> {
    let cars = api_handle_error_http!(catalog.get_cars(&session).await, "routes/api/car:get_all", "cars");
    Ok(Json(cars))
}

#[get("/cars/<car_id>")]
pub async fn get_one(car_id: &str, catalog: &State<SharedCatalog>, session: Session) -> Result<Json<Car>, Status> {
    let car = api_handle_error_http!(catalog.get_car(&session, car_id).await, "routes/api/car:get_one", format!("car {}", car_id));
    Ok(Json(car))
}

#[post("/cars", format = "json", data = "<car>")]
pub async fn create(car: Json<CarUpdate>, catalog: &State<SharedCatalog>, session: Session) -> Result<Json<Car>, Status> {
    let car = car.into_inner();
    let car_id = car.car_id.clone().unwrap_or_default();
    api_handle_error_http!(car.validate(&car_id), "routes/api/car:create", "new car");

    let created = api_handle_error_http!(catalog.create_car(&session, &car).await, "routes/api/car:create", "created car");
    Ok(Json(created))
}

#[put("/cars/<car_id>", format = "json", data = "<car>")]
pub async fn update(car_id: &str, car: Json<CarUpdate>, catalog: &State<SharedCatalog>, session: Session) -> Result<Json<Car>, Status> {
    let car = car.into_inner();
    api_handle_error_http!(car.validate(car_id), "routes/api/car:update", format!("update of car {}", car_id));

    let updated = api_handle_error_http!(catalog.update_car(&session, car_id, &car).await, "routes/api/car:update", format!("car {}", car_id));
    Ok(Json(updated))
}

#[delete("/cars/<car_id>")]
pub async fn delete_one(car_id: &str, catalog: &State<SharedCatalog>, session: Session) -> Result<Status, Status> {
    api_handle_error_http!(catalog.delete_car(&session, car_id).await, "routes/api/car:delete_one", format!("car {}", car_id));
    Ok(Status::NoContent)
}

/**************************************************************************************************/
/**************** PER CAR ANALYTICS ***************************************************************/
/**************************************************************************************************/

#[get("/cars/<car_id>/performance")]
pub async fn get_performance(car_id: &str, catalog: &State<SharedCatalog>, session: Session) -> Result<Json<PerformanceScore>, Status> {
    let car = api_handle_error_http!(catalog.get_car(&session, car_id).await, "routes/api/car:get_performance", format!("car {}", car_id));
    let score = api_handle_error_http!(analytics::score(&car), "routes/api/car:get_performance", format!("score of car {}", car_id));

    Ok(Json(score))
}

#[get("/cars/<car_id>/radar")]
pub async fn get_radar(car_id: &str, catalog: &State<SharedCatalog>, session: Session) -> Result<Json<Vec<RadarPoint>>, Status> {
    let car = api_handle_error_http!(catalog.get_car(&session, car_id).await, "routes/api/car:get_radar", format!("car {}", car_id));
    let radar = api_handle_error_http!(analytics::radar_profile(&car), "routes/api/car:get_radar", format!("radar of car {}", car_id));

    Ok(Json(radar))
}

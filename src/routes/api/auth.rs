use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{post, State};

use crate::macros::catalog_error_handler::api_handle_error_http;
use crate::modules::catalog_api::SharedCatalog;
use crate::modules::models::session::{AuthResponse, Credentials};

/// forwards a login to the catalog api. the token in the response goes back
/// to the caller, it is not kept here.
#[post("/auth/login", format = "json", data = "<credentials>")]
pub async fn login(credentials: Json<Credentials>, catalog: &State<SharedCatalog>) -> Result<Json<AuthResponse>, Status> {
    let response = api_handle_error_http!(catalog.login(&credentials).await, "routes/api/auth:login", "login");
    Ok(Json(response))
}

#[post("/auth/signup", format = "json", data = "<credentials>")]
pub async fn signup(credentials: Json<Credentials>, catalog: &State<SharedCatalog>) -> Result<Json<AuthResponse>, Status> {
    if credentials.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
        return Err(Status::UnprocessableEntity);
    }

    let response = api_handle_error_http!(catalog.signup(&credentials).await, "routes/api/auth:signup", "signup");
    Ok(Json(response))
}

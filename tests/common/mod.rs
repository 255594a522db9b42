use std::sync::{Arc, Mutex};

use racing_catalog_analytics::errors::{CustomResult, Error};
use racing_catalog_analytics::modules::catalog_api::{CarCatalog, SharedCatalog};
use racing_catalog_analytics::modules::helpers::config::Config;
use racing_catalog_analytics::modules::models::car::{Car, CarUpdate};
use racing_catalog_analytics::modules::models::session::{AuthData, AuthResponse, Credentials, Session};
use rocket::local::asynchronous::Client;

pub const TOKEN: &str = "valid-token";
pub const EMAIL: &str = "engineer@example.com";
pub const PASSWORD: &str = "box-box";

/// stands in for the remote catalog, only `TOKEN` is accepted
pub struct InMemoryCatalog {
    cars: Mutex<Vec<Car>>,
}

impl InMemoryCatalog {
    pub fn new(cars: Vec<Car>) -> InMemoryCatalog {
        InMemoryCatalog { cars: Mutex::new(cars) }
    }

    fn authorize(session: &Session) -> CustomResult<()> {
        match session.token() {
            Some(TOKEN) => Ok(()),
            _ => Err(Error::Unauthorized { resource: "cars".to_string() }),
        }
    }

    fn not_found(car_id: &str) -> Error {
        Error::NotFound { resource: format!("car `{car_id}`") }
    }
}

#[rocket::async_trait]
impl CarCatalog for InMemoryCatalog {
    async fn get_cars(&self, session: &Session) -> CustomResult<Vec<Car>> {
        InMemoryCatalog::authorize(session)?;
        Ok(self.cars.lock().unwrap().clone())
    }

    async fn get_car(&self, session: &Session, car_id: &str) -> CustomResult<Car> {
        InMemoryCatalog::authorize(session)?;
        self.cars
            .lock()
            .unwrap()
            .iter()
            .find(|car| car.car_id == car_id)
            .cloned()
            .ok_or_else(|| InMemoryCatalog::not_found(car_id))
    }

    async fn create_car(&self, session: &Session, car: &CarUpdate) -> CustomResult<Car> {
        InMemoryCatalog::authorize(session)?;
        let created = car.apply_to(&Car::default());
        self.cars.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_car(&self, session: &Session, car_id: &str, car: &CarUpdate) -> CustomResult<Car> {
        InMemoryCatalog::authorize(session)?;
        let mut cars = self.cars.lock().unwrap();
        let existing = cars
            .iter_mut()
            .find(|existing| existing.car_id == car_id)
            .ok_or_else(|| InMemoryCatalog::not_found(car_id))?;
        *existing = car.apply_to(existing);
        Ok(existing.clone())
    }

    async fn delete_car(&self, session: &Session, car_id: &str) -> CustomResult<()> {
        InMemoryCatalog::authorize(session)?;
        let mut cars = self.cars.lock().unwrap();
        let before = cars.len();
        cars.retain(|car| car.car_id != car_id);
        if cars.len() == before {
            return Err(InMemoryCatalog::not_found(car_id));
        }
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> CustomResult<AuthResponse> {
        if credentials.email == EMAIL && credentials.password == PASSWORD {
            Ok(AuthResponse {
                success: true,
                message: None,
                data: Some(AuthData {
                    id: "1".to_string(),
                    email: EMAIL.to_string(),
                    token: Some(TOKEN.to_string()),
                }),
            })
        } else {
            Ok(AuthResponse {
                success: false,
                message: Some("Invalid credentials".to_string()),
                data: None,
            })
        }
    }

    async fn signup(&self, credentials: &Credentials) -> CustomResult<AuthResponse> {
        Ok(AuthResponse {
            success: true,
            message: Some("User created".to_string()),
            data: Some(AuthData {
                id: "2".to_string(),
                email: credentials.email.clone(),
                token: None,
            }),
        })
    }
}

pub fn car(id: &str, name: &str, constructor: &str, top_speed: f64, acceleration: f64, downforce: f64, weight: f64) -> Car {
    Car {
        car_id: id.to_string(),
        car_name: name.to_string(),
        constructor: constructor.to_string(),
        season: "2023".to_string(),
        top_speed_kmh: top_speed,
        acceleration_0_100_kmh: acceleration,
        downforce_kgf: downforce,
        minimum_weight_kg: weight,
        ..Car::default()
    }
}

pub fn grid() -> Vec<Car> {
    vec![
        car("w14", "Mercedes W14", "Mercedes", 340.0, 2.7, 3300.0, 798.0),
        car("rb19", "Red Bull RB19", "Red Bull Racing", 370.0, 2.5, 3500.0, 798.0),
        car("sf23", "Ferrari SF-23", "Ferrari", 300.0, 2.6, 3200.0, 798.0),
    ]
}

pub async fn client_with(cars: Vec<Car>) -> Client {
    let catalog: SharedCatalog = Arc::new(InMemoryCatalog::new(cars));
    let config = Config::from_lookup(|_| None).expect("default config");
    Client::tracked(racing_catalog_analytics::build(catalog, &config))
        .await
        .expect("valid rocket instance")
}

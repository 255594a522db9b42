use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use snafu::{OptionExt, ResultExt};

use crate::errors::{
    CustomResult, DecodeSnafu, NotFoundSnafu, RemoteSnafu, RequestSnafu, UnauthorizedSnafu,
};
use crate::modules::models::car::{Car, CarUpdate};
use crate::modules::models::session::{AuthResponse, Credentials, Session};

/// # car catalog
/// the record-fetch/record-mutate interface of the remote catalog.
/// every call gets the session of the caller it is made for.
#[rocket::async_trait]
pub trait CarCatalog: Send + Sync {
    async fn get_cars(&self, session: &Session) -> CustomResult<Vec<Car>>;
    async fn get_car(&self, session: &Session, car_id: &str) -> CustomResult<Car>;
    async fn create_car(&self, session: &Session, car: &CarUpdate) -> CustomResult<Car>;
    async fn update_car(&self, session: &Session, car_id: &str, car: &CarUpdate) -> CustomResult<Car>;
    async fn delete_car(&self, session: &Session, car_id: &str) -> CustomResult<()>;
    async fn login(&self, credentials: &Credentials) -> CustomResult<AuthResponse>;
    async fn signup(&self, credentials: &Credentials) -> CustomResult<AuthResponse>;
}

pub type SharedCatalog = Arc<dyn CarCatalog>;

/// the envelope every catalog api response is wrapped in
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// # catalog api
/// http client for the remote catalog, e.g. `http://localhost:3000/api`
pub struct CatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogApi {
    pub fn new(base_url: &str) -> CatalogApi {
        CatalogApi {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: &str, session: &Session) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// sends a request and returns the body of a successful response
    async fn send(&self, builder: RequestBuilder, url: &str, resource: &str) -> CustomResult<String> {
        let response = builder.send().await.context(RequestSnafu { url })?;
        let status = response.status();
        let body = response.text().await.context(RequestSnafu { url })?;
        debug!(target: "catalog_api", "{} answered {}", url, status);

        check_status(status, &body, url, resource)?;
        Ok(body)
    }

    async fn post_credentials(&self, path: &str, credentials: &Credentials) -> CustomResult<AuthResponse> {
        let url = self.url(path);
        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .context(RequestSnafu { url: url.as_str() })?;

        // a failed login still carries an envelope with a message
        let body = response.text().await.context(RequestSnafu { url: url.as_str() })?;
        let auth: AuthResponse = serde_json::from_str(&body).context(DecodeSnafu { url: url.as_str() })?;
        if !auth.success {
            warn!(target: "catalog_api", "{} refused {}: {}", url, credentials.email, auth.message.as_deref().unwrap_or("no reason given"));
        }

        Ok(auth)
    }
}

/// maps the http status of a catalog response onto the crate errors
pub fn check_status(status: StatusCode, body: &str, url: &str, resource: &str) -> CustomResult<()> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => UnauthorizedSnafu { resource }.fail(),
        StatusCode::NOT_FOUND => NotFoundSnafu { resource }.fail(),
        status if !status.is_success() => {
            let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| status.to_string());
            RemoteSnafu { url, message }.fail()
        }
        _ => Ok(()),
    }
}

pub fn decode_envelope<T: DeserializeOwned>(body: &str, url: &str) -> CustomResult<ApiEnvelope<T>> {
    serde_json::from_str(body).context(DecodeSnafu { url })
}

#[rocket::async_trait]
impl CarCatalog for CatalogApi {
    async fn get_cars(&self, session: &Session) -> CustomResult<Vec<Car>> {
        let url = self.url("/cars");
        info!(target: "catalog_api", "Getting cars from api");

        let body = self.send(self.request(Method::GET, &url, session), &url, "cars").await?;
        let envelope: ApiEnvelope<Vec<Car>> = decode_envelope(&body, &url)?;

        Ok(envelope.data.unwrap_or_default())
    }

    async fn get_car(&self, session: &Session, car_id: &str) -> CustomResult<Car> {
        let url = self.url(&format!("/cars/{car_id}"));
        let resource = format!("car `{car_id}`");
        info!(target: "catalog_api", "Getting car {} from api", car_id);

        let body = self.send(self.request(Method::GET, &url, session), &url, &resource).await?;
        let envelope: ApiEnvelope<Car> = decode_envelope(&body, &url)?;

        envelope.data.context(NotFoundSnafu { resource })
    }

    async fn create_car(&self, session: &Session, car: &CarUpdate) -> CustomResult<Car> {
        let url = self.url("/cars");
        let builder = self.request(Method::POST, &url, session).json(car);

        let body = self.send(builder, &url, "cars").await?;
        let envelope: ApiEnvelope<Car> = decode_envelope(&body, &url)?;
        let created = envelope.data.context(RemoteSnafu {
            url: url.as_str(),
            message: envelope.message.clone().unwrap_or_else(|| "no car in response".to_string()),
        })?;

        info!(target: "catalog_api", "car {} created", created.car_id);
        Ok(created)
    }

    async fn update_car(&self, session: &Session, car_id: &str, car: &CarUpdate) -> CustomResult<Car> {
        let url = self.url(&format!("/cars/{car_id}"));
        let resource = format!("car `{car_id}`");
        let builder = self.request(Method::PUT, &url, session).json(car);

        let body = self.send(builder, &url, &resource).await?;
        let envelope: ApiEnvelope<Car> = decode_envelope(&body, &url)?;
        let updated = envelope.data.context(NotFoundSnafu { resource })?;

        info!(target: "catalog_api", "car {} updated", car_id);
        Ok(updated)
    }

    async fn delete_car(&self, session: &Session, car_id: &str) -> CustomResult<()> {
        let url = self.url(&format!("/cars/{car_id}"));
        let resource = format!("car `{car_id}`");

        self.send(self.request(Method::DELETE, &url, session), &url, &resource).await?;

        info!(target: "catalog_api", "car {} deleted", car_id);
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> CustomResult<AuthResponse> {
        self.post_credentials("/auth/login", credentials).await
    }

    async fn signup(&self, credentials: &Credentials) -> CustomResult<AuthResponse> {
        self.post_credentials("/auth/signup", credentials).await
    }
}

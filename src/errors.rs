use rocket::http::Status;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// a car record broke a precondition of the scoring engine
    #[snafu(display("invalid input for car `{car_id}`: {reason}"))]
    InvalidInput { car_id: String, reason: String },

    #[snafu(display("{resource} not found"))]
    NotFound { resource: String },

    #[snafu(display("not authorized to access {resource}"))]
    Unauthorized { resource: String },

    #[snafu(display("request to {url} failed: {source}"))]
    Request { url: String, source: reqwest::Error },

    #[snafu(display("catalog api rejected request to {url}: {message}"))]
    Remote { url: String, message: String },

    #[snafu(display("could not decode response from {url}: {source}"))]
    Decode { url: String, source: serde_json::Error },

    #[snafu(display("invalid value `{value}` for {key}"))]
    Config { key: String, value: String },

    #[snafu(display("failed to set up logging: {source}"))]
    Logging { source: fern::InitError },
}

pub type CustomResult<T> = Result<T, Error>;

impl Error {
    /// # http status
    /// the status a route answers with when it fails with this error
    ///
    /// ## Returns
    /// * `Status` - 4xx for caller mistakes, 502 when the catalog api misbehaves
    pub fn status(&self) -> Status {
        match self {
            Error::InvalidInput { .. } => Status::UnprocessableEntity,
            Error::NotFound { .. } => Status::NotFound,
            Error::Unauthorized { .. } => Status::Unauthorized,
            Error::Request { .. } | Error::Remote { .. } | Error::Decode { .. } => Status::BadGateway,
            Error::Config { .. } | Error::Logging { .. } => Status::InternalServerError,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().code < 500
    }
}

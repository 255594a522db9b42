use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use serde::{Deserialize, Serialize};

/// # session
/// the bearer credentials of one caller. a session is handed to every
/// catalog call explicitly, nothing keeps a token around between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Session {
        Session { token: None }
    }

    pub fn with_token(token: &str) -> Session {
        Session { token: Some(token.to_string()) }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// # parse authorization header
    /// accepts `Bearer <token>`, the scheme is matched case insensitive
    ///
    /// ## Returns
    /// * `Option<Session>` - `None` for other schemes or an empty token
    pub fn from_authorization_header(header: &str) -> Option<Session> {
        let (scheme, token) = header.trim().split_once(' ')?;
        let token = token.trim();
        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return None;
        }

        Some(Session::with_token(token))
    }
}

/// every protected route takes a `Session`, requests without a bearer
/// token are turned away with 401 before the catalog api is contacted
#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = &'static str;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request
            .headers()
            .get_one("Authorization")
            .and_then(Session::from_authorization_header)
        {
            Some(session) => Outcome::Success(session),
            None => Outcome::Error((Status::Unauthorized, "missing bearer token")),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// only used when signing up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthData {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AuthData>,
}

impl AuthResponse {
    /// the session a successful login hands out
    pub fn session(&self) -> Option<Session> {
        if !self.success {
            return None;
        }

        self.data
            .as_ref()
            .and_then(|data| data.token.as_deref())
            .map(Session::with_token)
    }
}

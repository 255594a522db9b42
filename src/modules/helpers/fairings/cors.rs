use std::io::Cursor;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method, Status};
use rocket::{Request, Response};

/// adds the cors headers the browser frontend needs and answers preflight
/// requests, which have no route of their own
pub struct CORS {
    pub allowed_origin: String,
}

impl CORS {
    pub fn new(allowed_origin: &str) -> CORS {
        CORS { allowed_origin: allowed_origin.to_string() }
    }
}

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", self.allowed_origin.clone()));
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "Authorization, Content-Type"));

        if request.method() == Method::Options {
            response.set_status(Status::NoContent);
            response.set_sized_body(0, Cursor::new(""));
        }
    }
}

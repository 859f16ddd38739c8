//! Static file server with a form echo and a hello endpoint.

use axum::{
    extract::{rejection::FormRejection, Form},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, post},
    Router,
};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

pub async fn hello(method: Method) -> Response {
    if method != Method::GET {
        return (StatusCode::BAD_REQUEST, "method not supported").into_response();
    }
    (StatusCode::OK, "Hello World!").into_response()
}

pub async fn form(form: Result<Form<ContactForm>, FormRejection>) -> Response {
    match form {
        Ok(Form(f)) => {
            debug!(name = %f.name, "form submitted");
            let body = format!("POST request successfully\nName : {}\nAddress : {}\n", f.name, f.address);
            (StatusCode::OK, body).into_response()
        }
        Err(e) => (StatusCode::BAD_REQUEST, format!("ParseForm() err : {}", e.body_text())).into_response(),
    }
}

/// `/hello`, `/form`, everything else from `static_dir`.
pub fn router(static_dir: &str) -> Router {
    Router::new()
        .route("/hello", any(hello))
        .route("/form", post(form))
        .fallback_service(ServeDir::new(static_dir))
}

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use models::{book::Book, employee::Employee, stock::Stock, user::User};
use service::{CrudRepository, CrudService};

pub mod crud;
pub mod site;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// The five CRUD endpoints for one record type under `base`.
pub fn crud_router<R: CrudRepository>(base: &str, repo: Arc<R>) -> Router {
    let item = format!("{base}/:id");
    Router::new()
        .route(base, get(crud::list::<R>).post(crud::create::<R>))
        .route(&item, get(crud::fetch::<R>).put(crud::update::<R>).delete(crud::remove::<R>))
        .with_state(CrudService::new(repo))
}

pub fn bookstore<R: CrudRepository<Record = Book>>(repo: Arc<R>) -> Router {
    finish(crud_router("/book", repo))
}

pub fn stocks<R: CrudRepository<Record = Stock>>(repo: Arc<R>) -> Router {
    finish(crud_router("/api/stock", repo))
}

pub fn employees<R: CrudRepository<Record = Employee>>(repo: Arc<R>) -> Router {
    finish(crud_router("/employee", repo))
}

pub fn users<R: CrudRepository<Record = User>>(repo: Arc<R>) -> Router {
    finish(crud_router("/user", repo))
}

pub fn static_site(static_dir: &str) -> Router {
    finish(site::router(static_dir))
}

/// Health route, CORS and request tracing shared by every service.
fn finish(app: Router) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(app)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

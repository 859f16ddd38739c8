//! Generic handlers binding the five CRUD endpoints of one record type.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::{DraftOf, IdOf};
use service::{CrudRepository, CrudService, Deleted, Updated};

use crate::errors::JsonApiError;

type DraftBody<R> = Result<Json<DraftOf<<R as CrudRepository>::Record>>, JsonRejection>;

/// `POST {base}` → 201 with the stored record.
pub async fn create<R: CrudRepository>(
    State(svc): State<CrudService<R>>,
    body: DraftBody<R>,
) -> Result<(StatusCode, Json<R::Record>), JsonApiError> {
    let Json(draft) = body.map_err(JsonApiError::bad_body)?;
    let record = svc.create(draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET {base}`
pub async fn list<R: CrudRepository>(
    State(svc): State<CrudService<R>>,
) -> Result<Json<Vec<R::Record>>, JsonApiError> {
    Ok(Json(svc.list().await?))
}

/// `GET {base}/:id`
pub async fn fetch<R: CrudRepository>(
    State(svc): State<CrudService<R>>,
    Path(id): Path<String>,
) -> Result<Json<R::Record>, JsonApiError> {
    Ok(Json(svc.get(&id).await?))
}

/// `PUT {base}/:id`
pub async fn update<R: CrudRepository>(
    State(svc): State<CrudService<R>>,
    Path(id): Path<String>,
    body: DraftBody<R>,
) -> Result<Json<Updated<R::Record>>, JsonApiError> {
    // a malformed id wins over a malformed body
    CrudService::<R>::parse_id(&id)?;
    let Json(draft) = body.map_err(JsonApiError::bad_body)?;
    Ok(Json(svc.update(&id, draft).await?))
}

/// `DELETE {base}/:id`
pub async fn remove<R: CrudRepository>(
    State(svc): State<CrudService<R>>,
    Path(id): Path<String>,
) -> Result<Json<Deleted<IdOf<R::Record>>>, JsonApiError> {
    Ok(Json(svc.delete(&id).await?))
}

use std::sync::Arc;

use models::{DraftOf, IdOf, RecordId, Resource};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::repository::CrudRepository;

/// A replaced record and how many rows the store reported.
#[derive(Debug, Clone, Serialize)]
pub struct Updated<T: Resource> {
    #[serde(flatten)]
    pub record: T,
    pub message: String,
    #[serde(skip)]
    pub affected: u64,
}

/// Confirmation for a removed record.
#[derive(Debug, Clone, Serialize)]
pub struct Deleted<I> {
    pub id: I,
    pub message: String,
    #[serde(skip)]
    pub affected: u64,
}

/// Maps CRUD requests onto single repository calls and applies the
/// identifier and not-found rules, independent of any web framework.
pub struct CrudService<R: CrudRepository> {
    repo: Arc<R>,
}

impl<R: CrudRepository> Clone for CrudService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: CrudRepository> CrudService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub fn kind(&self) -> &'static str { <R::Record as Resource>::KIND }

    /// Parse a path segment into the record's id type.
    pub fn parse_id(raw: &str) -> Result<IdOf<R::Record>, ServiceError> {
        <IdOf<R::Record> as RecordId>::parse(raw).map_err(ServiceError::InvalidId)
    }

    /// Persist a new record. A draft that already carries an id is rejected.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::book::{Book, BookDraft};
    /// use service::{CrudService, repository::mock::MemoryRepository};
    /// let svc = CrudService::new(Arc::new(MemoryRepository::<Book>::new()));
    /// let draft = BookDraft { id: None, name: "Dune".into(), author: "Herbert".into(), publication: "Chilton".into() };
    /// let book = tokio_test::block_on(svc.create(draft)).unwrap();
    /// assert_eq!(book.id, 1);
    /// ```
    #[instrument(skip(self, draft), fields(kind = self.kind()))]
    pub async fn create(&self, draft: DraftOf<R::Record>) -> Result<R::Record, ServiceError> {
        if let Some(id) = <R::Record as Resource>::draft_id(&draft) {
            return Err(ServiceError::Validation(format!(
                "id {id} must not be supplied; it is assigned by the store"
            )));
        }
        let record = self.repo.insert(draft).await?;
        info!(id = %record.id(), "record_created");
        Ok(record)
    }

    #[instrument(skip(self), fields(kind = self.kind()))]
    pub async fn get(&self, raw_id: &str) -> Result<R::Record, ServiceError> {
        let id = Self::parse_id(raw_id)?;
        self.repo
            .find(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found(self.kind(), &id))
    }

    /// Every record; an empty store is an empty list.
    #[instrument(skip(self), fields(kind = self.kind()))]
    pub async fn list(&self) -> Result<Vec<R::Record>, ServiceError> {
        let records = self.repo.list().await?;
        debug!(count = records.len(), "records_listed");
        Ok(records)
    }

    /// Full replacement keyed by the path id. A body id, when present, must
    /// equal the path id.
    #[instrument(skip(self, draft), fields(kind = self.kind()))]
    pub async fn update(&self, raw_id: &str, draft: DraftOf<R::Record>) -> Result<Updated<R::Record>, ServiceError> {
        let id = Self::parse_id(raw_id)?;
        if let Some(body_id) = <R::Record as Resource>::draft_id(&draft) {
            if *body_id != id {
                return Err(ServiceError::Validation(format!(
                    "body id {body_id} does not match path id {id}"
                )));
            }
        }
        let affected = self.repo.replace(&id, draft.clone()).await?;
        if affected == 0 {
            return Err(ServiceError::not_found(self.kind(), &id));
        }
        info!(%id, affected, "record_updated");
        Ok(Updated {
            record: <R::Record as Resource>::from_draft(id, draft),
            message: format!("{} updated successfully. Total rows/records affected {}", self.kind(), affected),
            affected,
        })
    }

    #[instrument(skip(self), fields(kind = self.kind()))]
    pub async fn delete(&self, raw_id: &str) -> Result<Deleted<IdOf<R::Record>>, ServiceError> {
        let id = Self::parse_id(raw_id)?;
        let affected = self.repo.delete(&id).await?;
        if affected == 0 {
            return Err(ServiceError::not_found(self.kind(), &id));
        }
        info!(%id, affected, "record_deleted");
        Ok(Deleted {
            message: format!("{} deleted successfully. Total rows/records affected {}", self.kind(), affected),
            id,
            affected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::{MemoryRepository, UnavailableRepository};
    use models::stock::{Stock, StockDraft};
    use models::user::{User, UserDraft};

    fn widget(price: f64) -> StockDraft {
        StockDraft { id: None, name: "Widget".into(), price, company: "Acme".into() }
    }

    fn stocks() -> CrudService<MemoryRepository<Stock>> {
        CrudService::new(Arc::new(MemoryRepository::new()))
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() -> anyhow::Result<()> {
        let svc = stocks();
        let created = svc.create(widget(9.99)).await?;
        let fetched = svc.get(&created.id.to_string()).await?;
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.price, 9.99);
        assert_eq!(fetched.company, "Acme");
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_supplied_id() {
        let svc = stocks();
        let mut draft = widget(1.0);
        draft.id = Some(7);
        let err = svc.create(draft).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() -> anyhow::Result<()> {
        let svc = stocks();
        let created = svc.create(widget(9.99)).await?;
        let updated = svc.update(&created.id.to_string(), widget(12.5)).await?;
        assert_eq!(updated.record.id, created.id);
        assert_eq!(updated.record.price, 12.5);
        assert_eq!(updated.affected, 1);
        assert_eq!(updated.message, "stock updated successfully. Total rows/records affected 1");
        assert_eq!(svc.get(&created.id.to_string()).await?.price, 12.5);
        Ok(())
    }

    #[tokio::test]
    async fn update_accepts_matching_body_id_and_rejects_other() -> anyhow::Result<()> {
        let svc = stocks();
        let created = svc.create(widget(1.0)).await?;
        let mut same = widget(2.0);
        same.id = Some(created.id);
        svc.update(&created.id.to_string(), same).await?;

        let mut other = widget(3.0);
        other.id = Some(created.id + 1);
        let err = svc.update(&created.id.to_string(), other).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let err = stocks().update("41", widget(1.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> anyhow::Result<()> {
        let svc = stocks();
        let created = svc.create(widget(1.0)).await?;
        let raw = created.id.to_string();
        let deleted = svc.delete(&raw).await?;
        assert_eq!(deleted.id, created.id);
        assert!(deleted.message.contains("affected 1"));
        assert!(matches!(svc.get(&raw).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(&raw).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn empty_collection_lists_as_empty() -> anyhow::Result<()> {
        assert!(stocks().list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_ids_are_invalid_not_store_errors() {
        let svc = stocks();
        for raw in ["abc", "1x", ""] {
            assert!(matches!(svc.get(raw).await, Err(ServiceError::InvalidId(_))), "{raw}");
            assert!(matches!(svc.delete(raw).await, Err(ServiceError::InvalidId(_))), "{raw}");
        }

        let users = CrudService::new(Arc::new(MemoryRepository::<User>::new()));
        let draft = UserDraft { id: None, name: "N".into(), gender: "x".into(), age: 1 };
        assert!(matches!(users.update("123", draft).await, Err(ServiceError::InvalidId(_))));
        assert!(matches!(users.get("zzzzzzzzzzzzzzzzzzzzzzzz").await, Err(ServiceError::InvalidId(_))));
    }

    #[tokio::test]
    async fn invalid_id_is_checked_before_the_store() {
        let svc = CrudService::new(Arc::new(UnavailableRepository::<Stock>::default()));
        assert!(matches!(svc.get("nope").await, Err(ServiceError::InvalidId(_))));
        assert!(matches!(svc.get("1").await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.list().await, Err(ServiceError::Db(_))));
    }

    #[test]
    fn updated_serializes_flat_with_message() {
        let updated = Updated {
            record: Stock { id: 3, name: "W".into(), price: 1.5, company: "C".into() },
            message: "m".into(),
            affected: 1,
        };
        let json = serde_json::to_value(&updated).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "name": "W", "price": 1.5, "company": "C", "message": "m"}));
    }
}

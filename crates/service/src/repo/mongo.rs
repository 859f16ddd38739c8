use std::marker::PhantomData;

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use models::mongo::DocumentRecord;
use models::{DocumentId, DraftOf};

use crate::errors::ServiceError;
use crate::repository::CrudRepository;

/// One MongoDB collection holding one record type.
pub struct MongoRepository<T: DocumentRecord> {
    collection: Collection<T::Document>,
    _record: PhantomData<fn() -> T>,
}

impl<T: DocumentRecord> MongoRepository<T> {
    /// Uses the record's default collection name.
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, T::COLLECTION)
    }

    pub fn with_collection(db: &Database, name: &str) -> Self {
        Self { collection: db.collection::<T::Document>(name), _record: PhantomData }
    }
}

#[async_trait::async_trait]
impl<T: DocumentRecord> CrudRepository for MongoRepository<T> {
    type Record = T;

    async fn insert(&self, draft: DraftOf<T>) -> Result<T, ServiceError> {
        let stored = T::to_document(ObjectId::new(), &draft);
        self.collection.insert_one(&stored).await?;
        Ok(T::from_document(stored))
    }

    async fn find(&self, id: &DocumentId) -> Result<Option<T>, ServiceError> {
        let found = self.collection.find_one(doc! { "_id": id.object_id() }).await?;
        Ok(found.map(T::from_document))
    }

    async fn list(&self) -> Result<Vec<T>, ServiceError> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<T::Document> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(T::from_document).collect())
    }

    async fn replace(&self, id: &DocumentId, draft: DraftOf<T>) -> Result<u64, ServiceError> {
        let res = self
            .collection
            .update_one(doc! { "_id": id.object_id() }, doc! { "$set": T::replacement(&draft) })
            .await?;
        // matched, not modified: replacing with identical values still counts
        Ok(res.matched_count)
    }

    async fn delete(&self, id: &DocumentId) -> Result<u64, ServiceError> {
        let res = self.collection.delete_one(doc! { "_id": id.object_id() }).await?;
        Ok(res.deleted_count)
    }
}

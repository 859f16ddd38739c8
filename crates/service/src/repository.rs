use async_trait::async_trait;
use models::{DraftOf, IdOf, Resource};

use crate::errors::ServiceError;

/// Store access for one record type. Every method issues exactly one command
/// and reports "nothing matched" as a value, never as an error.
#[async_trait]
pub trait CrudRepository: Send + Sync + 'static {
    type Record: Resource;

    /// Persist a new record; the store assigns the id.
    async fn insert(&self, draft: DraftOf<Self::Record>) -> Result<Self::Record, ServiceError>;

    async fn find(&self, id: &IdOf<Self::Record>) -> Result<Option<Self::Record>, ServiceError>;

    /// Whole collection, unfiltered, in store order.
    async fn list(&self) -> Result<Vec<Self::Record>, ServiceError>;

    /// Overwrite every scalar field; returns how many records matched.
    async fn replace(&self, id: &IdOf<Self::Record>, draft: DraftOf<Self::Record>) -> Result<u64, ServiceError>;

    /// Returns how many records were removed.
    async fn delete(&self, id: &IdOf<Self::Record>) -> Result<u64, ServiceError>;
}

/// In-memory repositories for tests, demos and doc examples
pub mod mock {
    use super::*;
    use std::marker::PhantomData;
    use std::sync::atomic::{AtomicU64, Ordering};

    use models::RecordId;
    use tokio::sync::RwLock;

    /// Keeps records in insertion order and mints ids from a counter.
    pub struct MemoryRepository<T: Resource> {
        records: RwLock<Vec<T>>,
        seq: AtomicU64,
    }

    impl<T: Resource> Default for MemoryRepository<T> {
        fn default() -> Self {
            Self { records: RwLock::new(Vec::new()), seq: AtomicU64::new(0) }
        }
    }

    impl<T: Resource> MemoryRepository<T> {
        pub fn new() -> Self { Self::default() }

        pub async fn len(&self) -> usize { self.records.read().await.len() }

        pub async fn is_empty(&self) -> bool { self.len().await == 0 }
    }

    #[async_trait]
    impl<T: Resource> CrudRepository for MemoryRepository<T> {
        type Record = T;

        async fn insert(&self, draft: DraftOf<T>) -> Result<T, ServiceError> {
            let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
            let record = T::from_draft(<T::Id as RecordId>::mint(seq), draft);
            self.records.write().await.push(record.clone());
            Ok(record)
        }

        async fn find(&self, id: &IdOf<T>) -> Result<Option<T>, ServiceError> {
            let records = self.records.read().await;
            Ok(records.iter().find(|r| r.id() == id).cloned())
        }

        async fn list(&self) -> Result<Vec<T>, ServiceError> {
            Ok(self.records.read().await.clone())
        }

        async fn replace(&self, id: &IdOf<T>, draft: DraftOf<T>) -> Result<u64, ServiceError> {
            let mut records = self.records.write().await;
            match records.iter_mut().find(|r| r.id() == id) {
                Some(slot) => {
                    *slot = T::from_draft(id.clone(), draft);
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: &IdOf<T>) -> Result<u64, ServiceError> {
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|r| r.id() != id);
            Ok((before - records.len()) as u64)
        }
    }

    /// Fails every call with a store error, like a database that went away.
    pub struct UnavailableRepository<T: Resource> {
        _record: PhantomData<fn() -> T>,
    }

    impl<T: Resource> Default for UnavailableRepository<T> {
        fn default() -> Self { Self { _record: PhantomData } }
    }

    impl<T: Resource> UnavailableRepository<T> {
        fn down() -> ServiceError { ServiceError::Db("connection refused".into()) }
    }

    #[async_trait]
    impl<T: Resource> CrudRepository for UnavailableRepository<T> {
        type Record = T;

        async fn insert(&self, _draft: DraftOf<T>) -> Result<T, ServiceError> { Err(Self::down()) }

        async fn find(&self, _id: &IdOf<T>) -> Result<Option<T>, ServiceError> { Err(Self::down()) }

        async fn list(&self) -> Result<Vec<T>, ServiceError> { Err(Self::down()) }

        async fn replace(&self, _id: &IdOf<T>, _draft: DraftOf<T>) -> Result<u64, ServiceError> { Err(Self::down()) }

        async fn delete(&self, _id: &IdOf<T>) -> Result<u64, ServiceError> { Err(Self::down()) }
    }
}

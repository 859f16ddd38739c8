//! MongoDB connection and the mapping between records and stored documents.

use std::time::Duration;

use configs::MongoConfig;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::ClientOptions,
    Client, Database,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::{errors::ModelError, resource::Resource, DocumentId};

/// Connect and ping. `default_db` is used when the config names no database.
pub async fn connect(cfg: &MongoConfig, default_db: &str) -> Result<Database, ModelError> {
    let db_err = |e: mongodb::error::Error| ModelError::Db(e.to_string());
    let mut opts = ClientOptions::parse(&cfg.uri).await.map_err(db_err)?;
    let timeout = Duration::from_secs(cfg.connect_timeout_secs);
    opts.connect_timeout = Some(timeout);
    opts.server_selection_timeout = Some(timeout);
    let client = Client::with_options(opts).map_err(db_err)?;
    let name = cfg.database_or(default_db);
    let db = client.database(name);
    db.run_command(doc! { "ping": 1 }).await.map_err(db_err)?;
    info!(database = %name, "mongodb connected");
    Ok(db)
}

/// A record stored as one document in one collection.
pub trait DocumentRecord: Resource<Id = DocumentId> {
    /// Stored form, with the id under `_id`.
    type Document: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static;

    const COLLECTION: &'static str;

    fn to_document(id: ObjectId, draft: &Self::Draft) -> Self::Document;

    fn from_document(doc: Self::Document) -> Self;

    /// `$set` body replacing every scalar field.
    fn replacement(draft: &Self::Draft) -> Document;
}

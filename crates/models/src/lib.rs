//! Record types exposed by the services, their store mappings, and the
//! helpers that open store connections.

pub mod errors;
pub mod db;
pub mod mongo;
pub mod resource;
pub mod document_id;
pub mod book;
pub mod stock;
pub mod employee;
pub mod user;

pub use document_id::DocumentId;
pub use resource::{DraftOf, IdOf, RecordId, Resource};

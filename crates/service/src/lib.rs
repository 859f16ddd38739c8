//! Service layer: the CRUD request-to-operation mapping and the repositories
//! it runs against.
//! - `crud` holds the mapping policy, independent of any web framework.
//! - `repository` defines the one-command-per-operation store contract.
//! - `repo` implements it for sea-orm and MongoDB.

pub mod errors;
pub mod repository;
pub mod crud;
pub mod repo;
#[cfg(test)]
pub mod test_support;

pub use crud::{CrudService, Deleted, Updated};
pub use errors::ServiceError;
pub use repository::CrudRepository;

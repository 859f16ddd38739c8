//! Store-backed `CrudRepository` implementations.

pub mod seaorm;
pub mod mongo;

pub use mongo::MongoRepository;
pub use seaorm::{SeaOrmBookRepository, SeaOrmStockRepository};

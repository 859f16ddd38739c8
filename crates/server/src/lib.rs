pub mod routes;
pub mod startup;
pub mod errors;
pub mod launch;

pub use launch::launch;
pub use startup::{run, ServiceKind};

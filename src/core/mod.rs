//! Core module containing the error type, identifier generator, store
//! abstraction, and the request/response envelope shared by both resources

pub mod envelope;
pub mod error;
pub mod fields;
pub mod id;
pub mod store;

pub use envelope::{DataBody, RequestBody};
pub use error::ApiError;
pub use id::IdGenerator;
pub use store::{InMemoryStore, Keyed, Store};

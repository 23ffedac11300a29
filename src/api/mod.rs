pub mod client;
pub mod models;

pub use client::{HttpBackend, QueryBackend};
pub use models::{QueryRequest, QueryResponse};

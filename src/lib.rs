//! Schools-api: a paginated schools collection service.
//!
//! Schools are kept in an append-only in-memory store and exposed over HTTP
//! with offset/limit pagination and first/last/next/prev navigation links.
//!
//! # Example
//!
//! ```no_run
//! use schools_api::{Config, SchoolServer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = SchoolServer::new(Config::default());
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod router;
pub mod server;
pub mod storage;

// Re-exports for convenience
pub use config::{Args, Config, DEFAULT_HOST, DEFAULT_PORT};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use pagination::{Page, PageRequest, PageWindow};
pub use server::{SchoolServer, SchoolServerBuilder};
pub use storage::{MemorySchoolStore, SchoolStore};

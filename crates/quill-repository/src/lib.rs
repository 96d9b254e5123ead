//! # Quill Repository
//!
//! Durable record stores behind the service layer:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository> / Arc<dyn PostRepository>
//! PgUserRepository / PgPostRepository   (PostgreSQL / SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! PostgreSQL
//! ```
//!
//! [`InMemoryStore`] implements both traits without a database and can
//! simulate store outages.

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod traits;

pub use memory::InMemoryStore;
pub use pool::*;
pub use postgres::*;
pub use traits::*;

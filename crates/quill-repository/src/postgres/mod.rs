//! PostgreSQL store implementations.

mod post_repository;
mod user_repository;

pub use post_repository::PgPostRepository;
pub use user_repository::PgUserRepository;

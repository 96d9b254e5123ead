//! Data Transfer Objects (DTOs).

mod post_dto;
mod user_dto;

pub use post_dto::*;
pub use user_dto::*;

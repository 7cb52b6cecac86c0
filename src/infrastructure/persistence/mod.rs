//! PostgreSQL repository implementations.
//!
//! - [`PgUrlRepository`] - short URL storage and lookups
//! - [`PgClickRepository`] - click analytics rows

pub mod pg_click_repository;
pub mod pg_url_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_url_repository::PgUrlRepository;

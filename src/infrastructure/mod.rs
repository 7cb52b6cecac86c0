//! Infrastructure layer: concrete implementations of the domain traits.
//!
//! - [`persistence`] - PostgreSQL repositories

pub mod persistence;

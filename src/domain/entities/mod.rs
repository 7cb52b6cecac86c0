//! Core domain entities.
//!
//! - [`ShortUrl`] - a short code mapped to its destination
//! - [`Click`] - one recorded redirect
//!
//! Creation inputs live in separate structs ([`NewShortUrl`], [`NewClick`])
//! because ids and timestamps are assigned by the store.

pub mod click;
pub mod short_url;

pub use click::{Click, NewClick};
pub use short_url::{NewShortUrl, ShortUrl};

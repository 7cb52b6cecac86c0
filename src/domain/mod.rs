//! Domain layer: entities, repository contracts and background click handling.
//!
//! - [`entities`] - core data structures
//! - [`repositories`] - storage traits implemented by the infrastructure layer
//! - [`click_event`] - click metadata and worker tasks
//! - [`click_worker`] - dispatcher and background worker
//!
//! # Click Processing Flow
//!
//! 1. A redirect resolves a code; the service submits an increment task
//! 2. The redirect handler submits a [`click_event::ClickEvent`]
//! 3. [`click_worker::run_click_worker`] executes both off the request path
//! 4. Failures are logged and dropped

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;

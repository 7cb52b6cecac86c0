//! Application layer services.
//!
//! Services take repository traits at construction and expose the operations
//! the HTTP layer and admin CLI call.
//!
//! - [`services::link_service::LinkService`] - creation and resolution
//! - [`services::stats_service::StatsService`] - stored records and click counts

pub mod services;

//! Helpers shared by the service and HTTP layers.
//!
//! - [`code_generator`] - random short code generation
//! - [`url_validator`] - destination URL checks
//! - [`client_ip`] - client address extraction from request headers

pub mod client_ip;
pub mod code_generator;
pub mod url_validator;

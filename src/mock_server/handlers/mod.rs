//! HTTP request handlers for the mock server.

mod auth;
pub mod files;
pub mod link;
pub mod records;

pub use files::*;
pub use link::*;
pub use records::*;

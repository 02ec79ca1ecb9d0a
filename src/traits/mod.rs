//! Trait definitions for Agave endpoint accessors.
//!
//! Each resource type declares where it lives and whether it needs a
//! project id, then implements the operations its endpoints support.

mod get;
mod list;
mod resource;

pub use get::Get;
pub use list::{List, DEFAULT_PAGE_SIZE};
pub use resource::Resource;

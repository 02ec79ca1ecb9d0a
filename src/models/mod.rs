//! Agave resource types.
//!
//! Records are passed through as JSON; these types only describe where each
//! resource lives and which operations it supports.

mod contact;
mod drawing;
mod file;
mod project;
mod rfi;
mod specification;
mod submittal;

pub use contact::*;
pub use drawing::*;
pub use file::*;
pub use project::*;
pub use rfi::*;
pub use specification::*;
pub use submittal::*;

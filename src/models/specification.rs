//! Specification sections.

use async_trait::async_trait;

use crate::context::Requirement;
use crate::traits::{Get, List, Resource};

/// A section of a project's specification book.
#[derive(Debug, Clone, Copy)]
pub struct SpecificationSection;

impl Resource for SpecificationSection {
    const PATH: &'static str = "specification-sections";
    const PROJECT_ID: Requirement = Requirement::Required;
}

#[async_trait]
impl Get for SpecificationSection {}

#[async_trait]
impl List for SpecificationSection {}

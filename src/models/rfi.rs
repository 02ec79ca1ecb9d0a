//! Requests for information.

use async_trait::async_trait;

use crate::context::Requirement;
use crate::traits::{Get, List, Resource};

/// An RFI (request for information) within a project.
#[derive(Debug, Clone, Copy)]
pub struct Rfi;

impl Resource for Rfi {
    const PATH: &'static str = "rfis";
    const PROJECT_ID: Requirement = Requirement::Required;
}

#[async_trait]
impl Get for Rfi {}

#[async_trait]
impl List for Rfi {}

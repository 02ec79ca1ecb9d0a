//! Submittals.

use async_trait::async_trait;

use crate::context::Requirement;
use crate::traits::{Get, List, Resource};

/// A submittal within a project.
#[derive(Debug, Clone, Copy)]
pub struct Submittal;

impl Resource for Submittal {
    const PATH: &'static str = "submittals";
    const PROJECT_ID: Requirement = Requirement::Required;
}

#[async_trait]
impl Get for Submittal {}

#[async_trait]
impl List for Submittal {}

//! Account directory: contacts and vendors.
//!
//! Both are account-level records. A project id narrows the results when
//! one is known but is never required.

use async_trait::async_trait;

use crate::context::Requirement;
use crate::traits::{Get, List, Resource};

/// A person in the account directory.
#[derive(Debug, Clone, Copy)]
pub struct Contact;

impl Resource for Contact {
    const PATH: &'static str = "contacts";
    const PROJECT_ID: Requirement = Requirement::Optional;
}

#[async_trait]
impl Get for Contact {}

#[async_trait]
impl List for Contact {}

/// A company (subcontractor, supplier, ...) in the account directory.
#[derive(Debug, Clone, Copy)]
pub struct Vendor;

impl Resource for Vendor {
    const PATH: &'static str = "vendors";
    const PROJECT_ID: Requirement = Requirement::Optional;
}

#[async_trait]
impl Get for Vendor {}

#[async_trait]
impl List for Vendor {}

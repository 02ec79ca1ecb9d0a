//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the agave binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::context::RequestOptions;
use crate::pagination::PaginationParams;

/// Agave API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "agave", about = "Agave API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Per-call credentials and hints shared by every command.
#[derive(Args, Debug, Default)]
pub struct CredentialArgs {
    /// Account token of the linked account.
    #[arg(long, global = true, env = "AGAVE_ACCOUNT_TOKEN", hide_env_values = true)]
    pub account_token: Option<String>,

    /// Project to scope requests to.
    #[arg(long, global = true, env = "AGAVE_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Upstream-source fields to embed in responses (repeatable or comma-separated).
    #[arg(long = "include", global = true, value_delimiter = ',')]
    pub include: Vec<String>,
}

impl CredentialArgs {
    /// Convert into the options passed to accessors.
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            include_source_fields: self.include.clone(),
            account_token: self.account_token.clone(),
            project_id: self.project_id.clone(),
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single record by ID.
    Get {
        /// The type of record to get.
        resource: ResourceKind,

        /// The record ID.
        id: String,
    },

    /// List records with optional pagination.
    List {
        /// The type of record to list.
        resource: ListableKind,

        /// Page number (1-indexed).
        #[arg(long)]
        page: Option<u32>,

        /// Number of items per page.
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// List the versions of a drawing.
    Versions {
        /// The drawing ID.
        drawing_id: String,

        /// Page number (1-indexed).
        #[arg(long)]
        page: Option<u32>,

        /// Number of items per page.
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// List the files in a folder.
    Files {
        /// The folder ID.
        folder_id: String,
    },

    /// Show the active project's root folder.
    RootFolder,

    /// Show the full folder tree.
    Tree {
        /// Start from this folder instead of the project's root folder.
        #[arg(long)]
        folder: Option<String>,
    },

    /// Account linking.
    #[command(subcommand)]
    Link(LinkCommand),
}

impl Command {
    /// Pagination given on the command line, if any.
    pub fn pagination(&self) -> PaginationParams {
        match self {
            Self::List { page, per_page, .. } | Self::Versions { page, per_page, .. } => {
                PaginationParams {
                    page: *page,
                    per_page: *per_page,
                }
            }
            _ => PaginationParams::default(),
        }
    }
}

/// Link flow commands.
#[derive(Subcommand, Debug)]
pub enum LinkCommand {
    /// Create a link token for a reference ID.
    Create {
        /// Your identifier for the account being linked.
        reference_id: String,
    },
    /// Exchange a public token for an account token.
    Exchange {
        /// The public token returned by the link flow.
        public_token: String,
    },
}

/// Record types that can be fetched by ID.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    #[value(alias = "projects")]
    Project,
    #[value(alias = "rfis")]
    Rfi,
    #[value(alias = "submittals")]
    Submittal,
    #[value(alias = "specifications", alias = "specification")]
    SpecificationSection,
    #[value(alias = "contacts")]
    Contact,
    #[value(alias = "vendors")]
    Vendor,
    #[value(alias = "drawings")]
    Drawing,
    #[value(alias = "files")]
    File,
    #[value(alias = "folders")]
    Folder,
}

/// Record types that can be listed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListableKind {
    #[value(alias = "project")]
    Projects,
    #[value(alias = "rfi")]
    Rfis,
    #[value(alias = "submittal")]
    Submittals,
    #[value(alias = "specifications", alias = "specification")]
    SpecificationSections,
    #[value(alias = "contact")]
    Contacts,
    #[value(alias = "vendor")]
    Vendors,
    #[value(alias = "drawing")]
    Drawings,
}

//! Agave API CLI binary.
//!
//! A command-line interface for interacting with the Agave API.

use agaveapi::cli::{Cli, Command, LinkCommand, ListableKind, ResourceKind};
use agaveapi::output::{PrettyPrint, RecordRow, TreeOutline};
use agaveapi::{
    create_link_token, exchange_public_token, page_items, AgaveClient, Contact, Drawing, File,
    Folder, Get, List, PaginationParams, Project, Record, RequestOptions, Rfi,
    SpecificationSection, Submittal, Vendor,
};
use clap::Parser;
use std::process::ExitCode;
use tabled::Table;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let mut client = match AgaveClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set AGAVE_CLIENT_ID and AGAVE_CLIENT_SECRET environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let agaveapi::AgaveError::MissingCredential(_) = e {
                eprintln!(
                    "Hint: Pass --account-token/--project-id or set \
                     AGAVE_ACCOUNT_TOKEN/AGAVE_PROJECT_ID"
                );
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("AGAVE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(client: &mut AgaveClient, cli: Cli) -> agaveapi::Result<()> {
    let options = cli.credentials.request_options();
    let pagination = cli.command.pagination();

    match cli.command {
        Command::Get { resource, id } => {
            let record = handle_get(client, resource, &id, &options).await?;
            output_single(&record)
        }
        Command::List { resource, .. } => {
            let page = handle_list(client, resource, &pagination, &options).await?;
            output_page(&page, cli.json)
        }
        Command::Versions { drawing_id, .. } => {
            let page = Drawing::versions(client, &drawing_id, &pagination, &options).await?;
            output_page(&page, cli.json)
        }
        Command::Files { folder_id } => {
            let files = Folder::files(client, &folder_id, &options).await?;
            if !cli.json {
                if let Some(items) = files.as_array() {
                    println!("{}", Table::new(items.iter().map(RecordRow::from)));
                    return Ok(());
                }
            }
            output_single(&files)
        }
        Command::RootFolder => {
            let root = Folder::root(client, &options).await?;
            output_single(&root)
        }
        Command::Tree { folder } => {
            let tree = Folder::tree(client, folder.as_deref(), &options).await?;
            if cli.json {
                output_single(&tree)
            } else {
                println!("{}", TreeOutline(&tree).pretty_print());
                Ok(())
            }
        }
        Command::Link(LinkCommand::Create { reference_id }) => {
            let response = create_link_token(client, &reference_id).await?;
            output_single(&response)
        }
        Command::Link(LinkCommand::Exchange { public_token }) => {
            let response = exchange_public_token(client, &public_token).await?;
            output_single(&response)
        }
    }
}

async fn handle_get(
    client: &mut AgaveClient,
    resource: ResourceKind,
    id: &str,
    options: &RequestOptions,
) -> agaveapi::Result<Record> {
    match resource {
        ResourceKind::Project => Project::get(client, id, options).await,
        ResourceKind::Rfi => Rfi::get(client, id, options).await,
        ResourceKind::Submittal => Submittal::get(client, id, options).await,
        ResourceKind::SpecificationSection => SpecificationSection::get(client, id, options).await,
        ResourceKind::Contact => Contact::get(client, id, options).await,
        ResourceKind::Vendor => Vendor::get(client, id, options).await,
        ResourceKind::Drawing => Drawing::get(client, id, options).await,
        ResourceKind::File => File::get(client, id, options).await,
        ResourceKind::Folder => Folder::get(client, id, options).await,
    }
}

async fn handle_list(
    client: &mut AgaveClient,
    resource: ListableKind,
    pagination: &PaginationParams,
    options: &RequestOptions,
) -> agaveapi::Result<Record> {
    match resource {
        ListableKind::Projects => Project::list_page(client, pagination, options).await,
        ListableKind::Rfis => Rfi::list_page(client, pagination, options).await,
        ListableKind::Submittals => Submittal::list_page(client, pagination, options).await,
        ListableKind::SpecificationSections => {
            SpecificationSection::list_page(client, pagination, options).await
        }
        ListableKind::Contacts => Contact::list_page(client, pagination, options).await,
        ListableKind::Vendors => Vendor::list_page(client, pagination, options).await,
        ListableKind::Drawings => Drawing::list_page(client, pagination, options).await,
    }
}

fn output_single(record: &Record) -> agaveapi::Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

fn output_page(page: &Record, json: bool) -> agaveapi::Result<()> {
    if json {
        return output_single(page);
    }

    let items = page_items(page)?;
    println!("{}", Table::new(items.iter().map(RecordRow::from)));
    println!("\n{} records", items.len());
    Ok(())
}

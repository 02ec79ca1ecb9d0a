//! Basic example demonstrating the Agave API client.
//!
//! Run with:
//! ```
//! AGAVE_CLIENT_ID=id AGAVE_CLIENT_SECRET=secret AGAVE_ACCOUNT_TOKEN=token \
//!     cargo run --example basic
//! ```

use agaveapi::output::{display_name, PrettyPrint, TreeOutline};
use agaveapi::{
    page_items, AgaveClient, Folder, List, PaginationParams, Project, RequestOptions, Rfi,
};

#[tokio::main]
async fn main() -> agaveapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Agave client...");
    let mut client = AgaveClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // List first page of projects
    println!("\n--- Listing Projects (first page) ---");
    let page = Project::list_page(
        &mut client,
        &PaginationParams::for_page(1, 10),
        &RequestOptions::default(),
    )
    .await?;
    let projects = page_items(&page)?;
    println!("Found {} projects", projects.len());

    for project in projects {
        println!("  - {} ({})", display_name(project), project["id"]);
    }

    let Some(first_id) = projects
        .first()
        .and_then(|p| p["id"].as_str())
        .map(str::to_string)
    else {
        println!("\nNo projects available.");
        return Ok(());
    };

    // Scope the following calls to the first project
    let scoped = RequestOptions::default().project_id(first_id.as_str());

    println!("\n--- RFIs ---");
    let rfis = Rfi::list_all(&mut client, &scoped).await?;
    println!("Found {} RFIs", rfis.len());
    for rfi in rfis.iter().take(5) {
        println!("  - {}", display_name(rfi));
    }

    // The project id passed above is now the client's default
    println!("\n--- File Tree ---");
    let tree = Folder::tree(&mut client, None, &RequestOptions::default()).await?;
    println!("{}", TreeOutline(&tree).pretty_print());

    println!("\nDone!");
    Ok(())
}

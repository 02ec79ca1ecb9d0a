//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Agave API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::tree::{record_id, FILES_KEY};
use crate::Record;

/// State shared between the server task and the test.
pub type SharedState = Arc<RwLock<MockState>>;

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Records indexed by resource path (e.g., "rfis"), in insertion order.
    pub records: HashMap<String, Vec<Record>>,

    /// Versions indexed by drawing ID.
    pub drawing_versions: HashMap<String, Vec<Record>>,

    /// Folders indexed by ID, with their subfolder stubs and files embedded.
    pub folders: HashMap<String, Record>,

    /// Root folder ID indexed by project ID.
    pub root_folders: HashMap<String, String>,

    /// Files indexed by ID.
    pub files: HashMap<String, Record>,

    /// Public tokens the link flow accepts, mapped to the account token they yield.
    pub public_tokens: HashMap<String, String>,

    /// Reference IDs link tokens were created for, in request order.
    pub link_references: Vec<String>,

    /// Optional account token. If set, requests must send exactly this token.
    pub required_token: Option<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Add a record under a resource path.
    pub fn with_record(mut self, resource: &str, record: Record) -> Self {
        self.records
            .entry(resource.to_string())
            .or_default()
            .push(record);
        self
    }

    /// Set the versions of a drawing.
    pub fn with_drawing_versions(mut self, drawing_id: &str, versions: Vec<Record>) -> Self {
        self.drawing_versions
            .insert(drawing_id.to_string(), versions);
        self
    }

    /// Add a folder. Files embedded in it become fetchable by ID.
    pub fn with_folder(mut self, folder: Record) -> Self {
        if let Some(files) = folder.get(FILES_KEY).and_then(Record::as_array) {
            for file in files {
                if let Some(id) = record_id(file) {
                    self.files.insert(id, file.clone());
                }
            }
        }
        if let Some(id) = record_id(&folder) {
            self.folders.insert(id, folder);
        }
        self
    }

    /// Set the root folder of a project.
    pub fn with_root_folder(mut self, project_id: &str, folder_id: &str) -> Self {
        self.root_folders
            .insert(project_id.to_string(), folder_id.to_string());
        self
    }

    /// Accept a public token in the link exchange.
    pub fn with_public_token(mut self, public_token: &str, account_token: &str) -> Self {
        self.public_tokens
            .insert(public_token.to_string(), account_token.to_string());
        self
    }

    /// Set the required account token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// All records of a resource.
    pub fn list_records(&self, resource: &str) -> &[Record] {
        self.records.get(resource).map(Vec::as_slice).unwrap_or(&[])
    }

    /// A record of a resource by ID.
    pub fn get_record(&self, resource: &str, id: &str) -> Option<&Record> {
        self.list_records(resource)
            .iter()
            .find(|r| record_id(r).as_deref() == Some(id))
    }

    /// Get a folder by ID.
    pub fn get_folder(&self, id: &str) -> Option<&Record> {
        self.folders.get(id)
    }

    /// Get the root folder of a project.
    pub fn get_root_folder(&self, project_id: &str) -> Option<&Record> {
        self.root_folders
            .get(project_id)
            .and_then(|id| self.folders.get(id))
    }

    /// Get a file by ID.
    pub fn get_file(&self, id: &str) -> Option<&Record> {
        self.files.get(id)
    }

    /// Files directly inside a folder.
    pub fn folder_files(&self, id: &str) -> Option<Vec<Record>> {
        let folder = self.folders.get(id)?;
        Some(
            folder
                .get(FILES_KEY)
                .and_then(Record::as_array)
                .cloned()
                .unwrap_or_default(),
        )
    }
}

//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use serde_json::json;

use super::state::MockState;
use crate::Record;

/// Project id used by the default scenario.
pub const DEFAULT_PROJECT_ID: &str = "proj-1";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// A record with an id and a name.
    pub fn record(id: &str, name: &str) -> Record {
        json!({ "id": id, "name": name })
    }

    /// A file record.
    pub fn file(id: &str, name: &str) -> Record {
        json!({ "id": id, "name": name, "source_data": null })
    }

    /// A folder record as returned by the folder endpoint: stubs for the
    /// direct subfolders and the files inside.
    pub fn folder(id: &str, name: &str, subfolders: &[(&str, &str)], files: Vec<Record>) -> Record {
        let folders: Vec<Record> = subfolders
            .iter()
            .map(|(sub_id, sub_name)| json!({ "id": sub_id, "name": sub_name }))
            .collect();
        json!({
            "id": id,
            "name": name,
            "folders": folders,
            "files": files,
        })
    }

    /// The default scenario: one populated project with a three-level folder tree.
    ///
    /// ```text
    /// Project Files/           (root-1)
    ///   Documents/             (docs)
    ///     Archive/             (docs-archive)
    ///   Plans/                 (plans)
    ///     Architectural/       (plans-arch)
    /// ```
    ///
    /// Every folder holds one file.
    pub fn default_state() -> MockState {
        MockState::new()
            .with_record(
                "projects",
                json!({ "id": DEFAULT_PROJECT_ID, "name": "Tower A", "status": "active" }),
            )
            .with_record(
                "projects",
                json!({ "id": "proj-2", "name": "Warehouse Retrofit", "status": "closed" }),
            )
            .with_record(
                "rfis",
                json!({ "id": "rfi-1", "number": "1", "subject": "Door hardware substitution" }),
            )
            .with_record(
                "rfis",
                json!({ "id": "rfi-2", "number": "2", "subject": "Slab edge detail" }),
            )
            .with_record(
                "submittals",
                json!({ "id": "sub-1", "number": "08 71 00-1", "name": "Door hardware" }),
            )
            .with_record(
                "specification-sections",
                json!({ "id": "spec-1", "number": "08 71 00", "name": "Door Hardware" }),
            )
            .with_record("contacts", json!({ "id": "contact-1", "name": "Dana Ortiz" }))
            .with_record("contacts", json!({ "id": "contact-2", "name": "Sam Lee" }))
            .with_record("vendors", Self::record("vendor-1", "Acme Glazing"))
            .with_record(
                "drawings",
                json!({ "id": "drawing-1", "number": "A-101", "name": "Ground Floor Plan" }),
            )
            .with_drawing_versions(
                "drawing-1",
                vec![
                    json!({ "id": "dv-1", "drawing_id": "drawing-1", "revision": "0" }),
                    json!({ "id": "dv-2", "drawing_id": "drawing-1", "revision": "1" }),
                ],
            )
            .with_folder(Self::folder(
                "root-1",
                "Project Files",
                &[("docs", "Documents"), ("plans", "Plans")],
                vec![Self::file("file-readme", "README.pdf")],
            ))
            .with_folder(Self::folder(
                "docs",
                "Documents",
                &[("docs-archive", "Archive")],
                vec![Self::file("file-contract", "Contract.pdf")],
            ))
            .with_folder(Self::folder(
                "docs-archive",
                "Archive",
                &[],
                vec![Self::file("file-old", "Old Contract.pdf")],
            ))
            .with_folder(Self::folder(
                "plans",
                "Plans",
                &[("plans-arch", "Architectural")],
                vec![Self::file("file-site", "Site Plan.pdf")],
            ))
            .with_folder(Self::folder(
                "plans-arch",
                "Architectural",
                &[],
                vec![Self::file("file-a101", "A-101.pdf")],
            ))
            .with_root_folder(DEFAULT_PROJECT_ID, "root-1")
            .with_public_token("pub-tok", "acct-linked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_consistent() {
        let state = Fixtures::default_state();

        let root = state.get_root_folder(DEFAULT_PROJECT_ID).unwrap();
        for stub in root["folders"].as_array().unwrap() {
            let id = stub["id"].as_str().unwrap();
            assert!(state.get_folder(id).is_some(), "missing folder {id}");
        }
        assert_eq!(state.files.len(), 5);
    }
}

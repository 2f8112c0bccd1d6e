use crate::test::snapshot_tests::DocumentSnapshotTestCase;
use crate::test::snapshot_tests::utils;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// A fixture schema plus the documents to build against it
#[derive(Debug, Clone)]
pub struct SnapshotTestSuite {
    pub name: String,
    pub schema_paths: Vec<PathBuf>,
    pub valid_documents: Vec<DocumentSnapshotTestCase>,
    pub invalid_documents: Vec<DocumentSnapshotTestCase>,
}

impl SnapshotTestSuite {
    /// Discovers every suite directory under the fixtures directory
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(fixtures_dir) else {
            return Vec::new();
        };

        let mut suites: Vec<Self> =
            entries
                .filter_map(|entry| {
                    let path = entry.ok()?.path();
                    if !path.is_dir() {
                        return None;
                    }

                    let name = path.file_name()?.to_str()?.to_string();
                    let Some(schema_paths) = Self::discover_schema_files(&path) else {
                        eprintln!("ERROR: Suite directory without a schema: {}", path.display());
                        eprintln!("       Add a schema.graphql or *.schema.graphql file.");
                        return None;
                    };

                    Some(Self {
                        name,
                        schema_paths,
                        valid_documents: Self::discover_documents(&path.join("valid_documents")),
                        invalid_documents: Self::discover_documents(&path.join("invalid_documents")),
                    })
                })
                .collect();

        suites.sort_by(|a, b| a.name.cmp(&b.name));
        suites
    }

    /// Discovers schema files in a directory
    /// Returns schema.graphql AND any *.schema.graphql files
    fn discover_schema_files(dir: &Path) -> Option<Vec<PathBuf>> {
        let mut schema_files = Vec::new();

        let Ok(entries) = fs::read_dir(dir) else {
            return None;
        };
        for entry in entries.flatten() {
            let path = entry.path();

            if path.is_file()
                && let Some(file_name) = path.file_name().and_then(|n| n.to_str())
                && (file_name.eq_ignore_ascii_case("schema.graphql")
                    || utils::ends_with_ignore_case(file_name, ".schema.graphql"))
            {
                schema_files.push(path);
            }
        }

        if schema_files.is_empty() {
            None
        } else {
            schema_files.sort();
            Some(schema_files)
        }
    }

    /// Discovers document files in a directory. `.disabled` files are
    /// skipped.
    fn discover_documents(dir: &Path) -> Vec<DocumentSnapshotTestCase> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };

        let mut documents: Vec<_> =
            entries
                .filter_map(|entry| {
                    let path = entry.ok()?.path();
                    if !path.is_file() {
                        return None;
                    }

                    if utils::extension_matches_ignore_case(&path, "graphql") {
                        let expected_messages =
                            DocumentSnapshotTestCase::parse_expected_messages(&path);
                        return Some(DocumentSnapshotTestCase {
                            path,
                            expected_messages,
                        });
                    }

                    if !utils::extension_matches_ignore_case(&path, "disabled") {
                        eprintln!("ERROR: Unexpected file in documents directory: {}", path.display());
                        eprintln!("       Only .graphql and .disabled files are allowed.");
                    }
                    None
                })
                .collect();

        documents.sort_by(|a, b| a.path.cmp(&b.path));
        documents
    }
}

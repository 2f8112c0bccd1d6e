use crate::DocumentBuilder;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::test::snapshot_tests::DocumentSnapshotTestCase;
use crate::test::snapshot_tests::snapshot_test_suite::SnapshotTestSuite;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::path::PathBuf;

/// Result of a single snapshot test
#[derive(Debug)]
pub struct SnapshotTestResult {
    pub test_name: String,
    pub passed: bool,
    pub error_message: Option<String>,
    pub file_path: PathBuf,
}

/// Collection of snapshot test results
#[derive(Debug, Default)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}

impl SnapshotTestResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| format_detailed_failure(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} snapshot tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let all_passed = self.all_passed();
        let emoji = if all_passed { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");
        let header = format!("{emoji} DOCUMENT SNAPSHOT SUMMARY");
        let total = self.results.len();
        let failed = self.results.iter().filter(|r| !r.passed).count();
        let passed = total - failed;

        format!("{banner}\n{header}\n{banner}\nTotal tests: {total}\nPassed: {passed}\nFailed: {failed}\n{banner}")
    }
}

/// Format a detailed failure message with file path and message listing
fn format_detailed_failure(result: &SnapshotTestResult) -> String {
    let mut output = String::new();
    let test_name = &result.test_name;
    let file_path = result.file_path.display();

    output.push_str(&format!("❌ {test_name}\n"));
    output.push_str(&format!("   File: {file_path}\n"));
    if let Some(msg) = &result.error_message {
        output.push_str(&format!("   {msg}\n"));
    }

    output
}

/// Run every document in every fixture suite.
pub fn run_document_tests(fixtures_dir: &std::path::Path) -> SnapshotTestResults {
    let mut results = SnapshotTestResults::default();

    for suite in SnapshotTestSuite::discover_all(fixtures_dir) {
        let schema = match build_suite_schema(&suite) {
            Ok(schema) => schema,
            Err(error_message) => {
                results.results.push(SnapshotTestResult {
                    test_name: format!("{}/schema", suite.name),
                    passed: false,
                    error_message: Some(error_message),
                    file_path: suite.schema_paths[0].clone(),
                });
                continue;
            },
        };

        let valid: Vec<_> =
            suite.valid_documents
                .par_iter()
                .map(|test_case| test_document(&suite.name, &schema, test_case, true))
                .collect();
        let invalid: Vec<_> =
            suite.invalid_documents
                .par_iter()
                .map(|test_case| test_document(&suite.name, &schema, test_case, false))
                .collect();

        results.results.extend(valid);
        results.results.extend(invalid);
    }

    results
}

fn build_suite_schema(suite: &SnapshotTestSuite) -> Result<Schema, String> {
    SchemaBuilder::new()
        .load_files(suite.schema_paths.clone())
        .and_then(|builder| builder.build())
        .map_err(|err| format!("Expected: Valid schema\nGot: {err}"))
}

fn test_document(
    suite_name: &str,
    schema: &Schema,
    test_case: &DocumentSnapshotTestCase,
    expect_valid: bool,
) -> SnapshotTestResult {
    let file_name =
        test_case.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("<unnamed>");
    let category = if expect_valid { "valid_documents" } else { "invalid_documents" };
    let test_name = format!("{suite_name}/{category}/{file_name}");

    let built = match DocumentBuilder::new(schema).build_from_file(&test_case.path) {
        Ok(built) => built,
        Err(err) => {
            return SnapshotTestResult {
                test_name,
                passed: false,
                error_message: Some(format!("Could not build document: {err}")),
                file_path: test_case.path.clone(),
            };
        },
    };

    let actual_messages =
        built.messages
            .iter()
            .map(|msg| format!("  - {msg}"))
            .collect::<Vec<_>>()
            .join("\n");

    let error_message =
        if expect_valid {
            (!built.messages.is_success()).then(|| format!(
                "Expected: Valid document\nGot:\n{actual_messages}",
            ))
        } else if built.messages.is_success() {
            Some("Expected: Should fail validation\nGot: No critical messages (false negative!)".to_string())
        } else {
            let unmatched = test_case.unmatched_patterns(&built.messages);
            (!unmatched.is_empty()).then(|| {
                let unmatched_list =
                    unmatched
                        .iter()
                        .map(|pattern| format!("  ✗ {pattern}"))
                        .collect::<Vec<_>>()
                        .join("\n");
                format!(
                    "Expected: All message patterns must match\n\nUnmatched patterns:\n\
                    {unmatched_list}\n\nActual messages:\n{actual_messages}",
                )
            })
        };

    SnapshotTestResult {
        test_name,
        passed: error_message.is_none(),
        error_message,
        file_path: test_case.path.clone(),
    }
}

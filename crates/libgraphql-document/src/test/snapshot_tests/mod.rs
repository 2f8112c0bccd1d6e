//! File-based tests that build known-good and known-bad executable
//! documents against fixture schemas.
//!
//! See the [README](snapshot_tests/fixtures/README.md) for the fixture
//! layout.

mod document_snapshot_test_case;
mod expected_message_pattern;
mod snapshot_test_suite;
mod test_runner;
mod utils;

pub use document_snapshot_test_case::DocumentSnapshotTestCase;
pub use expected_message_pattern::ExpectedMessagePattern;

mod tests {
    use crate::test::snapshot_tests::test_runner;
    use crate::test::snapshot_tests::utils;

    #[test]
    fn verify_document_snapshot_tests() {
        let fixtures_dir = utils::get_fixtures_dir();
        let results = test_runner::run_document_tests(fixtures_dir);

        if !results.all_passed() {
            eprintln!("{}", results.failure_report());
            eprintln!("\n{}", results.summary());
        } else {
            println!("{}", results.summary());
        }

        assert!(
            !results.results.is_empty(),
            "No snapshot fixtures found under {}",
            fixtures_dir.display(),
        );
        assert!(
            results.all_passed(),
            "Document snapshot tests failed:\n{}",
            results.failure_report()
        );
    }
}

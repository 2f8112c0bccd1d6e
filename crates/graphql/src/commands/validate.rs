use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_document::DocumentBuilder;
use libgraphql_document::messages::MessageSeverity;
use libgraphql_document::schema::Schema;
use libgraphql_document::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="Fail when any document produces a warning, not only when one \
             produces a critical message.",
        long,
    )]
    deny_warnings: bool,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="One or more schema files that together define the schema every \
             document is validated against.",
        long="schema",
        name="SCHEMA_FILE",
        num_args=1..,
        required=true,
    )]
    schema_paths: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more executable GraphQL documents or \
             directories containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What building one document produced. Owns everything it reports so it
/// can outlive the blocking task that built the document.
#[derive(Debug)]
struct DocumentReport {
    file_path: PathBuf,
    messages: Vec<String>,
    num_fragments: usize,
    num_operations: usize,
    severity: Option<MessageSeverity>,
}

/// Documents found beneath the paths passed on the command line.
#[derive(Debug, Default)]
struct DocumentScan {
    errors: Vec<anyhow::Error>,
    file_paths: Vec<PathBuf>,
    num_skipped_files: usize,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect();

        let schema = match build_schema(&self.schema_paths) {
            Ok(schema) => Arc::new(schema),
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors building schema: {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Built schema with {} types and {} directives.",
            schema.all_types().len(),
            schema.all_directives().len(),
        );

        let scan = find_documents(
            &self.file_or_dir_paths,
            &graphql_file_exts,
            &self.schema_paths,
        );
        log::debug!(
            "Found {} GraphQL documents to be validated.",
            scan.file_paths.len(),
        );

        let mut errors = scan.errors;
        let handles: Vec<_> =
            scan.file_paths.into_iter()
                .map(|file_path| {
                    let schema = Arc::clone(&schema);
                    tokio::task::spawn_blocking(move || {
                        validate_document(&schema, file_path)
                    })
                })
                .collect();

        let mut reports = vec![];
        for handle in handles {
            match handle.await {
                Ok(Ok(report)) => reports.push(report),
                Ok(Err(err)) => errors.push(err),
                Err(join_err) => errors.push(
                    anyhow::Error::new(join_err).context("Document validation task failed"),
                ),
            }
        }

        let output = format_reports(&reports, &errors, scan.num_skipped_files);
        let failed =
            !errors.is_empty()
                || reports.iter().any(|report| match report.severity {
                    Some(MessageSeverity::Critical) => true,
                    Some(MessageSeverity::Warning) => self.deny_warnings,
                    _ => false,
                });

        if failed {
            CommandResult::stdout(format_args!("{output}")).with_failure()
        } else {
            CommandResult::stdout(format_args!("{output}"))
        }
    }
}

fn build_schema(schema_paths: &[PathBuf]) -> anyhow::Result<Schema> {
    let schema =
        SchemaBuilder::new()
            .load_files(schema_paths.to_vec())
            .context("Failed to load schema files")?
            .build()
            .context("Failed to build schema")?;
    Ok(schema)
}

fn find_documents(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
    schema_paths: &[PathBuf],
) -> DocumentScan {
    let mut scan = DocumentScan::default();
    let schema_paths: HashSet<PathBuf> =
        schema_paths.iter()
            .filter_map(|path| std::fs::canonicalize(path).ok())
            .collect();

    // Find all GraphQL files recursively located at or under each path
    // passed as an arg.
    log::debug!("Scanning {} input paths...", paths.len());
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    scan.errors.push(err.into());
                    continue
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let has_graphql_ext =
                entry_path.extension()
                    .map(|ext| ext.to_string_lossy().to_lowercase())
                    .is_some_and(|ext| graphql_file_exts.contains(&ext));
            if !has_graphql_ext {
                log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                scan.num_skipped_files += 1;
                continue;
            }

            match std::fs::canonicalize(entry_path) {
                Ok(canonical) if schema_paths.contains(&canonical) => {
                    log::trace!("Skipping schema file: {entry_path:#?}.");
                },
                Ok(canonical) => scan.file_paths.push(canonical),
                Err(err) => scan.errors.push(
                    anyhow::Error::new(err)
                        .context(format!("Failed to resolve {}", entry_path.display())),
                ),
            }
        }
    }

    // If the user specifies a single file path as an argument, presume the
    // user explicitly wants that file validated as a GraphQL document, even
    // if its file extension doesn't match one of the `--graphql-file-exts`.
    if scan.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file()
        && let Ok(canonical) = std::fs::canonicalize(first_arg_path) {
        log::warn!(
            "Proceeding to validate {canonical:#?} even though it doesn't \
            match any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        scan.num_skipped_files = scan.num_skipped_files.saturating_sub(1);
        scan.file_paths.push(canonical);
    }

    scan.file_paths.sort();
    scan.file_paths.dedup();
    scan
}

fn validate_document(schema: &Schema, file_path: PathBuf) -> anyhow::Result<DocumentReport> {
    log::trace!("Validating {file_path:#?}.");
    let built =
        DocumentBuilder::new(schema)
            .build_from_file(&file_path)
            .with_context(|| format!("Failed to build {}", file_path.display()))?;
    log::debug!(
        "Validated {file_path:#?}: {} message(s).",
        built.messages.len(),
    );

    Ok(DocumentReport {
        messages: built.messages.iter().map(|msg| msg.to_string()).collect(),
        num_fragments: built.document.all_named_fragments().len(),
        num_operations: built.document.all_operations().len(),
        severity: built.messages.severity(),
        file_path,
    })
}

fn format_reports(
    reports: &[DocumentReport],
    errors: &[anyhow::Error],
    num_skipped_files: usize,
) -> String {
    let mut output = String::new();

    for report in reports.iter().filter(|report| !report.messages.is_empty()) {
        let icon = match report.severity {
            Some(MessageSeverity::Critical) => output_utils::RED_X,
            _ => output_utils::WARNING_SIGN,
        };
        output.push_str(&format!("{icon} {}:\n", display_path(&report.file_path)));
        for message in &report.messages {
            output.push_str(&format!("  - {message}\n"));
        }
    }

    for err in errors {
        output.push_str(&format!("{} {err:#}\n", output_utils::RED_X));
    }

    let num_failed =
        reports.iter()
            .filter(|report| report.severity == Some(MessageSeverity::Critical))
            .count();
    let icon =
        if num_failed == 0 && errors.is_empty() {
            output_utils::GREEN_CHECK
        } else {
            output_utils::RED_X
        };
    output.push_str(&format!(
        concat!(
            "{} Validated {}:\n",
            "  * {} and {}.\n",
            "  * {} failed validation.\n",
            "  * Skipped {}.",
        ),
        icon,
        output_utils::plural(reports.len(), "document"),
        output_utils::plural(reports.iter().map(|r| r.num_operations).sum(), "operation"),
        output_utils::plural(reports.iter().map(|r| r.num_fragments).sum(), "fragment"),
        output_utils::plural(num_failed, "document"),
        output_utils::plural(num_skipped_files, "non-graphql file"),
    ));

    output
}

fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(severity: Option<MessageSeverity>, messages: &[&str]) -> DocumentReport {
        DocumentReport {
            file_path: PathBuf::from("/tmp/doc.graphql"),
            messages: messages.iter().map(|msg| msg.to_string()).collect(),
            num_fragments: 1,
            num_operations: 2,
            severity,
        }
    }

    #[test]
    fn summary_counts_documents_operations_and_fragments() {
        let output = format_reports(&[report(None, &[]), report(None, &[])], &[], 1);

        assert!(output.starts_with(output_utils::GREEN_CHECK));
        assert!(output.contains("Validated 2 documents"));
        assert!(output.contains("4 operations and 2 fragments"));
        assert!(output.contains("0 documents failed validation"));
        assert!(output.contains("Skipped 1 non-graphql file."));
    }

    #[test]
    fn failed_documents_list_their_messages() {
        let output = format_reports(
            &[report(Some(MessageSeverity::Critical), &["critical [5.3.1]: Cannot query field"])],
            &[],
            0,
        );

        assert!(output.contains("  - critical [5.3.1]: Cannot query field\n"));
        assert!(output.contains("1 document failed validation"));
        assert!(output.lines().last().is_some_and(|line| line.contains("Skipped 0")));
        assert!(output.contains(&format!("{} Validated 1 document", output_utils::RED_X)));
    }
}

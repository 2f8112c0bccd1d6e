mod document_builder_tests;
mod snapshot_tests;

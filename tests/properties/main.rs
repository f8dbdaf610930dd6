//! Property test suite entry point.

mod classify_tests;
mod ingest_tests;

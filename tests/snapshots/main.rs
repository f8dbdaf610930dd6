//! Snapshot test suite entry point.

mod error_messages;
mod human_output;

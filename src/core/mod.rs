//! Core title logic: hierarchy levels, the free-text classifier and the
//! title composer. Everything here is pure and safe to call from any thread.

pub mod classify;
pub mod compose;
pub mod level;

pub use classify::{Classification, classify, classify_explained};
pub use compose::compose;
pub use level::HierarchyLevel;

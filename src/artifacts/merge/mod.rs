//! Merge algorithms
//!
//! - `lca_finder`: ancestor sets and split-point discovery
//! - `three_way`: per-file classification against the split point
//! - `conflict`: conflict-marker synthesis

pub mod conflict;
pub mod lca_finder;
pub mod three_way;

//! Domain types and algorithms
//!
//! - `branch`: branch-name validation
//! - `checkout`: whole-commit checkout planning
//! - `core`: user-facing error taxonomy
//! - `index`: staging area file format
//! - `log`: history traversal and log formatting
//! - `merge`: split-point discovery, three-way classification, conflict markers
//! - `objects`: object ids, blobs and commits
//! - `status`: working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;

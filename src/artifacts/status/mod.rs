//! Working tree status inspection
//!
//! Compares the working tree against the head commit and the staging area.
//!
//! ## Components
//!
//! - `file_change`: how a working-tree file differs from what is expected
//! - `inspector`: per-file checks shared by `status`, `checkout` and `merge`
//! - `status_info`: the report printed by `status`

pub mod file_change;
pub mod inspector;
pub mod status_info;

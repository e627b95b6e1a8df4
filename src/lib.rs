//! A small local version-control system
//!
//! Snapshots of a working tree are recorded as commits in a content-addressed
//! object store under `.gitlet`, with named branches, a staging area, and
//! three-way merges.

pub mod areas;
pub mod artifacts;
pub mod commands;

//! Persistent repository areas
//!
//! - `database`: content-addressed object store for blobs and commits
//! - `index`: staging area (pending additions and removals)
//! - `refs`: branch refs and HEAD
//! - `repository`: aggregate owning every area plus the console writer
//! - `workspace`: working tree file operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;

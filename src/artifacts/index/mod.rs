//! Staging area file format
//!
//! The staging area records files staged for addition and files staged for
//! removal until the next commit clears it.
//!
//! ## File Format (Version 1)
//!
//! ```text
//! Header (16 bytes):
//!   - Signature: "GIDX" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Addition count (4 bytes)
//!   - Removal count (4 bytes)
//!
//! Entries (variable length), additions first, each in path order:
//!   - Kind: 0 = addition, 1 = removal (1 byte)
//!   - Blob id (20 bytes)
//!   - Path length (2 bytes)
//!   - Path (UTF-8)
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! All integers are big-endian. A missing or empty file is an empty staging
//! area.

pub mod checksum;
pub mod index_entry;
pub mod index_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of the staging area header in bytes
pub const HEADER_SIZE: usize = 16;

/// Magic signature identifying staging area files
pub const SIGNATURE: &str = "GIDX";

/// Staging area file format version
pub const VERSION: u32 = 1;

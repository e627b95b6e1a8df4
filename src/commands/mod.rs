//! Command implementations
//!
//! `porcelain` holds one file per command line operation; every command is a
//! method on `Repository`.

pub mod porcelain;

//! User-facing commands
//!
//! Each command is an `impl Repository` block in its own file. Commands that
//! read or change the staging area lock the shared index, rehydrate it from
//! disk, and write it back before returning.
//!
//! ## Commands
//!
//! - `init`: Create the repository with its root commit
//! - `add`, `rm`: Stage a file for addition or removal
//! - `commit`: Record the staging area as a new commit
//! - `log`, `global-log`, `find`: Report commit history
//! - `status`: Report branches, staged changes and working tree state
//! - `checkout`: Restore a file, or switch branches
//! - `branch`, `rm-branch`: Create or delete branch refs
//! - `reset`: Move the active branch to any commit
//! - `merge`: Three-way merge of another branch into the active one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod global_log;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod rm_branch;
pub mod status;

//! Commit history traversal
//!
//! - `rev_list`: first-parent history from a commit down to the root
//! - `graph_walk`: every commit reachable from a set of heads
//! - `log_entry`: the block printed for one commit by `log` and `global-log`

pub mod graph_walk;
pub mod log_entry;
pub mod rev_list;

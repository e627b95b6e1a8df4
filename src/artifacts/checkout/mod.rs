//! Whole-commit checkout
//!
//! Moving the working tree from one commit to another is planned first and
//! applied second, so a file that would be clobbered is reported before the
//! working tree is touched.

pub mod migration;

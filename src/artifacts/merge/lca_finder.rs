//! Split-point discovery for merges
//!
//! The split point of two branch heads is found by walking breadth-first from
//! the current head, following every parent in the order the parents are
//! recorded, and stopping at the first commit that is also an ancestor of the
//! target head.
//!
//! When several common ancestors sit at the same distance (criss-cross
//! histories), the one discovered first wins. The result is deterministic but
//! not guaranteed to be the unique lowest common ancestor.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let cache = CommitCache::new();
//! let finder = LcaFinder::new(|oid| cache.get_or_load_slim_commit(database, oid));
//!
//! let split_point = finder.find_lowest_common_ancestor(&current_head, &target_head)?;
//! ```

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// Walks the commit graph through a commit loader
///
/// The loader abstracts where commits come from (the object store, or an
/// in-memory graph in tests); it is expected to fail for unknown ids.
pub struct LcaFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> LcaFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Every commit reachable from `start` through any parent, `start` included
    pub fn ancestors(&self, start: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        let mut visited = HashSet::new();

        self.walk_breadth_first(start, |oid| {
            visited.insert(oid.clone());
            false
        })?;

        Ok(visited)
    }

    /// Whether `ancestor` is reachable from `descendant` (a commit is its own ancestor)
    pub fn is_ancestor(
        &self,
        ancestor: &ObjectId,
        descendant: &ObjectId,
    ) -> anyhow::Result<bool> {
        let found = self.walk_breadth_first(descendant, |oid| oid == ancestor)?;

        Ok(found.is_some())
    }

    /// Split point of two commits, or None when their histories are disjoint
    pub fn find_lowest_common_ancestor(
        &self,
        current: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let target_ancestors = self.ancestors(target)?;

        let split_point = self.walk_breadth_first(current, |oid| target_ancestors.contains(oid))?;
        debug!(
            current = %current,
            target = %target,
            split_point = ?split_point.as_ref().map(ObjectId::to_short_oid),
            "found split point"
        );

        Ok(split_point)
    }

    /// Visit commits breadth-first from `start`, each once, until `stop` holds
    ///
    /// Returns the commit `stop` held for, if any.
    fn walk_breadth_first(
        &self,
        start: &ObjectId,
        mut stop: impl FnMut(&ObjectId) -> bool,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut queue = VecDeque::from([start.clone()]);
        let mut seen = HashSet::from([start.clone()]);

        while let Some(commit_id) = queue.pop_front() {
            trace!(commit = %commit_id, "visiting commit");

            if stop(&commit_id) {
                return Ok(Some(commit_id));
            }

            let commit = (self.commit_loader)(&commit_id)?;
            for parent_id in commit.parents {
                if seen.insert(parent_id.clone()) {
                    queue.push_back(parent_id);
                }
            }
        }

        Ok(None)
    }
}

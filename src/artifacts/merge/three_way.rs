//! File-level three-way merge
//!
//! Every path tracked by the split point, the current head or the target head
//! is classified by comparing each side's blob id with the split point's:
//!
//! | current vs split | target vs split | action |
//! |---|---|---|
//! | unchanged | unchanged | keep |
//! | unchanged | changed | take target (remove if deleted) |
//! | changed | unchanged | keep |
//! | changed | changed, same result | keep |
//! | changed | changed, different results | conflict |
//!
//! A missing side counts as a change when the split point tracked the path.

use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// The current version already is the merge result
    Keep,
    /// Check out and stage the target's version
    TakeTarget(ObjectId),
    /// The target deleted a file the current side left alone
    Remove,
    /// Both sides changed the file in different ways
    Conflict {
        current: Option<ObjectId>,
        target: Option<ObjectId>,
    },
}

/// Decide what happens to one path
pub fn classify(
    split: Option<&ObjectId>,
    current: Option<&ObjectId>,
    target: Option<&ObjectId>,
) -> MergeAction {
    if current == target || target == split {
        return MergeAction::Keep;
    }

    if current == split {
        return match target {
            Some(oid) => MergeAction::TakeTarget(oid.clone()),
            None => MergeAction::Remove,
        };
    }

    MergeAction::Conflict {
        current: current.cloned(),
        target: target.cloned(),
    }
}

/// Actions for every path that does not simply keep the current version,
/// in path order
pub fn plan_merge(
    split: &TrackedFiles,
    current: &TrackedFiles,
    target: &TrackedFiles,
) -> BTreeMap<PathBuf, MergeAction> {
    let paths = split
        .keys()
        .chain(current.keys())
        .chain(target.keys())
        .collect::<BTreeSet<_>>();

    paths
        .into_iter()
        .filter_map(|path| {
            let action = classify(split.get(path), current.get(path), target.get(path));
            trace!(path = %path.display(), ?action, "classified path");

            (action != MergeAction::Keep).then(|| (path.clone(), action))
        })
        .collect()
}

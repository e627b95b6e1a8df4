use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, VecDeque};
use tracing::debug;

/// Every commit reachable from `heads` through any parent, keyed (and so
/// ordered) by commit id
pub fn reachable_commits<'h>(
    database: &Database,
    heads: impl IntoIterator<Item = &'h ObjectId>,
) -> anyhow::Result<BTreeMap<ObjectId, Commit>> {
    let mut commits = BTreeMap::new();
    let mut queue = heads.into_iter().cloned().collect::<VecDeque<_>>();

    while let Some(commit_oid) = queue.pop_front() {
        if commits.contains_key(&commit_oid) {
            continue;
        }

        let commit = database.parse_object_as_commit(&commit_oid)?;
        queue.extend(commit.parents().iter().cloned());
        commits.insert(commit_oid, commit);
    }
    debug!(count = commits.len(), "walked commit graph");

    Ok(commits)
}

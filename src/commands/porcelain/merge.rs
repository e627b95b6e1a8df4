use crate::areas::database::CommitCache;
use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::user_error::UserError;
use crate::artifacts::merge::conflict::conflict_content;
use crate::artifacts::merge::lca_finder::LcaFinder;
use crate::artifacts::merge::three_way::{MergeAction, plan_merge};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::inspector::Inspector;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use tracing::debug;

const ANCESTOR_NOTICE: &str = "Given branch is an ancestor of the current branch.";
const FAST_FORWARD_NOTICE: &str = "Current branch fast-forwarded.";
const CONFLICT_NOTICE: &str = "Encountered a merge conflict.";

impl Repository {
    pub async fn merge(&mut self, target: &str) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        if !index.is_empty() {
            return Err(UserError::UncommittedChanges.into());
        }

        let target_branch =
            BranchName::try_parse(target.to_string()).map_err(|_| UserError::BranchNotFound)?;
        let target_oid = self
            .refs()
            .read_ref(&target_branch)?
            .ok_or(UserError::BranchNotFound)?;

        let current_branch = self.refs().current_branch()?;
        if current_branch == target_branch {
            return Err(UserError::CannotMergeSelf.into());
        }

        let (head_oid, head) = self.head_commit()?;

        // Find the split point
        let commit_cache = CommitCache::new();
        let database = self.database();
        let lca_finder = LcaFinder::new(|oid| commit_cache.get_or_load_slim_commit(database, oid));

        if lca_finder.is_ancestor(&target_oid, &head_oid)? {
            writeln!(self.writer(), "{ANCESTOR_NOTICE}")?;
            return Ok(());
        }

        if lca_finder.is_ancestor(&head_oid, &target_oid)? {
            self.migrate_to(&mut index, &target_oid)?;
            self.refs().update_head(target_oid)?;
            writeln!(self.writer(), "{FAST_FORWARD_NOTICE}")?;
            return Ok(());
        }

        let split_oid = lca_finder
            .find_lowest_common_ancestor(&head_oid, &target_oid)?
            .with_context(|| format!("{current_branch} and {target_branch} share no history"))?;
        let split = self.database().parse_object_as_commit(&split_oid)?;
        let target_commit = self.database().parse_object_as_commit(&target_oid)?;

        let inspector = Inspector::new(self);
        let untracked = target_commit
            .tracked_files()
            .keys()
            .filter(|path| inspector.is_untracked(path, head.tracked_files(), &index))
            .collect::<Vec<_>>();
        if !untracked.is_empty() {
            debug!(paths = ?untracked, "untracked files would be overwritten by merge");
            return Err(UserError::UntrackedFileInTheWay.into());
        }

        let conflicted = self.apply_merge(&mut index, &split, &head, &target_commit)?;

        let tracked_files = index.apply_to(head.tracked_files());
        index.clear();
        index.write_updates()?;

        let message = format!("Merged {target_branch} into {current_branch}.");
        self.write_commit(vec![head_oid, target_oid], message, tracked_files)?;

        if conflicted {
            writeln!(self.writer(), "{CONFLICT_NOTICE}")?;
        }

        Ok(())
    }

    /// Write every merged path to the working tree and stage it
    ///
    /// Returns whether any path ended in a conflict.
    fn apply_merge(
        &self,
        index: &mut Index,
        split: &Commit,
        head: &Commit,
        target: &Commit,
    ) -> anyhow::Result<bool> {
        let plan = plan_merge(split.tracked_files(), head.tracked_files(), target.tracked_files());
        let mut conflicted = false;

        for (path, action) in plan {
            match action {
                MergeAction::Keep => {}
                MergeAction::TakeTarget(blob_oid) => {
                    let blob = self.database().parse_object_as_blob(&blob_oid)?;
                    self.workspace().write_file(&path, blob.content())?;
                    index.stage_addition(path, blob_oid, head.tracked_files());
                }
                MergeAction::Remove => {
                    if let Some(blob_oid) = head.blob_for(&path).cloned() {
                        self.workspace().remove_file(&path)?;
                        index.stage_removal(path, blob_oid);
                    }
                }
                MergeAction::Conflict { current, target } => {
                    let content = conflict_content(
                        self.load_blob_content(current.as_ref())?.as_deref(),
                        self.load_blob_content(target.as_ref())?.as_deref(),
                    );
                    self.workspace().write_file(&path, &content)?;

                    let blob_oid = self.database().store(&Blob::new(content))?;
                    index.stage_addition(path.clone(), blob_oid, head.tracked_files());

                    debug!(path = %path.display(), "merge conflict");
                    conflicted = true;
                }
            }
        }

        Ok(conflicted)
    }

    fn load_blob_content(&self, blob_oid: Option<&ObjectId>) -> anyhow::Result<Option<Bytes>> {
        blob_oid
            .map(|oid| {
                self.database()
                    .parse_object_as_blob(oid)
                    .map(|blob| blob.into_content())
            })
            .transpose()
    }
}

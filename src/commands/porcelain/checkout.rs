use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::user_error::UserError;
use crate::artifacts::objects::object_id::ObjectId;
use tracing::debug;

impl Repository {
    /// Restore one file from a commit (the head commit when no id is given)
    ///
    /// The staging area is left untouched.
    pub async fn checkout_file(&mut self, commit_id: Option<&str>, file: &str) -> anyhow::Result<()> {
        let commit_oid = match commit_id {
            Some(prefix) => self.resolve_commit_id(prefix)?,
            None => self.refs().read_head()?,
        };
        let commit = self.database().parse_object_as_commit(&commit_oid)?;

        let path = Workspace::normalize_path(file);
        let blob_oid = commit.blob_for(&path).ok_or(UserError::FileNotInCommit)?;
        let blob = self.database().parse_object_as_blob(blob_oid)?;

        self.workspace().write_file(&path, blob.content())?;
        debug!(path = %path.display(), commit = %commit_oid, "restored file");

        Ok(())
    }

    pub async fn checkout_branch(&mut self, branch: &str) -> anyhow::Result<()> {
        let branch_name =
            BranchName::try_parse(branch.to_string()).map_err(|_| UserError::NoSuchBranch)?;
        let target_oid = self
            .refs()
            .read_ref(&branch_name)?
            .ok_or(UserError::NoSuchBranch)?;

        if self.refs().is_current_branch(&branch_name)? {
            return Err(UserError::AlreadyOnBranch.into());
        }

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        self.migrate_to(&mut index, &target_oid)?;
        self.refs().set_head(&branch_name)?;

        Ok(())
    }

    /// Replace the working tree's tracked files with those of `target_oid` and
    /// clear the staging area
    ///
    /// Refs are not touched; callers move the branch or HEAD themselves.
    pub(crate) fn migrate_to(&self, index: &mut Index, target_oid: &ObjectId) -> anyhow::Result<()> {
        let (head_oid, head) = self.head_commit()?;
        let target = self.database().parse_object_as_commit(target_oid)?;

        Migration::new(self, index, head.tracked_files(), target.tracked_files())
            .apply_changes()?;
        index.write_updates()?;
        debug!(from = %head_oid, to = %target_oid, "migrated working tree");

        Ok(())
    }
}

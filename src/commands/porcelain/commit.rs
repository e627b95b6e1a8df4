use crate::areas::repository::Repository;
use crate::artifacts::core::user_error::UserError;
use crate::artifacts::objects::commit::{Commit, TrackedFiles};
use crate::artifacts::objects::object_id::ObjectId;
use tracing::debug;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        if message.is_empty() {
            return Err(UserError::EmptyMessage.into());
        }

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let (head_oid, head) = self.head_commit()?;
        let tracked_files = index.finalize(head.tracked_files())?;

        self.write_commit(vec![head_oid], message.to_string(), tracked_files)?;
        index.write_updates()?;

        Ok(())
    }

    /// Store a commit and move the active branch to it
    pub(crate) fn write_commit(
        &self,
        parents: Vec<ObjectId>,
        message: String,
        tracked_files: TrackedFiles,
    ) -> anyhow::Result<ObjectId> {
        let timestamp = Commit::load_timestamp_from_env()?;
        let commit = Commit::new(parents, timestamp, tracked_files, message);

        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(commit_id.clone())?;
        debug!(commit = %commit_id, files = commit.tracked_files().len(), "created commit");

        Ok(commit_id)
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::user_error::UserError;
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use std::fs;
use tracing::debug;

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(UserError::AlreadyInitialized.into());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .gitlet/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .gitlet/refs/heads directory")?;

        let root_oid = self.database().store(&Commit::initial())?;

        let default_branch = BranchName::default_branch();
        self.refs()
            .create_branch(&default_branch, root_oid.clone())
            .context("Failed to create the default branch")?;
        self.refs()
            .set_head(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        let index = self.index();
        let mut index = index.lock().await;
        index.clear();
        index.write_updates()?;

        debug!(root = %root_oid, path = %self.path().display(), "initialized repository");

        Ok(())
    }
}

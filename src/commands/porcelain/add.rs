use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::user_error::UserError;
use crate::artifacts::objects::object::Object;
use tracing::debug;

impl Repository {
    pub async fn add(&mut self, file: &str) -> anyhow::Result<()> {
        let path = Workspace::normalize_path(file);
        if !self.workspace().file_exists(&path) {
            return Err(UserError::FileNotFound.into());
        }

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let (_, head) = self.head_commit()?;

        let blob = self.workspace().parse_blob(&path)?;
        let blob_id = blob.object_id()?;

        if index.stage_addition(path.clone(), blob_id.clone(), head.tracked_files()) {
            self.database().store(&blob)?;
            debug!(path = %path.display(), blob = %blob_id, "staged for addition");
        }

        index.write_updates()?;

        Ok(())
    }
}

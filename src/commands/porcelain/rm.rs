use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;

impl Repository {
    pub async fn rm(&mut self, file: &str) -> anyhow::Result<()> {
        let path = Workspace::normalize_path(file);

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let (_, head) = self.head_commit()?;

        if index.stage_remove(&path, head.tracked_files())? {
            self.workspace().remove_file(&path)?;
        }

        index.write_updates()?;

        Ok(())
    }
}

use crate::areas::repository::Repository;

impl Repository {
    pub async fn reset(&mut self, commit_id: &str) -> anyhow::Result<()> {
        let target_oid = self.resolve_commit_id(commit_id)?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        self.migrate_to(&mut index, &target_oid)?;
        self.refs().update_head(target_oid)?;

        Ok(())
    }
}

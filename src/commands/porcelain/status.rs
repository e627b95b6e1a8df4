use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub async fn status(&mut self) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let status = self.status_report().initialize(&index)?;
        write!(self.writer(), "{status}")?;

        Ok(())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::log::rev_list::RevList;
use std::io::Write;

impl Repository {
    pub async fn log(&self) -> anyhow::Result<()> {
        let head_oid = self.refs().read_head()?;

        for entry in RevList::new(self.database(), head_oid) {
            let (commit_oid, commit) = entry?;
            write!(self.writer(), "{}", LogEntry::new(&commit_oid, &commit))?;
        }

        Ok(())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::core::user_error::UserError;
use std::io::Write;

impl Repository {
    pub async fn find(&self, message: &str) -> anyhow::Result<()> {
        let matches = self
            .all_commits()?
            .into_iter()
            .filter(|(_, commit)| commit.message() == message)
            .map(|(commit_oid, _)| commit_oid)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(UserError::NoCommitWithMessage.into());
        }

        for commit_oid in matches {
            writeln!(self.writer(), "{commit_oid}")?;
        }

        Ok(())
    }
}

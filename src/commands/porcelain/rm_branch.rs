use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::user_error::UserError;
use tracing::debug;

impl Repository {
    /// Delete a branch ref; the commits it pointed to stay in the object store
    pub async fn rm_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name =
            BranchName::try_parse(branch_name.to_string()).map_err(|_| UserError::BranchNotFound)?;

        let last_oid = self.refs().delete_branch(&branch_name)?;
        debug!(branch = %branch_name, was = %last_oid.to_short_oid(), "deleted branch");

        Ok(())
    }
}

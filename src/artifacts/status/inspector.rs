use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::path::Path;

/// Compares working-tree files against the head commit and the staging area
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Present in the working tree but neither tracked by the head commit nor
    /// staged for addition
    pub fn is_untracked(&self, path: &Path, head: &TrackedFiles, index: &Index) -> bool {
        self.repository.workspace().file_exists(path)
            && !head.contains_key(path)
            && !index.additions().contains_key(path)
    }

    /// Blob id the working-tree file would get, or None when it is missing
    pub fn workspace_oid(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        if !self.repository.workspace().file_exists(path) {
            return Ok(None);
        }

        let blob = self.repository.workspace().parse_blob(path)?;
        Ok(Some(blob.object_id()?))
    }

    /// Compare the working-tree file against the version it is expected to have
    pub fn check_against_workspace(
        &self,
        path: &Path,
        expected: &ObjectId,
    ) -> anyhow::Result<WorkspaceChangeType> {
        match self.workspace_oid(path)? {
            None => Ok(WorkspaceChangeType::Deleted),
            Some(oid) if &oid != expected => Ok(WorkspaceChangeType::Modified),
            Some(_) => Ok(WorkspaceChangeType::None),
        }
    }
}

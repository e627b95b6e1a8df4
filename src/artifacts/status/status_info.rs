use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type FileSet = BTreeSet<PathBuf>;
pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;

/// Everything `status` reports, each section sorted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) current_branch: BranchName,
    pub(crate) branches: Vec<BranchName>,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

impl std::fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Branches ===")?;
        for branch in &self.branches {
            let marker = if branch == &self.current_branch { "*" } else { "" };
            writeln!(f, "{marker}{branch}")?;
        }
        writeln!(f)?;

        writeln!(f, "=== Staged Files ===")?;
        for file in &self.staged_files {
            writeln!(f, "{}", file.display())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Removed Files ===")?;
        for file in &self.removed_files {
            writeln!(f, "{}", file.display())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Modifications Not Staged For Commit ===")?;
        for (file, change) in &self.workspace_changeset {
            writeln!(f, "{} ({change})", file.display())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Untracked Files ===")?;
        for file in &self.untracked_files {
            writeln!(f, "{}", file.display())?;
        }
        writeln!(f)
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let inspector = Inspector::new(self.repository);
        let (_, head) = self.repository.head_commit()?;
        let head_files = head.tracked_files();

        let workspace_changeset = self.collect_workspace_changes(head_files, index, &inspector)?;
        let untracked_files = self.collect_untracked_files(head_files, index)?;

        Ok(StatusInfo {
            current_branch: self.repository.refs().current_branch()?,
            branches: self.repository.refs().list_branches()?,
            staged_files: index.additions().keys().cloned().collect(),
            removed_files: index.removals().keys().cloned().collect(),
            workspace_changeset,
            untracked_files,
        })
    }

    fn collect_workspace_changes(
        &self,
        head_files: &TrackedFiles,
        index: &Index,
        inspector: &Inspector<'_>,
    ) -> anyhow::Result<ChangeSet> {
        let mut changeset = ChangeSet::new();

        // staged files are compared against what was staged
        for (path, staged_oid) in index.additions() {
            let change = inspector.check_against_workspace(path, staged_oid)?;
            if change != WorkspaceChangeType::None {
                changeset.insert(path.clone(), change);
            }
        }

        // unstaged tracked files are compared against the head commit
        for (path, head_oid) in head_files {
            if index.additions().contains_key(path) || index.removals().contains_key(path) {
                continue;
            }

            let change = inspector.check_against_workspace(path, head_oid)?;
            if change != WorkspaceChangeType::None {
                changeset.insert(path.clone(), change);
            }
        }

        Ok(changeset)
    }

    fn collect_untracked_files(
        &self,
        head_files: &TrackedFiles,
        index: &Index,
    ) -> anyhow::Result<FileSet> {
        Ok(self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .filter(|path| !index.additions().contains_key(path))
            .filter(|path| !head_files.contains_key(path) || index.removals().contains_key(path))
            .collect())
    }
}

//! Checkout migration
//!
//! Moves the working tree from the head commit to a target commit:
//!
//! 1. Planning: every file of the target is written (added or overwritten),
//!    every file tracked only by the head commit is deleted
//! 2. Checking: an untracked working file the target would overwrite aborts
//!    the whole migration before anything is written
//! 3. Applying: the working tree is updated and the staging area cleared
//!
//! Files are written one at a time; a storage failure halfway through leaves
//! the earlier files written.

use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::user_error::UserError;
use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::inspector::Inspector;
use anyhow::Context;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Type of file system action required for checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Create a file the head commit does not track
    Add,
    /// Delete a file only the head commit tracks
    Delete,
    /// Overwrite a file both commits track
    Modify,
}

/// Planned actions grouped by type; Add/Modify carry the blob to write
pub type ActionsSet = HashMap<ActionType, Vec<(PathBuf, Option<ObjectId>)>>;

pub struct Migration<'r> {
    repository: &'r Repository,
    index: &'r mut Index,
    /// Files tracked by the head commit
    current: &'r TrackedFiles,
    /// Files tracked by the target commit
    target: &'r TrackedFiles,
    inspector: Inspector<'r>,
    actions: ActionsSet,
    untracked: Vec<PathBuf>,
}

impl<'r> Migration<'r> {
    pub fn new(
        repository: &'r Repository,
        index: &'r mut Index,
        current: &'r TrackedFiles,
        target: &'r TrackedFiles,
    ) -> Self {
        let actions = HashMap::from([
            (ActionType::Add, Vec::new()),
            (ActionType::Delete, Vec::new()),
            (ActionType::Modify, Vec::new()),
        ]);

        Self {
            repository,
            index,
            current,
            target,
            inspector: Inspector::new(repository),
            actions,
            untracked: Vec::new(),
        }
    }

    pub fn actions_of(&self, action: ActionType) -> &[(PathBuf, Option<ObjectId>)] {
        self.actions
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn apply_changes(&mut self) -> anyhow::Result<()> {
        self.plan_changes();

        if !self.untracked.is_empty() {
            debug!(paths = ?self.untracked, "untracked files would be overwritten");
            return Err(UserError::UntrackedFileInTheWay.into());
        }

        self.update_workspace()?;
        self.index.clear();

        Ok(())
    }

    fn plan_changes(&mut self) {
        let (current, target) = (self.current, self.target);

        for (path, oid) in target {
            if self.inspector.is_untracked(path, current, self.index) {
                self.untracked.push(path.clone());
            }

            let action = if current.contains_key(path) {
                ActionType::Modify
            } else {
                ActionType::Add
            };
            self.record_change(action, path.clone(), Some(oid.clone()));
        }

        for path in current.keys() {
            if !target.contains_key(path) {
                self.record_change(ActionType::Delete, path.clone(), None);
            }
        }

        debug!(
            added = self.actions_of(ActionType::Add).len(),
            modified = self.actions_of(ActionType::Modify).len(),
            deleted = self.actions_of(ActionType::Delete).len(),
            "planned checkout"
        );
    }

    fn record_change(&mut self, action: ActionType, path: PathBuf, oid: Option<ObjectId>) {
        self.actions.entry(action).or_default().push((path, oid));
    }

    fn update_workspace(&self) -> anyhow::Result<()> {
        self.repository.workspace().apply_migration(self)
    }

    pub fn load_blob_data(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let blob = self
            .repository
            .database()
            .parse_object_as_blob(object_id)
            .with_context(|| format!("Failed to parse blob object {}", object_id))?;

        Ok(blob.into_content())
    }
}

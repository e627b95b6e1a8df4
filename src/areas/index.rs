//! Staging area
//!
//! Two maps mediate between the working tree and the next commit:
//!
//! - `additions`: path -> blob id of the content staged for the next commit
//! - `removals`: path -> blob id the path had in the head commit
//!
//! A path lives in at most one of the two maps. The maps are persisted to
//! `.gitlet/index` (see [`crate::artifacts::index`] for the layout) and
//! cleared after every successful commit.

use crate::artifacts::core::user_error::UserError;
use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_entry::{StagedEntry, StagedKind};
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::HEADER_SIZE;
use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::anyhow;
use std::collections::BTreeMap;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.gitlet/index`)
    path: Box<Path>,
    additions: BTreeMap<PathBuf, ObjectId>,
    removals: BTreeMap<PathBuf, ObjectId>,
    /// Set when the maps differ from what is on disk
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            additions: BTreeMap::new(),
            removals: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn additions(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.removals
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    /// Drop every staged change
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.changed = true;
        }
        self.additions.clear();
        self.removals.clear();
    }

    /// Load the staging area from disk
    ///
    /// A missing or empty file is an empty staging area. Otherwise the header
    /// and entries are parsed and the trailing checksum verified.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.additions.clear();
        self.removals.clear();
        self.changed = false;

        if !self.path().exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        // if the index file is empty, return early
        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock);
        let header = Self::parse_header(&mut reader)?;
        self.parse_entries(&header, &mut reader)?;

        reader.verify()
    }

    fn parse_header(reader: &mut Checksum) -> anyhow::Result<IndexHeader> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(std::io::Cursor::new(header_bytes))?;
        header.validate()?;

        Ok(header)
    }

    fn parse_entries(&mut self, header: &IndexHeader, reader: &mut Checksum) -> anyhow::Result<()> {
        let entries_count = header
            .additions_count
            .checked_add(header.removals_count)
            .ok_or_else(|| anyhow!("Staging area header counts overflow"))?;

        for _ in 0..entries_count {
            let entry = reader.read_entry()?;
            match entry.kind {
                StagedKind::Addition => self.additions.insert(entry.path, entry.oid),
                StagedKind::Removal => self.removals.insert(entry.path, entry.oid),
            };
        }

        if self.additions.len() != header.additions_count as usize
            || self.removals.len() != header.removals_count as usize
        {
            return Err(anyhow!("Staging area entries do not match header counts"));
        }

        Ok(())
    }

    /// Persist the staging area
    ///
    /// Skipped when nothing changed since the last load and the file exists.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed && self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let header = IndexHeader::for_counts(self.additions.len(), self.removals.len());
        writer.write(&header.serialize()?)?;

        for entry in self.staged_entries() {
            writer.write(&entry.serialize()?)?;
        }

        writer.write_checksum()?;
        self.changed = false;
        debug!(
            additions = self.additions.len(),
            removals = self.removals.len(),
            "wrote staging area"
        );

        Ok(())
    }

    /// Additions first, then removals, each in path order
    fn staged_entries(&self) -> impl Iterator<Item = StagedEntry> + '_ {
        let additions = self
            .additions
            .iter()
            .map(|(path, oid)| StagedEntry::new(StagedKind::Addition, oid.clone(), path.clone()));
        let removals = self
            .removals
            .iter()
            .map(|(path, oid)| StagedEntry::new(StagedKind::Removal, oid.clone(), path.clone()));

        additions.chain(removals)
    }

    /// Stage a file's current content for addition
    ///
    /// When the content matches the head commit's version the path is
    /// unstaged instead. Returns whether the blob is now staged (and so must
    /// be present in the object store).
    pub fn stage_addition(&mut self, path: PathBuf, oid: ObjectId, tracked: &TrackedFiles) -> bool {
        if tracked.get(&path) == Some(&oid) {
            debug!(path = %path.display(), "content matches head, unstaging");
            self.unstage(&path);
            return false;
        }

        if self.additions.get(&path) != Some(&oid) || self.removals.contains_key(&path) {
            self.changed = true;
        }
        self.removals.remove(&path);
        self.additions.insert(path, oid);

        true
    }

    /// Stage a tracked path for removal, whatever its working-tree state
    pub fn stage_removal(&mut self, path: PathBuf, oid: ObjectId) {
        self.additions.remove(&path);
        self.removals.insert(path, oid);
        self.changed = true;
    }

    /// Forget any staged change for a path
    pub fn unstage(&mut self, path: &Path) {
        let had_addition = self.additions.remove(path).is_some();
        let had_removal = self.removals.remove(path).is_some();

        if had_addition || had_removal {
            self.changed = true;
        }
    }

    /// Handle `rm` for a path
    ///
    /// Fails when the path is neither staged for addition nor tracked by the
    /// head commit. Returns whether the path is tracked, in which case it has
    /// been staged for removal and the working file should be deleted.
    pub fn stage_remove(&mut self, path: &Path, tracked: &TrackedFiles) -> anyhow::Result<bool> {
        let was_staged = self.additions.remove(path).is_some();
        if was_staged {
            self.changed = true;
        }

        match tracked.get(path) {
            Some(oid) => {
                self.stage_removal(path.to_path_buf(), oid.clone());
                Ok(true)
            }
            None if was_staged => Ok(false),
            None => Err(UserError::NothingToRemove.into()),
        }
    }

    /// Apply staged changes to a copy of the head commit's tracked files
    ///
    /// Removals are applied before additions. The staging area is left
    /// untouched.
    pub fn apply_to(&self, tracked: &TrackedFiles) -> TrackedFiles {
        let mut tracked = tracked.clone();

        for path in self.removals.keys() {
            tracked.remove(path);
        }
        for (path, oid) in &self.additions {
            tracked.insert(path.clone(), oid.clone());
        }

        tracked
    }

    /// Build the tracked files of the next commit and clear the staging area
    pub fn finalize(&mut self, tracked: &TrackedFiles) -> anyhow::Result<TrackedFiles> {
        if self.is_empty() {
            return Err(UserError::NothingToCommit.into());
        }

        let next = self.apply_to(tracked);
        self.clear();

        Ok(next)
    }
}

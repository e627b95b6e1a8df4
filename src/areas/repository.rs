use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{REPOSITORY_DIR, Workspace};
use crate::artifacts::core::user_error::UserError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::status::status_info::Status;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Environment variable overriding the working tree directory
pub const WORKING_DIR_ENV: &str = "GITLET_DIR";

pub struct Repository {
    /// Root of the working tree
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("working directory {:?} is not accessible", path))?;
        let git_path = path.join(REPOSITORY_DIR);

        let index = Index::new(git_path.join("index").into_boxed_path());
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
        })
    }

    /// Working tree from `GITLET_DIR`, falling back to the current directory
    pub fn working_dir_from_env() -> anyhow::Result<PathBuf> {
        match std::env::var_os(WORKING_DIR_ENV) {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => std::env::current_dir().context("current directory is not accessible"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `.gitlet` directory
    pub fn git_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.git_path().is_dir()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn status_report(&'_ self) -> Status<'_> {
        Status::new(self)
    }

    /// The commit the active branch points to
    pub fn head_commit(&self) -> anyhow::Result<(ObjectId, Commit)> {
        let head_oid = self.refs.read_head()?;
        let commit = self.database.parse_object_as_commit(&head_oid)?;

        Ok((head_oid, commit))
    }

    /// Resolve a full or abbreviated commit id typed by the user
    ///
    /// Only commit objects are considered; an unknown or ambiguous prefix is
    /// reported as a missing commit.
    pub fn resolve_commit_id(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        let candidates = self
            .database
            .find_objects_by_prefix(prefix)?
            .into_iter()
            .filter(|oid| matches!(self.database.get_object_type(oid), Ok(ObjectType::Commit)))
            .collect::<Vec<_>>();

        match candidates.as_slice() {
            [oid] => Ok(oid.clone()),
            _ => {
                debug!(prefix, matches = candidates.len(), "commit id did not resolve");
                Err(UserError::NoCommitWithId.into())
            }
        }
    }
}

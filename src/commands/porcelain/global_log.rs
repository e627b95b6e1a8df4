use crate::areas::repository::Repository;
use crate::artifacts::log::graph_walk::reachable_commits;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::io::Write;

impl Repository {
    pub async fn global_log(&self) -> anyhow::Result<()> {
        for (commit_oid, commit) in self.all_commits()? {
            write!(self.writer(), "{}", LogEntry::new(&commit_oid, &commit))?;
        }

        Ok(())
    }

    /// Every commit reachable from a branch head, in commit id order
    pub(crate) fn all_commits(&self) -> anyhow::Result<BTreeMap<ObjectId, Commit>> {
        let heads = self
            .refs()
            .list_branches()?
            .iter()
            .map(|branch| self.refs().read_ref(branch))
            .collect::<anyhow::Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        reachable_commits(self.database(), &heads)
    }
}

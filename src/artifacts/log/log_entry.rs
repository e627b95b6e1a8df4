use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// One commit as printed by `log` and `global-log`
///
/// ```text
/// ===
/// commit <id>
/// Merge: <first parent, 7 chars> <second parent, 7 chars>
/// Date: Thu Jan 1 00:00:00 1970 +0000
/// <message>
///
/// ```
///
/// The `Merge:` line only appears for merge commits.
#[derive(new)]
pub struct LogEntry<'c> {
    oid: &'c ObjectId,
    commit: &'c Commit,
}

impl std::fmt::Display for LogEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===")?;
        writeln!(f, "commit {}", self.oid)?;
        if let (Some(first), Some(second)) = (self.commit.parent(), self.commit.second_parent()) {
            writeln!(
                f,
                "Merge: {} {}",
                first.to_short_oid(),
                second.to_short_oid()
            )?;
        }
        writeln!(f, "Date: {}", self.commit.readable_timestamp())?;
        writeln!(f, "{}", self.commit.message())?;
        writeln!(f)
    }
}

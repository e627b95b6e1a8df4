use crate::artifacts::index::index_entry::{ENTRY_FIXED_SIZE, StagedEntry};
use crate::artifacts::index::CHECKSUM_SIZE;
use crate::artifacts::objects::object::Unpackable;
use anyhow::{Context, anyhow};
use bytes::{Bytes, BytesMut};
use file_guard::FileGuard;
use sha1::{Digest, Sha1};
use std::io::{Read, Write};
use std::ops::DerefMut;

/// Staging file stream that hashes every byte it moves
///
/// The SHA-1 of everything read (or written) so far is compared against (or
/// appended as) the 20-byte trailer of the staging file.
#[derive(Debug)]
pub struct Checksum<'f> {
    file: FileGuard<&'f mut std::fs::File>,
    digest: Sha1,
    moved: usize,
}

impl<'f> Checksum<'f> {
    pub fn new(file: FileGuard<&'f mut std::fs::File>) -> Self {
        Checksum {
            file,
            digest: Sha1::new(),
            moved: 0,
        }
    }

    pub fn read(&mut self, size: usize) -> anyhow::Result<Bytes> {
        let mut buffer = vec![0; size];
        self.file
            .deref_mut()
            .read_exact(&mut buffer)
            .with_context(|| {
                format!(
                    "Staging area ends early: wanted {size} bytes at offset {}",
                    self.moved
                )
            })?;

        self.digest.update(&buffer);
        self.moved += size;
        Ok(Bytes::from(buffer))
    }

    /// Read one staged entry: the fixed part, then the path it announces
    pub fn read_entry(&mut self) -> anyhow::Result<StagedEntry> {
        let fixed = self.read(ENTRY_FIXED_SIZE)?;
        let path_len = StagedEntry::path_len(&fixed)?;
        let path = self.read(path_len)?;

        let mut entry_bytes = BytesMut::with_capacity(fixed.len() + path.len());
        entry_bytes.extend_from_slice(&fixed);
        entry_bytes.extend_from_slice(&path);

        StagedEntry::deserialize(std::io::Cursor::new(entry_bytes.freeze()))
    }

    pub fn write(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.file
            .deref_mut()
            .write_all(data)
            .context("Failed to write staging area")?;
        self.digest.update(data);
        self.moved += data.len();
        Ok(())
    }

    /// Append the digest of everything written so far
    pub fn write_checksum(&mut self) -> anyhow::Result<()> {
        let checksum = self.digest.clone().finalize();
        self.file
            .deref_mut()
            .write_all(checksum.as_slice())
            .context("Failed to write checksum to staging area")?;

        Ok(())
    }

    /// Compare the trailer with the digest of everything read so far
    ///
    /// Bytes after the trailer are rejected as well.
    pub fn verify(&mut self) -> anyhow::Result<()> {
        let mut expected_checksum = [0u8; CHECKSUM_SIZE];
        self.file
            .deref_mut()
            .read_exact(&mut expected_checksum)
            .context("Staging area is missing its checksum")?;

        let actual_checksum = self.digest.clone().finalize();
        if expected_checksum != actual_checksum.as_slice() {
            return Err(anyhow!(
                "Staging area checksum does not match the {} bytes stored on disk",
                self.moved
            ));
        }

        let mut trailing = Vec::new();
        self.file.deref_mut().read_to_end(&mut trailing)?;
        if !trailing.is_empty() {
            return Err(anyhow!(
                "Staging area has {} unexpected bytes after its checksum",
                trailing.len()
            ));
        }

        Ok(())
    }
}

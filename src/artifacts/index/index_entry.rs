//! Staging area entry
//!
//! Each entry is either a file staged for addition (path -> blob id of the
//! staged content) or a file staged for removal (path -> blob id it had in the
//! head commit).

use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::anyhow;
use byteorder::{ByteOrder, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Kind byte + raw blob id + path length
pub const ENTRY_FIXED_SIZE: usize = 1 + 20 + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedKind {
    Addition,
    Removal,
}

impl StagedKind {
    fn as_byte(self) -> u8 {
        match self {
            StagedKind::Addition => 0,
            StagedKind::Removal => 1,
        }
    }
}

impl TryFrom<u8> for StagedKind {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> anyhow::Result<Self> {
        match value {
            0 => Ok(StagedKind::Addition),
            1 => Ok(StagedKind::Removal),
            _ => Err(anyhow!("Invalid staged entry kind: {value}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StagedEntry {
    pub kind: StagedKind,
    pub oid: ObjectId,
    pub path: PathBuf,
}

impl StagedEntry {
    /// Length of the path that follows the fixed-size part of an entry
    pub fn path_len(fixed: &[u8]) -> anyhow::Result<usize> {
        if fixed.len() < ENTRY_FIXED_SIZE {
            return Err(anyhow!("Invalid staged entry size"));
        }

        Ok(byteorder::NetworkEndian::read_u16(&fixed[21..23]) as usize)
    }
}

impl Packable for StagedEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let path = self
            .path
            .to_str()
            .ok_or_else(|| anyhow!("Invalid staged path {}", self.path.display()))?;
        let path_len =
            u16::try_from(path.len()).map_err(|_| anyhow!("Staged path is too long: {path}"))?;

        let mut entry_bytes = Vec::with_capacity(ENTRY_FIXED_SIZE + path.len());
        entry_bytes.write_u8(self.kind.as_byte())?;
        self.oid.write_h40_to(&mut entry_bytes)?;
        entry_bytes.write_u16::<byteorder::NetworkEndian>(path_len)?;
        entry_bytes.write_all(path.as_bytes())?;

        Ok(Bytes::from(entry_bytes))
    }
}

impl Unpackable for StagedEntry {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let bytes = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let path_len = Self::path_len(&bytes)?;
        if bytes.len() != ENTRY_FIXED_SIZE + path_len {
            return Err(anyhow!("Invalid staged entry size"));
        }

        let kind = StagedKind::try_from(bytes[0])?;
        let oid = ObjectId::read_h40_from(&mut std::io::Cursor::new(&bytes[1..21]))?;
        let path = std::str::from_utf8(&bytes[ENTRY_FIXED_SIZE..])
            .map_err(|_| anyhow!("Invalid UTF-8 in staged path"))?;

        Ok(StagedEntry {
            kind,
            oid,
            path: PathBuf::from(path),
        })
    }
}

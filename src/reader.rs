// src/reader.rs
use crate::document::Fcs;
use crate::error::Result;
use crate::transform::Transform;
use bytes::Bytes;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

/// Reads FCS file bytes from disk and hands them to the decode pipeline.
///
/// The whole file is slurped up front: the format is not streamable
/// (the header points backwards and forwards into the file) and decode
/// is a single synchronous pass.
pub struct FcsReader {
    bytes: Bytes,
}

impl FcsReader {
    /// Open a file through buffered standard I/O
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(65536, file);
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Ok(FcsReader {
            bytes: buffer.into(),
        })
    }

    /// Open a file through a memory map (requires the "mmap" feature)
    #[cfg(feature = "mmap")]
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(FcsReader {
            bytes: Bytes::copy_from_slice(&mmap),
        })
    }

    /// Wrap bytes already in memory
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        FcsReader {
            bytes: bytes.into(),
        }
    }

    /// Size of the raw file in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the file into a document, applying the given transform
    pub fn decode(&self, transform: Transform) -> Result<Fcs> {
        Fcs::decode(self.bytes.clone(), transform)
    }
}

//! File sampling.
//!
//! Builds the [`DocumentBuffer`] every other component scans. Small files are
//! read whole; large files are reduced to a head and a tail slice according
//! to [`SamplingPolicy`]. Markers that sit entirely in the skipped middle of a
//! large file are never seen by the scanner.

use crate::config::SamplingPolicy;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Immutable bytes under analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentBuffer {
    bytes: Vec<u8>,
    partial: bool,
}

impl DocumentBuffer {
    /// Wrap the complete content of a file.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            partial: false,
        }
    }

    /// Wrap a head+tail sample.
    pub fn from_sample(head: Vec<u8>, tail: Vec<u8>) -> Self {
        let mut bytes = head;
        bytes.extend_from_slice(&tail);
        Self {
            bytes,
            partial: true,
        }
    }

    /// The buffered bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the buffer is a head+tail sample rather than the whole file.
    pub fn is_partial(&self) -> bool {
        self.partial
    }
}

impl AsRef<[u8]> for DocumentBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Reads files into [`DocumentBuffer`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSampler {
    policy: SamplingPolicy,
}

impl FileSampler {
    /// Create a sampler with the given policy.
    pub fn new(policy: SamplingPolicy) -> Self {
        Self { policy }
    }

    /// The active sampling policy.
    pub fn policy(&self) -> &SamplingPolicy {
        &self.policy
    }

    /// Sample a file on disk, taking its size from the file metadata.
    pub fn sample_path(&self, path: impl AsRef<Path>) -> Result<DocumentBuffer> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        log::debug!("Sampling {} ({} bytes)", path.display(), size);
        let mut reader = BufReader::new(file);
        self.sample(&mut reader, size)
    }

    /// Sample `size` bytes of `reader`.
    ///
    /// Sources that turn out shorter than `size` are not an error; the buffer
    /// holds whatever could be read.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or seeked, or if the
    /// policy's head and tail would overlap inside a file it decides to
    /// sample.
    pub fn sample<R: Read + Seek>(&self, reader: &mut R, size: u64) -> Result<DocumentBuffer> {
        reader.seek(SeekFrom::Start(0))?;

        if !self.policy.samples(size) {
            let mut bytes = Vec::with_capacity(size as usize);
            reader.take(size).read_to_end(&mut bytes)?;
            return Ok(DocumentBuffer::from_bytes(bytes));
        }

        let head_len = self.policy.head_len;
        let tail_len = self.policy.tail_len;
        if head_len.saturating_add(tail_len) >= size {
            return Err(Error::InvalidSample(format!(
                "head ({}) and tail ({}) overlap in a {} byte file",
                head_len, tail_len, size
            )));
        }

        let mut head = Vec::with_capacity(head_len as usize);
        reader.by_ref().take(head_len).read_to_end(&mut head)?;

        reader.seek(SeekFrom::Start(size - tail_len))?;
        let mut tail = Vec::with_capacity(tail_len as usize);
        reader.take(tail_len).read_to_end(&mut tail)?;

        log::debug!(
            "Sampled {} head + {} tail bytes of a {} byte file",
            head.len(),
            tail.len(),
            size
        );

        Ok(DocumentBuffer::from_sample(head, tail))
    }
}

//! Configuration for sampling and signature scanning.

use std::ops::RangeInclusive;

/// Files up to this size are read in full.
pub const FULL_READ_LIMIT: u64 = 2 * 1024 * 1024;

/// Bytes taken from the start of a large file.
pub const HEAD_SAMPLE_LEN: u64 = 150 * 1024;

/// Bytes taken from the end of a large file.
pub const TAIL_SAMPLE_LEN: u64 = 1024 * 1024;

/// Bytes scanned before each `/ByteRange` anchor.
pub const WINDOW_BEFORE: usize = 25_000;

/// Bytes scanned after each `/ByteRange` anchor.
pub const WINDOW_AFTER: usize = 50_000;

/// How much of a file the sampler reads.
///
/// Files larger than `full_read_limit` are reduced to their head (where the
/// XMP metadata and PDF/A markers normally sit) plus their tail (where
/// incremental-update signature dictionaries and the DSS normally sit).
/// Anything in between is invisible to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingPolicy {
    /// Largest size that is still read in full.
    pub full_read_limit: u64,
    /// Head length for sampled files.
    pub head_len: u64,
    /// Tail length for sampled files.
    pub tail_len: u64,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            full_read_limit: FULL_READ_LIMIT,
            head_len: HEAD_SAMPLE_LEN,
            tail_len: TAIL_SAMPLE_LEN,
        }
    }
}

impl SamplingPolicy {
    /// Whether a file of `size` bytes is sampled instead of read whole.
    pub fn samples(&self, size: u64) -> bool {
        size > self.full_read_limit
    }
}

/// Search window around each signature anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    /// Bytes before the anchor.
    pub before: usize,
    /// Bytes after the anchor.
    pub after: usize,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            before: WINDOW_BEFORE,
            after: WINDOW_AFTER,
        }
    }
}

/// Scanner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Sampling policy used by [`crate::sampler::FileSampler`].
    pub sampling: SamplingPolicy,

    /// Window bounds used by [`crate::signatures::SignatureLocator`].
    pub window: WindowPolicy,

    /// Accepted byte lengths of a certificate common-name value.
    pub cn_length: RangeInclusive<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            sampling: SamplingPolicy::default(),
            window: WindowPolicy::default(),
            cn_length: 5..=80,
        }
    }

    /// Set the sampling policy.
    pub fn with_sampling(mut self, sampling: SamplingPolicy) -> Self {
        self.sampling = sampling;
        self
    }

    /// Set the anchor window.
    pub fn with_window(mut self, before: usize, after: usize) -> Self {
        self.window = WindowPolicy { before, after };
        self
    }

    /// Set the accepted common-name lengths.
    pub fn with_cn_length(mut self, range: RangeInclusive<usize>) -> Self {
        self.cn_length = range;
        self
    }
}

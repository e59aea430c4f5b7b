//! Signature anchor discovery.
//!
//! Every embedded signature dictionary carries a `/ByteRange` array that
//! delimits the bytes its digest covers. Each occurrence is taken as one
//! signature, and the dictionary fields are searched for in a fixed window
//! around it.
//!
//! Windows of neighbouring signatures may overlap, and a window can then
//! pick up the other signature's fields. Each window is scanned on its own.

use crate::config::WindowPolicy;
use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    /// Byte-range anchor
    static ref RE_BYTE_RANGE: Regex = Regex::new(r"/ByteRange").unwrap();

    /// Signature dictionary type marker, `/Type /Sig` or `/Type/Sig`
    static ref RE_SIG_TYPE: Regex = Regex::new(r"/Type\s*/Sig(?-u:\b)").unwrap();
}

/// Search window around one anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureWindow {
    /// 1-based discovery position
    pub index: usize,
    /// Buffer offset of the `/ByteRange` anchor
    pub anchor: usize,
    /// Window start (inclusive)
    pub start: usize,
    /// Window end (exclusive)
    pub end: usize,
}

impl SignatureWindow {
    /// The window's bytes.
    pub fn slice<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.start..self.end]
    }

    /// Window length.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds signature anchors and derives their windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureLocator {
    policy: WindowPolicy,
}

impl SignatureLocator {
    /// Create a locator with the given window bounds.
    pub fn new(policy: WindowPolicy) -> Self {
        Self { policy }
    }

    /// Offsets of every `/ByteRange` anchor, ascending.
    pub fn anchors(&self, data: &[u8]) -> Vec<usize> {
        RE_BYTE_RANGE.find_iter(data).map(|m| m.start()).collect()
    }

    /// One window per anchor, in ascending anchor order.
    pub fn locate(&self, data: &[u8]) -> Vec<SignatureWindow> {
        self.anchors(data)
            .into_iter()
            .enumerate()
            .map(|(i, anchor)| {
                let window = SignatureWindow {
                    index: i + 1,
                    anchor,
                    start: anchor.saturating_sub(self.policy.before),
                    end: anchor.saturating_add(self.policy.after).min(data.len()),
                };
                log::debug!(
                    "Signature {} anchored at {} (window {}..{})",
                    window.index,
                    anchor,
                    window.start,
                    window.end
                );
                window
            })
            .collect()
    }
}

/// Whether the buffer holds any signature dictionary or byte-range anchor.
pub fn has_signature_marker(data: &[u8]) -> bool {
    RE_SIG_TYPE.is_match(data) || RE_BYTE_RANGE.is_match(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_anchor() {
        let locator = SignatureLocator::default();
        assert!(locator.locate(b"%PDF-1.7 no signatures here").is_empty());
    }

    #[test]
    fn test_windows_are_clamped() {
        let locator = SignatureLocator::new(WindowPolicy { before: 10, after: 20 });
        let mut data = vec![b' '; 100];
        data[5..15].copy_from_slice(b"/ByteRange");
        data[85..95].copy_from_slice(b"/ByteRange");

        let windows = locator.locate(&data);
        assert_eq!(windows.len(), 2);

        assert_eq!(windows[0].index, 1);
        assert_eq!(windows[0].anchor, 5);
        assert_eq!(windows[0].start, 0);
        assert_eq!(windows[0].end, 25);

        assert_eq!(windows[1].index, 2);
        assert_eq!(windows[1].anchor, 85);
        assert_eq!(windows[1].start, 75);
        assert_eq!(windows[1].end, 100);
        assert_eq!(windows[1].len(), 25);
    }

    #[test]
    fn test_overlapping_windows_kept() {
        let locator = SignatureLocator::new(WindowPolicy { before: 50, after: 50 });
        let data = b"/ByteRange [0 1 2 3] /ByteRange [0 4 5 6]";
        let windows = locator.locate(data);
        assert_eq!(windows.len(), 2);
        assert!(windows[0].end > windows[1].start);
        assert_eq!(windows[0].slice(data), &data[..]);
    }

    #[test]
    fn test_default_window_sizes() {
        let locator = SignatureLocator::default();
        let mut data = vec![0u8; 200_000];
        data[100_000..100_010].copy_from_slice(b"/ByteRange");
        let windows = locator.locate(&data);
        assert_eq!(windows[0].start, 75_000);
        assert_eq!(windows[0].end, 150_000);
    }

    #[test]
    fn test_signature_markers() {
        assert!(has_signature_marker(b"<< /Type /Sig /Filter /Adobe.PPKLite >>"));
        assert!(has_signature_marker(b"<</Type/Sig>>"));
        assert!(has_signature_marker(b"/ByteRange [0 10 20 30]"));
        assert!(!has_signature_marker(b"<</Type /SigFieldLock>>"));
        assert!(!has_signature_marker(b"<</Type /Catalog>>"));
    }
}

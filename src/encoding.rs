//! Text decoding for names lifted out of signature dictionaries.
//!
//! Signer names arrive in whatever encoding the signing software chose:
//! UTF-16BE (with or without a byte-order mark), UTF-8, Windows-1250 from
//! older Central European tools, or plain Latin-1. Decoding is an ordered
//! chain of [`Codec`]s; the first codec that accepts the bytes wins.

/// A single-step text decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// UTF-16 big endian; a leading `FE FF` mark is skipped
    Utf16Be,
    /// UTF-8, strict
    Utf8,
    /// Windows-1250 (Central European), strict on its five unmapped bytes
    Windows1250,
    /// ISO-8859-1, accepts every byte
    Latin1,
}

/// Decoder chain for 8-bit name strings.
pub const NARROW_CHAIN: &[Codec] = &[Codec::Utf8, Codec::Windows1250, Codec::Latin1];

/// Decoder chain for strings that look like UTF-16BE.
pub const WIDE_CHAIN: &[Codec] = &[Codec::Utf16Be];

impl Codec {
    /// Decode `bytes`, or `None` if they are not valid in this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Codec::Utf16Be => decode_utf16be(bytes),
            Codec::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
            Codec::Windows1250 => bytes.iter().map(|&b| windows_1250_lookup(b)).collect(),
            Codec::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    /// Whether this codec stores one character in two or more bytes.
    pub fn is_wide(&self) -> bool {
        matches!(self, Codec::Utf16Be)
    }
}

/// Run `bytes` through `chain`, returning the first successful decode and
/// the codec that produced it.
pub fn decode_with_chain(bytes: &[u8], chain: &[Codec]) -> Option<(String, Codec)> {
    chain
        .iter()
        .find_map(|codec| codec.decode(bytes).map(|text| (text, *codec)))
}

/// Whether a raw string should be treated as UTF-16BE.
///
/// True when it starts with a byte-order mark or has a zero byte in its
/// first ten bytes; 8-bit encodings never put NUL inside a name.
pub fn looks_wide(bytes: &[u8]) -> bool {
    bytes.starts_with(&[0xFE, 0xFF]) || bytes.iter().take(10).any(|&b| b == 0)
}

/// Pick the chain for a raw string.
pub fn chain_for(bytes: &[u8]) -> &'static [Codec] {
    if looks_wide(bytes) {
        WIDE_CHAIN
    } else {
        NARROW_CHAIN
    }
}

fn decode_utf16be(bytes: &[u8]) -> Option<String> {
    let body = bytes.strip_prefix(&[0xFE, 0xFF]).unwrap_or(bytes);

    // Convert bytes to u16 pairs (big-endian); a dangling odd byte is dropped
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect();

    String::from_utf16(&units).ok()
}

/// Windows-1250 byte to Unicode.
///
/// 0x81, 0x83, 0x88, 0x90 and 0x98 are unassigned and decode to `None`.
pub fn windows_1250_lookup(code: u8) -> Option<char> {
    let c = match code {
        0x00..=0x7F => code as char,

        0x80 => '\u{20AC}', // Euro sign
        0x81 | 0x83 | 0x88 | 0x90 | 0x98 => return None,
        0x82 => '\u{201A}', // single low-9 quotation mark
        0x84 => '\u{201E}', // double low-9 quotation mark
        0x85 => '\u{2026}', // ellipsis
        0x86 => '\u{2020}', // dagger
        0x87 => '\u{2021}', // double dagger
        0x89 => '\u{2030}', // per mille
        0x8A => 'Š',
        0x8B => '\u{2039}', // single left angle quotation mark
        0x8C => 'Ś',
        0x8D => 'Ť',
        0x8E => 'Ž',
        0x8F => 'Ź',
        0x91 => '\u{2018}', // left single quotation mark
        0x92 => '\u{2019}', // right single quotation mark
        0x93 => '\u{201C}', // left double quotation mark
        0x94 => '\u{201D}', // right double quotation mark
        0x95 => '\u{2022}', // bullet
        0x96 => '\u{2013}', // en dash
        0x97 => '\u{2014}', // em dash
        0x99 => '\u{2122}', // trade mark
        0x9A => 'š',
        0x9B => '\u{203A}', // single right angle quotation mark
        0x9C => 'ś',
        0x9D => 'ť',
        0x9E => 'ž',
        0x9F => 'ź',

        0xA0 => '\u{00A0}', // no-break space
        0xA1 => '\u{02C7}', // caron
        0xA2 => '\u{02D8}', // breve
        0xA3 => 'Ł',
        0xA5 => 'Ą',
        0xAA => 'Ş',
        0xAF => 'Ż',
        0xB2 => '\u{02DB}', // ogonek
        0xB3 => 'ł',
        0xB9 => 'ą',
        0xBA => 'ş',
        0xBC => 'Ľ',
        0xBD => '\u{02DD}', // double acute accent
        0xBE => 'ľ',
        0xBF => 'ż',
        0xC0 => 'Ŕ',
        0xC3 => 'Ă',
        0xC5 => 'Ĺ',
        0xC6 => 'Ć',
        0xC8 => 'Č',
        0xCA => 'Ę',
        0xCC => 'Ě',
        0xCF => 'Ď',
        0xD0 => 'Đ',
        0xD1 => 'Ń',
        0xD2 => 'Ň',
        0xD5 => 'Ő',
        0xD8 => 'Ř',
        0xD9 => 'Ů',
        0xDB => 'Ű',
        0xDE => 'Ţ',
        0xE0 => 'ŕ',
        0xE3 => 'ă',
        0xE5 => 'ĺ',
        0xE6 => 'ć',
        0xE8 => 'č',
        0xEA => 'ę',
        0xEC => 'ě',
        0xEF => 'ď',
        0xF0 => 'đ',
        0xF1 => 'ń',
        0xF2 => 'ň',
        0xF5 => 'ő',
        0xF8 => 'ř',
        0xF9 => 'ů',
        0xFB => 'ű',
        0xFE => 'ţ',
        0xFF => '\u{02D9}', // dot above

        // Remaining high bytes match Latin-1
        0xA0..=0xFF => code as char,
    };
    Some(c)
}

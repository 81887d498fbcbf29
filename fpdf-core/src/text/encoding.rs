//! WinAnsi (Windows-1252) encoding for text drawn with the standard fonts

use std::collections::HashMap;

/// Code points in 0x80..0x9F that Windows-1252 maps away from Latin-1.
const WIN_ANSI_SPECIALS: [(char, u8); 27] = [
    ('\u{20AC}', 0x80), // Euro sign
    ('\u{201A}', 0x82), // Single low quotation mark
    ('\u{0192}', 0x83), // Latin small letter f with hook
    ('\u{201E}', 0x84), // Double low quotation mark
    ('\u{2026}', 0x85), // Horizontal ellipsis
    ('\u{2020}', 0x86), // Dagger
    ('\u{2021}', 0x87), // Double dagger
    ('\u{02C6}', 0x88), // Circumflex accent
    ('\u{2030}', 0x89), // Per mille sign
    ('\u{0160}', 0x8A), // Latin capital letter S with caron
    ('\u{2039}', 0x8B), // Single left angle quotation mark
    ('\u{0152}', 0x8C), // Latin capital ligature OE
    ('\u{017D}', 0x8E), // Latin capital letter Z with caron
    ('\u{2018}', 0x91), // Left single quotation mark
    ('\u{2019}', 0x92), // Right single quotation mark
    ('\u{201C}', 0x93), // Left double quotation mark
    ('\u{201D}', 0x94), // Right double quotation mark
    ('\u{2022}', 0x95), // Bullet
    ('\u{2013}', 0x96), // En dash
    ('\u{2014}', 0x97), // Em dash
    ('\u{02DC}', 0x98), // Small tilde
    ('\u{2122}', 0x99), // Trade mark sign
    ('\u{0161}', 0x9A), // Latin small letter s with caron
    ('\u{203A}', 0x9B), // Single right angle quotation mark
    ('\u{0153}', 0x9C), // Latin small ligature oe
    ('\u{017E}', 0x9E), // Latin small letter z with caron
    ('\u{0178}', 0x9F), // Latin capital letter Y with diaeresis
];

/// Result of encoding a string: the bytes to write and every character
/// that had no WinAnsi code (each was replaced by `?`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText {
    pub bytes: Vec<u8>,
    pub unmapped: Vec<char>,
}

/// Character to WinAnsi byte table.
#[derive(Debug, Clone)]
pub struct WinAnsiEncoding {
    table: HashMap<char, u8>,
}

impl WinAnsiEncoding {
    pub fn new() -> Self {
        let mut table = HashMap::with_capacity(256);
        for byte in (0x00..=0x7Fu8).chain(0xA0..=0xFF) {
            table.insert(char::from(byte), byte);
        }
        table.extend(WIN_ANSI_SPECIALS);
        Self { table }
    }

    pub fn encode_char(&self, ch: char) -> Option<u8> {
        self.table.get(&ch).copied()
    }

    pub fn encode(&self, text: &str) -> EncodedText {
        let mut bytes = Vec::with_capacity(text.len());
        let mut unmapped = Vec::new();
        for ch in text.chars() {
            match self.encode_char(ch) {
                Some(byte) => bytes.push(byte),
                None => {
                    bytes.push(b'?');
                    unmapped.push(ch);
                }
            }
        }
        EncodedText { bytes, unmapped }
    }
}

/// The character WinAnsi code `byte` draws, or `None` for control codes
/// and the five unassigned codes in 0x80..0x9F.
pub fn win_ansi_char(byte: u8) -> Option<char> {
    match byte {
        0x00..=0x1F | 0x7F => None,
        0x80..=0x9F => WIN_ANSI_SPECIALS
            .iter()
            .find(|(_, code)| *code == byte)
            .map(|(ch, _)| *ch),
        _ => Some(char::from(byte)),
    }
}

impl Default for WinAnsiEncoding {
    fn default() -> Self {
        Self::new()
    }
}

use std::fmt::Write;

/// Escape bytes for use inside a PDF literal string `( ... )`.
///
/// Printable ASCII is written as is, the three delimiters are backslash
/// escaped and everything else becomes a three digit octal escape, so the
/// result is always 7-bit clean.
pub fn escape_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7E => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\{byte:03o}");
            }
        }
    }
    out
}

/// Escape the bytes of a name object, without the leading `/`.
///
/// Regular characters pass through; whitespace, delimiters, `#` and
/// anything outside printable ASCII become `#xx`.
pub fn escape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for &byte in name.as_bytes() {
        match byte {
            b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' => {
                let _ = write!(out, "#{byte:02X}");
            }
            0x21..=0x7E => out.push(byte as char),
            _ => {
                let _ = write!(out, "#{byte:02X}");
            }
        }
    }
    out
}

/// Render 16-bit codes as a hex string body, e.g. `0048 0069`.
pub fn hex_string(codes: &[u16]) -> String {
    let mut out = String::with_capacity(codes.len() * 5);
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{code:04X}");
    }
    out
}

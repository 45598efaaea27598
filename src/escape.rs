//! Hex-escape masking for capture fields.
//!
//! The sniffer renders non-printable bytes as `\xHH` (backslash, `x`, two hex digits).
//! For display those tokens are collapsed to a single `.`; everything else is kept.

/// Replacement for one `\xHH` token.
pub const MASK_CHAR: char = '.';

/// Length of a `\xHH` token in bytes.
const TOKEN_LEN: usize = 4;

/// True if `bytes` starts with a complete `\xHH` token.
fn is_hex_token(bytes: &[u8]) -> bool {
    bytes.len() >= TOKEN_LEN
        && bytes[0] == b'\\'
        && bytes[1] == b'x'
        && bytes[2].is_ascii_hexdigit()
        && bytes[3].is_ascii_hexdigit()
}

/// Replace every `\xHH` token in `s` with [`MASK_CHAR`], single pass, left to right.
///
/// A backslash that does not start a complete token (e.g. `\xZ1`, or `\x4` at the end)
/// is passed through unchanged.
pub fn mask_hex_escapes(s: &str) -> String {
    if !s.contains("\\x") {
        return s.to_string();
    }
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if is_hex_token(&bytes[i..]) {
            // Token is pure ASCII, so `start..i` always ends on a char boundary.
            out.push_str(&s[start..i]);
            out.push(MASK_CHAR);
            i += TOKEN_LEN;
            start = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&s[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_leading_and_trailing_tokens() {
        assert_eq!(mask_hex_escapes(r"\x00\x00foo!\x35"), "..foo!.");
    }

    #[test]
    fn plain_text_is_identity() {
        assert_eq!(mask_hex_escapes("2535385091"), "2535385091");
        assert_eq!(mask_hex_escapes(""), "");
    }

    #[test]
    fn mixed_case_hex_digits() {
        assert_eq!(mask_hex_escapes(r"a\xFfb\xaBc"), "a.b.c");
    }

    #[test]
    fn incomplete_tokens_pass_through() {
        assert_eq!(mask_hex_escapes(r"\xZ1"), r"\xZ1");
        assert_eq!(mask_hex_escapes(r"ab\x4"), r"ab\x4");
        assert_eq!(mask_hex_escapes(r"\\x41"), r"\.");
    }

    #[test]
    fn non_ascii_is_kept() {
        assert_eq!(mask_hex_escapes("café\\x20bar"), "café.bar");
    }
}

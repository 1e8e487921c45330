// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Compose one or more [`Code`]s into SGR escape sequences.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result, Write as _};

use crate::{Code, InlineString};

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";
pub const RESET_CODE: &str = "0";
pub const RESET_SEQUENCE: &str = "\x1b[0m";

/// An SGR escape sequence for a code string (one or more codes joined by `;`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SgrCode<'a> {
    /// `ESC[<code_string>m`. An empty code string displays as nothing at all, never as
    /// a bare `ESC[m`.
    Set(&'a str),
    /// `ESC[0m`.
    Reset,
}

impl Display for SgrCode<'_> {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::Set("")          => Ok(()),
            SgrCode::Set(code_string) => write!(f, "{CSI}{code_string}{SGR}"),
            SgrCode::Reset            => write!(f, "{CSI}{RESET_CODE}{SGR}"),
        }
    }
}

/// Join `codes` into a code string like `"32;45;3"`, preserving their order. Zero codes
/// produce an empty string.
#[must_use]
pub fn join_codes(codes: &[Code]) -> InlineString {
    let mut acc = InlineString::new();
    for (index, code) in codes.iter().enumerate() {
        if index > 0 {
            acc.push(';');
        }
        // Writing into an in-memory string can't fail.
        _ = write!(acc, "{code}");
    }
    acc
}

/// Produce `ESC[<code_string>m<message>ESC[0m`. The trailing reset is unconditional so
/// styling never leaks into whatever is printed next. An empty code string returns the
/// message unchanged.
#[must_use]
pub fn wrap_full(code_string: &str, message: &str) -> String {
    if code_string.is_empty() {
        return message.to_string();
    }
    format!("{}{message}{}", SgrCode::Set(code_string), SgrCode::Reset)
}

/// Produce `ESC[<code_string>m` with no message and no reset. The caller has to issue a
/// reset later. An empty code string produces an empty string.
#[must_use]
pub fn wrap_set_only(code_string: &str) -> InlineString {
    if code_string.is_empty() {
        return InlineString::new();
    }
    let mut acc = InlineString::new();
    _ = write!(acc, "{}", SgrCode::Set(code_string));
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn set() {
        assert_eq!(SgrCode::Set("1").to_string(), "\x1b[1m");
        assert_eq!(SgrCode::Set("35;1").to_string(), "\x1b[35;1m");
    }

    #[test]
    fn set_empty() {
        assert_eq!(SgrCode::Set("").to_string(), "");
    }

    #[test]
    fn reset() {
        assert_eq!(SgrCode::Reset.to_string(), RESET_SEQUENCE);
    }

    #[test_case(&[], "")]
    #[test_case(&[Code::FG_GREEN], "32")]
    #[test_case(&[Code::FG_GREEN, Code::BG_MAGENTA, Code::OP_ITALIC], "32;45;3")]
    #[test_case(&[Code::OP_ITALIC, Code::BG_MAGENTA, Code::FG_GREEN], "3;45;32")]
    #[test_case(&[Code::OP_RESET, Code::BG_LIGHT_WHITE], "0;107")]
    fn test_join_codes(codes: &[Code], expected: &str) {
        assert_eq!(join_codes(codes).as_str(), expected);
    }

    #[test]
    fn test_join_codes_spills_past_inline_storage() {
        let codes = [Code::BG_LIGHT_WHITE; 6];
        assert_eq!(join_codes(&codes).as_str(), "107;107;107;107;107;107");
    }

    #[test]
    fn test_wrap_full() {
        assert_eq!(wrap_full("32", "hi"), "\x1b[32mhi\x1b[0m");
        assert_eq!(wrap_full("32", ""), "\x1b[32m\x1b[0m");
    }

    #[test]
    fn test_wrap_full_empty_code_string() {
        assert_eq!(wrap_full("", "hi"), "hi");
    }

    #[test]
    fn test_wrap_set_only() {
        assert_eq!(wrap_set_only("1;4").as_str(), "\x1b[1;4m");
        assert_eq!(wrap_set_only("").as_str(), "");
    }
}

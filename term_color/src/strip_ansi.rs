// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// Matches `ESC[` followed by one or more digits, `;` or `?`, followed by `m`. Not
/// anchored to line boundaries.
pub const SGR_CODE_PATTERN: &str = r"\x1b\[[0-9;?]+m";

static SGR_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SGR_CODE_PATTERN).expect("Invalid SGR code regex"));

/// Remove every SGR escape sequence from `text`, eg: `"\x1b[36;1mText\x1b[0m"` becomes
/// `"Text"`. Anything that doesn't match [`SGR_CODE_PATTERN`] (including malformed or
/// non SGR sequences) is left untouched. Text without any sequence is borrowed, not
/// copied.
///
/// Removing a sequence can splice a new one together, eg: `"\x1b[1;\x1b[0mm"`. Those are
/// removed too, in the same single pass over `text`, so the result never contains a
/// match and stripping twice is the same as stripping once.
#[must_use]
pub fn strip_sgr_codes(text: &str) -> Cow<'_, str> {
    if !SGR_CODE_REGEX.is_match(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(scanner::strip_nested(text))
}

mod scanner {
    /// Start offsets (in the output) of the `ESC[` sequences that are still open. Only
    /// parameter chars ever sit between one open sequence and the next, or between the
    /// last one and the end of the output.
    type OpenSequences = Vec<usize>;

    fn is_param(ch: char) -> bool { ch.is_ascii_digit() || ch == ';' || ch == '?' }

    pub fn strip_nested(text: &str) -> String {
        let mut acc = String::with_capacity(text.len());
        let mut open = OpenSequences::new();

        for ch in text.chars() {
            // An `ESC` at the end of the output is undecided until the next char.
            if acc.ends_with('\x1b') {
                if ch == '[' {
                    open.push(acc.len() - 1);
                    acc.push(ch);
                    continue;
                }
                open.clear();
            }

            match ch {
                it if it == '\x1b' || is_param(it) => acc.push(it),
                'm' => match open.last() {
                    // At least one param since `ESC[`, so drop the whole sequence.
                    Some(&start) if acc.len() > start + 2 => {
                        acc.truncate(start);
                        open.pop();
                    }
                    _ => {
                        open.clear();
                        acc.push(ch);
                    }
                },
                _ => {
                    open.clear();
                    acc.push(ch);
                }
            }
        }

        acc
    }
}

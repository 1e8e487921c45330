// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The set of 16 color ANSI SGR parameters that this crate knows how to render, and the
//! name based lookup tables for them.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

use crate::{InlineString, TermColorError, TermColorResult};

/// A single SGR parameter, eg: `31` for a red foreground, or `1` for bold. Its identity
/// is its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(pub u8);

/// The largest value that [`Code::is_valid`] accepts.
pub const MAX_CODE_VALUE: u8 = 107;

/// Foreground colors, 30 - 37, and 39 to revert to the default foreground.
impl Code {
    pub const FG_BLACK: Code = Code(30);
    pub const FG_RED: Code = Code(31);
    pub const FG_GREEN: Code = Code(32);
    pub const FG_YELLOW: Code = Code(33);
    pub const FG_BLUE: Code = Code(34);
    pub const FG_MAGENTA: Code = Code(35);
    pub const FG_CYAN: Code = Code(36);
    pub const FG_WHITE: Code = Code(37);
    pub const FG_DEFAULT: Code = Code(39);
}

/// Extended (non standard) foreground colors, 90 - 97.
impl Code {
    pub const FG_DARK_GRAY: Code = Code(90);
    pub const FG_LIGHT_RED: Code = Code(91);
    pub const FG_LIGHT_GREEN: Code = Code(92);
    pub const FG_LIGHT_YELLOW: Code = Code(93);
    pub const FG_LIGHT_BLUE: Code = Code(94);
    pub const FG_LIGHT_MAGENTA: Code = Code(95);
    pub const FG_LIGHT_CYAN: Code = Code(96);
    pub const FG_LIGHT_WHITE: Code = Code(97);
    pub const FG_GRAY: Code = Code::FG_DARK_GRAY;
}

/// Background colors, 40 - 47, and 49 to revert to the default background.
impl Code {
    pub const BG_BLACK: Code = Code(40);
    pub const BG_RED: Code = Code(41);
    pub const BG_GREEN: Code = Code(42);
    pub const BG_YELLOW: Code = Code(43);
    pub const BG_BLUE: Code = Code(44);
    pub const BG_MAGENTA: Code = Code(45);
    pub const BG_CYAN: Code = Code(46);
    pub const BG_WHITE: Code = Code(47);
    pub const BG_DEFAULT: Code = Code(49);
}

/// Extended (non standard) background colors, 100 - 107.
impl Code {
    pub const BG_DARK_GRAY: Code = Code(100);
    pub const BG_LIGHT_RED: Code = Code(101);
    pub const BG_LIGHT_GREEN: Code = Code(102);
    pub const BG_LIGHT_YELLOW: Code = Code(103);
    pub const BG_LIGHT_BLUE: Code = Code(104);
    pub const BG_LIGHT_MAGENTA: Code = Code(105);
    pub const BG_LIGHT_CYAN: Code = Code(106);
    pub const BG_LIGHT_WHITE: Code = Code(107);
    pub const BG_GRAY: Code = Code::BG_DARK_GRAY;
}

/// Text attributes (options), 0 - 9. Not every terminal emulator supports faint
/// ([`Code::OP_FUZZY`]), italic, fast blink or strikethrough.
impl Code {
    pub const OP_RESET: Code = Code(0);
    pub const OP_BOLD: Code = Code(1);
    pub const OP_FUZZY: Code = Code(2);
    pub const OP_ITALIC: Code = Code(3);
    pub const OP_UNDERSCORE: Code = Code(4);
    pub const OP_BLINK: Code = Code(5);
    pub const OP_FAST_BLINK: Code = Code(6);
    pub const OP_REVERSE: Code = Code(7);
    pub const OP_CONCEALED: Code = Code(8);
    pub const OP_STRIKETHROUGH: Code = Code(9);
}

// Short aliases for the most common codes.
pub const RED: Code = Code::FG_RED;
pub const CYAN: Code = Code::FG_CYAN;
pub const GRAY: Code = Code::FG_DARK_GRAY;
pub const BLUE: Code = Code::FG_BLUE;
pub const BLACK: Code = Code::FG_BLACK;
pub const GREEN: Code = Code::FG_GREEN;
pub const WHITE: Code = Code::FG_WHITE;
pub const YELLOW: Code = Code::FG_YELLOW;
pub const MAGENTA: Code = Code::FG_MAGENTA;
pub const BOLD: Code = Code::OP_BOLD;
pub const NORMAL: Code = Code::FG_DEFAULT;

impl Code {
    /// Loose validity check: any value up to and including [`MAX_CODE_VALUE`] passes,
    /// even values in the gaps between the defined ranges (eg: `50` - `89`). Callers
    /// already rely on this, so don't tighten it into an exact membership check.
    #[must_use]
    pub fn is_valid(self) -> bool { self.0 <= MAX_CODE_VALUE }

    /// The decimal rendering of this code, eg: `"35"`.
    #[must_use]
    pub fn to_code_string(self) -> InlineString {
        use std::fmt::Write as _;
        let mut acc = InlineString::new();
        // Writing into an in-memory string can't fail.
        _ = write!(acc, "{}", self.0);
        acc
    }

    /// Look up a code by its human readable name in the table for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`TermColorError::UnknownCodeName`] if `name` isn't in that table.
    pub fn try_from_name(category: CodeCategory, name: &str) -> TermColorResult<Code> {
        lookup(category, name).ok_or_else(|| TermColorError::UnknownCodeName {
            category,
            name: name.to_string(),
        })
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

impl From<u8> for Code {
    fn from(value: u8) -> Self { Code(value) }
}

impl From<Code> for u8 {
    fn from(value: Code) -> Self { value.0 }
}

/// Name to code lookup tables. Keys are unique within each table, order is irrelevant.
pub mod tables {
    use super::Code;

    pub type CodeTable = &'static [(&'static str, Code)];

    pub const FG_COLORS: CodeTable = &[
        ("black", Code::FG_BLACK),
        ("red", Code::FG_RED),
        ("green", Code::FG_GREEN),
        ("yellow", Code::FG_YELLOW),
        ("blue", Code::FG_BLUE),
        ("magenta", Code::FG_MAGENTA),
        ("cyan", Code::FG_CYAN),
        ("white", Code::FG_WHITE),
        ("default", Code::FG_DEFAULT),
    ];

    pub const BG_COLORS: CodeTable = &[
        ("black", Code::BG_BLACK),
        ("red", Code::BG_RED),
        ("green", Code::BG_GREEN),
        ("yellow", Code::BG_YELLOW),
        ("blue", Code::BG_BLUE),
        ("magenta", Code::BG_MAGENTA),
        ("cyan", Code::BG_CYAN),
        ("white", Code::BG_WHITE),
        ("default", Code::BG_DEFAULT),
    ];

    pub const EX_FG_COLORS: CodeTable = &[
        ("darkGray", Code::FG_DARK_GRAY),
        ("lightRed", Code::FG_LIGHT_RED),
        ("lightGreen", Code::FG_LIGHT_GREEN),
        ("lightYellow", Code::FG_LIGHT_YELLOW),
        ("lightBlue", Code::FG_LIGHT_BLUE),
        ("lightMagenta", Code::FG_LIGHT_MAGENTA),
        ("lightCyan", Code::FG_LIGHT_CYAN),
        ("lightWhite", Code::FG_LIGHT_WHITE),
    ];

    pub const EX_BG_COLORS: CodeTable = &[
        ("darkGray", Code::BG_DARK_GRAY),
        ("lightRed", Code::BG_LIGHT_RED),
        ("lightGreen", Code::BG_LIGHT_GREEN),
        ("lightYellow", Code::BG_LIGHT_YELLOW),
        ("lightBlue", Code::BG_LIGHT_BLUE),
        ("lightMagenta", Code::BG_LIGHT_MAGENTA),
        ("lightCyan", Code::BG_LIGHT_CYAN),
        ("lightWhite", Code::BG_LIGHT_WHITE),
    ];

    pub const OPTIONS: CodeTable = &[
        ("reset", Code::OP_RESET),
        ("bold", Code::OP_BOLD),
        ("fuzzy", Code::OP_FUZZY),
        ("italic", Code::OP_ITALIC),
        ("underscore", Code::OP_UNDERSCORE),
        ("blink", Code::OP_BLINK),
        ("reverse", Code::OP_REVERSE),
        ("concealed", Code::OP_CONCEALED),
    ];
}
pub use tables::*;

/// Which lookup table to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, strum_macros::Display)]
pub enum CodeCategory {
    #[strum(to_string = "foreground color")]
    Fg,
    #[strum(to_string = "background color")]
    Bg,
    #[strum(to_string = "extended foreground color")]
    ExFg,
    #[strum(to_string = "extended background color")]
    ExBg,
    #[strum(to_string = "option")]
    Option,
}

impl CodeCategory {
    #[must_use]
    pub fn table(self) -> CodeTable {
        match self {
            CodeCategory::Fg => FG_COLORS,
            CodeCategory::Bg => BG_COLORS,
            CodeCategory::ExFg => EX_FG_COLORS,
            CodeCategory::ExBg => EX_BG_COLORS,
            CodeCategory::Option => OPTIONS,
        }
    }
}

/// Find the code named `name` in the table for `category`. Names are case sensitive.
#[must_use]
pub fn lookup(category: CodeCategory, name: &str) -> Option<Code> {
    category
        .table()
        .iter()
        .find_map(|(key, code)| (*key == name).then_some(*code))
}

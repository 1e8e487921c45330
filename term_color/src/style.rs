// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{Code, CodeCategory, ColorRender, InlineString, InlineVec, TermColorResult,
            join_codes, set_attributes};

/// An ordered list of [`Code`]s rendered together as one escape sequence, eg: a
/// foreground, a background and bold. Order is preserved as given, since it is the SGR
/// parameter order. It is owned in a stack allocated buffer, which can spill to the heap
/// if it gets larger than [`crate::INLINE_VEC_SIZE`].
///
/// Use [`crate::style!`] to create one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub codes: InlineVec<Code>,
}

impl Style {
    #[must_use]
    pub fn new(codes: impl IntoIterator<Item = Code>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// Build a style from `(category, name)` pairs, eg: `(CodeCategory::ExFg,
    /// "lightRed")`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TermColorError::UnknownCodeName`] for the first name that isn't
    /// in its table.
    pub fn try_from_names(names: &[(CodeCategory, &str)]) -> TermColorResult<Self> {
        names
            .iter()
            .map(|(category, name)| Code::try_from_name(*category, name))
            .collect::<TermColorResult<InlineVec<Code>>>()
            .map(|codes| Self { codes })
    }

    #[must_use]
    pub fn add(mut self, code: Code) -> Self {
        self.codes.push(code);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.codes.is_empty() }

    /// Only true if every code passes the loose [`Code::is_valid`] check.
    #[must_use]
    pub fn is_valid(&self) -> bool { self.codes.iter().all(|code| code.is_valid()) }

    /// [`crate::Renderer::set_attributes`] on the [`crate::global_renderer()`] for all the
    /// codes in this style.
    ///
    /// # Errors
    ///
    /// Returns the underlying write or console adapter failure.
    pub fn set(&self) -> TermColorResult<usize> { set_attributes(&self.codes) }
}

impl ColorRender for Style {
    fn code_string(&self) -> InlineString { join_codes(&self.codes) }

    fn as_codes(&self) -> InlineVec<Code> { self.codes.clone() }
}

/// Displays the code string, eg: `"31;1"`.
impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.code_string()) }
}

impl From<Code> for Style {
    fn from(code: Code) -> Self { Style::new([code]) }
}

impl From<&[Code]> for Style {
    fn from(codes: &[Code]) -> Self { Style::new(codes.iter().copied()) }
}

/// Create a [`Style`] from a list of [`Code`]s.
///
/// ```rust
/// use r3bl_term_color::{BOLD, Code, style};
///
/// let it = style!(Code::FG_LIGHT_RED, Code::BG_BLACK, BOLD);
/// assert_eq!(it.to_string(), "91;40;1");
/// ```
#[macro_export]
macro_rules! style {
    ($($code:expr),* $(,)?) => {
        $crate::Style::new([$($code),*])
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{BOLD, RED, TermColorError, disable, enable, render_string};

    #[test]
    fn test_style_code_string_keeps_order() {
        let it = style!(RED, Code::BG_WHITE, BOLD);
        assert_eq!(it.code_string().as_str(), "31;47;1");
        assert_eq!(style!(BOLD, Code::BG_WHITE, RED).to_string(), "1;47;31");
        assert_eq!(Style::default().code_string().as_str(), "");
    }

    #[test]
    fn test_style_add_and_from() {
        let it = Style::from(RED).add(Code::OP_UNDERSCORE);
        assert_eq!(it.as_codes().as_slice(), &[RED, Code::OP_UNDERSCORE]);
        let codes = [Code::FG_CYAN, Code::OP_REVERSE];
        assert_eq!(Style::from(&codes[..]), style!(Code::FG_CYAN, Code::OP_REVERSE));
    }

    #[test]
    fn test_style_is_valid() {
        assert!(style!(Code::BG_LIGHT_WHITE).is_valid());
        assert!(!style!(RED, Code(108)).is_valid());
        assert!(Style::default().is_empty());
    }

    #[test]
    fn test_try_from_names() {
        let it = Style::try_from_names(&[
            (CodeCategory::ExFg, "lightRed"),
            (CodeCategory::Bg, "black"),
            (CodeCategory::Option, "bold"),
        ]);
        assert_eq!(
            it.ok(),
            Some(style!(Code::FG_LIGHT_RED, Code::BG_BLACK, Code::OP_BOLD))
        );

        let it = Style::try_from_names(&[
            (CodeCategory::Fg, "red"),
            (CodeCategory::Fg, "lightRed"),
        ]);
        assert!(matches!(
            it,
            Err(TermColorError::UnknownCodeName { category: CodeCategory::Fg, ref name })
                if name == "lightRed"
        ));
    }

    #[test]
    #[serial]
    fn test_style_render_delegates_to_global_renderer() {
        enable();
        let it = style!(Code::FG_MAGENTA, BOLD);
        assert_eq!(it.text("alert"), render_string("35;1", "alert"));

        disable();
        assert_eq!(it.text("alert"), "alert");
        assert_eq!(it.set().ok(), Some(0));
        enable();
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Arguments, Display};

use crate::{Code, InlineString, InlineVec, TermColorResult, global_renderer};

/// Marker trait to "remember" which types can render text w/ color. Implementors only
/// provide their code string and codes; every method here is a thin wrapper around the
/// [`global_renderer()`].
///
/// # Example usage:
///
/// ```rust
/// use r3bl_term_color::{Code, ColorRender, GREEN, style};
///
/// let green = GREEN.text("message");
/// let warning = style!(Code::FG_YELLOW, Code::OP_BOLD).sprintf(format_args!("{} left", 3));
/// println!("{green} {warning}");
/// ```
pub trait ColorRender {
    /// Code string like `"35;1"`.
    fn code_string(&self) -> InlineString;

    fn as_codes(&self) -> InlineVec<Code>;

    /// [`crate::Renderer::render_string`].
    fn text(&self, message: &str) -> String {
        global_renderer().render_string(&self.code_string(), message)
    }

    /// [`crate::Renderer::render_code`].
    fn render(&self, args: &[&dyn Display]) -> String {
        global_renderer().render_code(&self.code_string(), args)
    }

    /// Alias of [`ColorRender::render`].
    fn sprint(&self, args: &[&dyn Display]) -> String { self.render(args) }

    /// Format, then [`crate::Renderer::render_string`].
    fn sprintf(&self, args: Arguments<'_>) -> String { self.text(&args.to_string()) }

    /// [`crate::Renderer::print`].
    ///
    /// # Errors
    ///
    /// Returns the underlying write or console adapter failure.
    fn print(&self, message: &str) -> TermColorResult<usize> {
        global_renderer().print(&self.as_codes(), message)
    }

    /// Format, then [`crate::Renderer::print`].
    ///
    /// # Errors
    ///
    /// Returns the underlying write or console adapter failure.
    fn printf(&self, args: Arguments<'_>) -> TermColorResult<usize> {
        self.print(&args.to_string())
    }

    /// [`crate::Renderer::println`].
    ///
    /// # Errors
    ///
    /// Returns the underlying write or console adapter failure.
    fn println(&self, args: &[&dyn Display]) -> TermColorResult<usize> {
        global_renderer().println(&self.as_codes(), args)
    }
}

impl ColorRender for Code {
    fn code_string(&self) -> InlineString { self.to_code_string() }

    fn as_codes(&self) -> InlineVec<Code> { smallvec::smallvec![*self] }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{GREEN, disable, enable, render_code, render_string};

    #[test]
    fn test_code_as_codes() {
        assert_eq!(GREEN.as_codes().as_slice(), &[Code::FG_GREEN]);
        assert_eq!(GREEN.code_string().as_str(), "32");
    }

    #[test]
    #[serial]
    fn test_wrappers_delegate_to_global_renderer() {
        enable();
        assert_eq!(GREEN.text("hi"), render_string("32", "hi"));
        assert_eq!(GREEN.render(&[&"a", &1]), render_code("32", &[&"a1"]));
        assert_eq!(GREEN.sprint(&[&"a", &1]), GREEN.render(&[&"a", &1]));
        assert_eq!(
            GREEN.sprintf(format_args!("{} items", 2)),
            render_string("32", "2 items")
        );
    }

    #[test]
    #[serial]
    fn test_wrappers_when_disabled() {
        disable();
        assert_eq!(Code::FG_RED.text("\x1b[1mboom\x1b[0m"), "boom");
        assert_eq!(Code::FG_RED.sprintf(format_args!("{}!", "boom")), "boom!");
        enable();
    }
}

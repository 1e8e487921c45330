// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for the few operations in this crate that can fail. Rendering a string never
//! fails, so only writing to the terminal and looking up codes by name show up here.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use crate::CodeCategory;

/// Type alias for results returned by this crate.
pub type TermColorResult<T> = Result<T, TermColorError>;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum TermColorError {
    #[error("🖨️ Could not write escape sequence to output")]
    #[diagnostic(code(r3bl_term_color::write_to_output))]
    WriteToOutput {
        #[source]
        source: std::io::Error,
    },

    #[error("🪟 Could not apply attributes via the console adapter")]
    #[diagnostic(code(r3bl_term_color::console_adapter))]
    ConsoleAdapter {
        #[source]
        source: std::io::Error,
    },

    #[error("🔍 Unknown {category} name: '{name}'")]
    #[diagnostic(
        code(r3bl_term_color::unknown_code_name),
        help("Names are case sensitive, eg: `lightRed`, `darkGray`, `bold`")
    )]
    UnknownCodeName {
        category: CodeCategory,
        name: String,
    },
}

impl TermColorError {
    pub fn write_to_output(source: std::io::Error) -> Self {
        TermColorError::WriteToOutput { source }
    }

    pub fn console_adapter(source: std::io::Error) -> Self {
        TermColorError::ConsoleAdapter { source }
    }
}

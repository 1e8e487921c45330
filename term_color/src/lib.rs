// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_term_color
//!
//! Render text w/ 16 color ANSI SGR codes (foreground, background, bold, underline,
//! etc.), and degrade gracefully when that isn't possible:
//!
//! - When color is disabled ([`disable()`]) or the environment doesn't support it
//!   ([`global_color_support::detect()`]), rendering strips escape sequences instead of
//!   adding them.
//! - On legacy Windows consoles that don't interpret escape sequences, the operations
//!   that write straight to stdout go through a [`ConsoleAttributes`] adapter.
//!
//! ## Architecture
//!
//! ```text
//! Code / Style ──▶ join_codes() ──▶ Renderer ──┬──▶ wrap_full() / wrap_set_only()
//! (code_set)       (composer)                  │
//!                                              ├──▶ strip_sgr_codes()
//!                                              │
//!                                              └──▶ ConsoleAttributes (restricted mode)
//! ```
//!
//! ## Example usage
//!
//! ```rust
//! use r3bl_term_color::{BOLD, Code, ColorRender, ColorSupport, Renderer,
//!                       RendererConfig, style};
//!
//! // Explicit renderer, eg: for tests.
//! let renderer = Renderer::new(RendererConfig::new(ColorSupport::Ansi));
//! assert_eq!(renderer.render_string("35;1", "alert"), "\x1b[35;1malert\x1b[0m");
//! renderer.disable();
//! assert_eq!(renderer.render_string("35;1", "alert"), "alert");
//!
//! // Process wide renderer, via the convenience methods.
//! let warning = style!(Code::FG_YELLOW, BOLD).text("careful");
//! let ok = Code::FG_GREEN.text("ok");
//! println!("{warning} {ok}");
//! ```

// Enforce strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ansi_escape_codes;
pub mod code_render;
pub mod code_set;
pub mod console_adapter;
pub mod detect_color_support;
pub mod error;
pub mod renderer;
pub mod sizes;
pub mod strip_ansi;
pub mod style;

// Re-export.
pub use ansi_escape_codes::*;
pub use code_render::*;
pub use code_set::*;
pub use console_adapter::*;
pub use detect_color_support::*;
pub use error::*;
pub use renderer::*;
pub use sizes::*;
pub use strip_ansi::*;
pub use style::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single place that decides whether output is styled or plain.
//!
//! A [`Renderer`] owns three pieces of state:
//! 1. Whether rendering is enabled. This starts out `true` and is flipped by
//!    [`Renderer::disable()`] and [`Renderer::enable()`]. Once disabled, every render
//!    call degrades to stripping escape sequences.
//! 2. Whether the environment supports color. This is decided once, at construction, and
//!    never re-detected.
//! 3. The [`ConsoleMode`], also decided once. In restricted console mode, the operations
//!    that write directly to stdout are routed through a [`crate::ConsoleAttributes`]
//!    adapter instead of writing escape text.
//!
//! Tests construct a [`Renderer`] with explicit values using [`RendererConfig`]. Apps
//! that don't care can use the process wide [`global_renderer()`] and the free functions
//! in this module, which delegate to it.

use std::{fmt::{Display, Write as _},
          io::{self, Write},
          sync::{LazyLock,
                 atomic::{AtomicBool, Ordering}}};

use crate::{Code, ColorSupport, ConsoleMode, RESET_SEQUENCE, TermColorError,
            TermColorResult, global_color_support, join_codes, strip_sgr_codes,
            wrap_full, wrap_set_only};

/// Values a [`Renderer`] is constructed with.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub enabled: bool,
    pub color_support: ColorSupport,
    pub console_mode: ConsoleMode,
}

impl RendererConfig {
    /// Enabled, with the given color support, writing escape sequences (no console
    /// adapter).
    #[must_use]
    pub fn new(color_support: impl Into<ColorSupport>) -> Self {
        Self {
            enabled: true,
            color_support: color_support.into(),
            console_mode: ConsoleMode::Ansi,
        }
    }

    /// Enabled, with color support from [`global_color_support::detect()`] and the
    /// console mode from [`ConsoleMode::from_env()`].
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            enabled: true,
            color_support: global_color_support::detect(),
            console_mode: ConsoleMode::from_env(),
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_console_mode(mut self, console_mode: ConsoleMode) -> Self {
        self.console_mode = console_mode;
        self
    }
}

#[derive(Debug)]
pub struct Renderer {
    enabled: AtomicBool,
    color_support: ColorSupport,
    console_mode: ConsoleMode,
}

impl From<RendererConfig> for Renderer {
    fn from(config: RendererConfig) -> Self { Renderer::new(config) }
}

impl Renderer {
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        let RendererConfig {
            enabled,
            color_support,
            console_mode,
        } = config;
        Self {
            enabled: AtomicBool::new(enabled),
            color_support,
            console_mode,
        }
    }

    #[must_use]
    pub fn from_env() -> Self { Renderer::new(RendererConfig::from_env()) }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
        tracing::debug!(message = "🚫 Color rendering disabled");
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
        tracing::debug!(message = "🌈 Color rendering enabled");
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool { self.enabled.load(Ordering::Acquire) }

    #[must_use]
    pub fn supports_color(&self) -> bool { self.color_support.is_supported() }

    #[must_use]
    pub fn color_support(&self) -> ColorSupport { self.color_support }

    #[must_use]
    pub fn console_mode(&self) -> &ConsoleMode { &self.console_mode }

    fn should_strip(&self) -> bool { !self.is_enabled() || !self.supports_color() }

    fn restricted_adapter(&self) -> Option<&dyn crate::ConsoleAttributes> {
        match &self.console_mode {
            ConsoleMode::Restricted(adapter) if self.is_enabled() => Some(adapter.as_ref()),
            _ => None,
        }
    }
}

/// String in, string out. Nothing here writes anywhere.
impl Renderer {
    /// Concatenate `args` (each one's [`Display`], no separators, not even between two
    /// numbers, so `[&1, &2]` gives `"12"`) into a message, then:
    /// 1. Empty `code_string`: return the message verbatim.
    /// 2. Disabled, or no color support: return the message with any embedded escape
    ///    sequences stripped.
    /// 3. Otherwise: wrap the message in `ESC[<code_string>m ... ESC[0m`.
    #[must_use]
    pub fn render_code(&self, code_string: &str, args: &[&dyn Display]) -> String {
        let mut message = String::new();
        for arg in args {
            // Writing into an in-memory string can't fail.
            _ = write!(message, "{arg}");
        }

        if code_string.is_empty() {
            return message;
        }

        if self.should_strip() {
            return strip_sgr_codes(&message).into_owned();
        }

        wrap_full(code_string, &message)
    }

    /// Same as [`Renderer::render_code`] for a single string, except that an empty
    /// `code_string` *or* an empty `text` returns `text` unchanged, without stripping.
    #[must_use]
    pub fn render_string(&self, code_string: &str, text: &str) -> String {
        if code_string.is_empty() || text.is_empty() {
            return text.to_string();
        }

        if self.should_strip() {
            return strip_sgr_codes(text).into_owned();
        }

        wrap_full(code_string, text)
    }
}

/// Side effects on an output stream. When rendering is disabled, these write nothing and
/// return `Ok(0)`. They don't look at color support, only at the enabled flag.
impl Renderer {
    /// Turn `codes` on (`ESC[<codes>m`) on stdout and leave them on. In restricted
    /// console mode the console adapter applies them instead.
    ///
    /// # Errors
    ///
    /// Returns the underlying write or console adapter failure.
    pub fn set_attributes(&self, codes: &[Code]) -> TermColorResult<usize> {
        if let Some(adapter) = self.restricted_adapter() {
            tracing::trace!(message = "🪟 Set attributes via console adapter", codes = ?codes);
            return adapter.set(codes).map_err(TermColorError::console_adapter);
        }
        self.set_attributes_to(&mut io::stdout().lock(), codes)
    }

    /// Write `ESC[0m` to stdout. In restricted console mode the console adapter resets
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns the underlying write or console adapter failure.
    pub fn reset_attributes(&self) -> TermColorResult<usize> {
        if let Some(adapter) = self.restricted_adapter() {
            tracing::trace!(message = "🪟 Reset attributes via console adapter");
            return adapter.reset().map_err(TermColorError::console_adapter);
        }
        self.reset_attributes_to(&mut io::stdout().lock())
    }

    /// Print `text` styled with `codes` to stdout, like [`Renderer::render_string`]. In
    /// restricted console mode the console adapter prints it instead.
    ///
    /// # Errors
    ///
    /// Returns the underlying write or console adapter failure.
    pub fn print(&self, codes: &[Code], text: &str) -> TermColorResult<usize> {
        if let Some(adapter) = self.restricted_adapter() {
            return adapter.print(text, codes).map_err(TermColorError::console_adapter);
        }
        self.print_to(&mut io::stdout().lock(), codes, text)
    }

    /// Print `args` styled with `codes`, followed by a newline, to stdout, like
    /// [`Renderer::render_code`]. In restricted console mode the console adapter prints
    /// it instead.
    ///
    /// # Errors
    ///
    /// Returns the underlying write or console adapter failure.
    pub fn println(&self, codes: &[Code], args: &[&dyn Display]) -> TermColorResult<usize> {
        if let Some(adapter) = self.restricted_adapter() {
            let mut line = self.render_code("", args);
            line.push('\n');
            return adapter
                .print(&line, codes)
                .map_err(TermColorError::console_adapter);
        }
        self.println_to(&mut io::stdout().lock(), codes, args)
    }

    /// Same as [`Renderer::set_attributes`], but always writes escape text to `out`,
    /// regardless of console mode. An empty `codes` writes nothing.
    ///
    /// # Errors
    ///
    /// Returns the underlying write failure.
    pub fn set_attributes_to(
        &self,
        out: &mut impl Write,
        codes: &[Code],
    ) -> TermColorResult<usize> {
        if !self.is_enabled() {
            return Ok(0);
        }
        let sequence = wrap_set_only(&join_codes(codes));
        write_and_flush(out, &sequence)
    }

    /// Same as [`Renderer::reset_attributes`], but always writes escape text to `out`,
    /// regardless of console mode.
    ///
    /// # Errors
    ///
    /// Returns the underlying write failure.
    pub fn reset_attributes_to(&self, out: &mut impl Write) -> TermColorResult<usize> {
        if !self.is_enabled() {
            return Ok(0);
        }
        write_and_flush(out, RESET_SEQUENCE)
    }

    /// Same as [`Renderer::print`], but always writes to `out`, regardless of console
    /// mode. Unlike the attribute setters, this writes (stripped) text when disabled.
    ///
    /// # Errors
    ///
    /// Returns the underlying write failure.
    pub fn print_to(
        &self,
        out: &mut impl Write,
        codes: &[Code],
        text: &str,
    ) -> TermColorResult<usize> {
        let rendered = self.render_string(&join_codes(codes), text);
        write_and_flush(out, &rendered)
    }

    /// Same as [`Renderer::println`], but always writes to `out`, regardless of console
    /// mode.
    ///
    /// # Errors
    ///
    /// Returns the underlying write failure.
    pub fn println_to(
        &self,
        out: &mut impl Write,
        codes: &[Code],
        args: &[&dyn Display],
    ) -> TermColorResult<usize> {
        let mut line = self.render_code(&join_codes(codes), args);
        line.push('\n');
        write_and_flush(out, &line)
    }
}

fn write_and_flush(out: &mut impl Write, text: &str) -> TermColorResult<usize> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(TermColorError::write_to_output)?;
    Ok(text.len())
}

static GLOBAL_RENDERER: LazyLock<Renderer> = LazyLock::new(Renderer::from_env);

/// The process wide renderer used by the free functions below and by
/// [`crate::ColorRender`]. Its color support and console mode are detected on first
/// use.
///
/// # Testing support
///
/// Tests that call [`disable()`] or [`enable()`] mutate this shared instance, so
/// annotate them with `#[serial]` from the
/// [serial_test](https://crates.io/crates/serial_test) crate.
#[must_use]
pub fn global_renderer() -> &'static Renderer { &GLOBAL_RENDERER }

/// [`Renderer::render_code`] on the [`global_renderer()`].
#[must_use]
pub fn render_code(code_string: &str, args: &[&dyn Display]) -> String {
    global_renderer().render_code(code_string, args)
}

/// [`Renderer::render_string`] on the [`global_renderer()`].
#[must_use]
pub fn render_string(code_string: &str, text: &str) -> String {
    global_renderer().render_string(code_string, text)
}

/// [`Renderer::set_attributes`] on the [`global_renderer()`].
///
/// # Errors
///
/// Returns the underlying write or console adapter failure.
pub fn set_attributes(codes: &[Code]) -> TermColorResult<usize> {
    global_renderer().set_attributes(codes)
}

/// [`Renderer::reset_attributes`] on the [`global_renderer()`].
///
/// # Errors
///
/// Returns the underlying write or console adapter failure.
pub fn reset_attributes() -> TermColorResult<usize> { global_renderer().reset_attributes() }

/// [`Renderer::disable`] on the [`global_renderer()`].
pub fn disable() { global_renderer().disable(); }

/// [`Renderer::enable`] on the [`global_renderer()`].
pub fn enable() { global_renderer().enable(); }

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Legacy Windows consoles (`cmd.exe` without virtual terminal processing) print escape
//! sequences verbatim instead of interpreting them. In that "restricted" console mode,
//! setting and resetting attributes has to go through the console API instead. This
//! module decides, once, which mode the process is in, and defines the
//! [`ConsoleAttributes`] seam that the [`crate::Renderer`] routes through.
//!
//! More info:
//! - <https://learn.microsoft.com/en-us/windows/console/console-virtual-terminal-sequences>
//! - <https://docs.rs/winapi-util/latest/winapi_util/console/index.html>

use std::{fmt::Debug, io, sync::Arc};

use crate::Code;

/// Achieves the visual effect of SGR codes through platform console APIs rather than by
/// writing escape text. Each method returns the number of message bytes written (zero
/// for attribute only changes).
pub trait ConsoleAttributes: Debug + Send + Sync {
    /// Apply `codes`, and leave them on until [`ConsoleAttributes::reset`].
    ///
    /// # Errors
    ///
    /// Returns the console API or write failure, if any.
    fn set(&self, codes: &[Code]) -> io::Result<usize>;

    /// Restore the attributes the console had before this crate touched it.
    ///
    /// # Errors
    ///
    /// Returns the console API or write failure, if any.
    fn reset(&self) -> io::Result<usize>;

    /// Print `message` styled with `codes`, then reset.
    ///
    /// # Errors
    ///
    /// Returns the console API or write failure, if any.
    fn print(&self, message: &str, codes: &[Code]) -> io::Result<usize>;
}

/// Which kind of console the process writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleModeKind {
    /// Escape sequences are interpreted by the terminal.
    Ansi,
    /// Escape sequences are not interpreted; use [`ConsoleAttributes`].
    Restricted,
}

/// The console mode a [`crate::Renderer`] runs in. Decided once at construction.
#[derive(Debug, Clone)]
pub enum ConsoleMode {
    Ansi,
    Restricted(Arc<dyn ConsoleAttributes>),
}

impl ConsoleMode {
    #[must_use]
    pub fn kind(&self) -> ConsoleModeKind {
        match self {
            ConsoleMode::Ansi => ConsoleModeKind::Ansi,
            ConsoleMode::Restricted(_) => ConsoleModeKind::Restricted,
        }
    }

    #[must_use]
    pub fn restricted(adapter: impl ConsoleAttributes + 'static) -> Self {
        ConsoleMode::Restricted(Arc::new(adapter))
    }

    /// Detect the console mode of stdout, and if it is restricted, attach the platform
    /// adapter. Falls back to [`ConsoleMode::Ansi`] if the adapter can't be created.
    #[must_use]
    pub fn from_env() -> Self {
        let kind = detect_console_mode_kind();
        // % is Display, ? is Debug.
        tracing::debug!(message = "🪟 Detected console mode", console_mode = ?kind);
        match kind {
            ConsoleModeKind::Ansi => ConsoleMode::Ansi,
            ConsoleModeKind::Restricted => platform::try_create_stdout_adapter()
                .map_or(ConsoleMode::Ansi, ConsoleMode::Restricted),
        }
    }
}

/// Restricted mode only exists on Windows, when stdout is a console that can't be
/// switched into virtual terminal processing, and no ANSI capable host (`ANSICON`,
/// `ConEmu`, Windows Terminal, or a `TERM` aware shell like mintty) is detected.
#[must_use]
pub fn detect_console_mode_kind() -> ConsoleModeKind {
    if helpers::env_has_ansi_host() {
        return ConsoleModeKind::Ansi;
    }
    platform::detect_console_mode_kind()
}

mod helpers {
    use std::env;

    pub fn env_has_ansi_host() -> bool {
        env::var("ANSICON").is_ok()
            || env::var("ConEmuANSI").is_ok_and(|v| v == "ON")
            || env::var("WT_SESSION").is_ok()
            || env::var("TERM").is_ok()
    }
}

#[cfg(not(windows))]
mod platform {
    use std::sync::Arc;

    use super::{ConsoleAttributes, ConsoleModeKind};

    pub fn detect_console_mode_kind() -> ConsoleModeKind { ConsoleModeKind::Ansi }

    pub fn try_create_stdout_adapter() -> Option<Arc<dyn ConsoleAttributes>> { None }
}

#[cfg(windows)]
mod platform {
    use std::sync::Arc;

    use winapi_util::console as wincon;

    use super::{ConsoleAttributes, ConsoleModeKind, WindowsConsole};

    pub fn detect_console_mode_kind() -> ConsoleModeKind {
        match wincon::Console::stdout() {
            Ok(mut con) => {
                if con.set_virtual_terminal_processing(true).is_ok() {
                    ConsoleModeKind::Ansi
                } else {
                    ConsoleModeKind::Restricted
                }
            }
            // Not a console (eg: redirected to a file or pipe), so nothing to emulate.
            Err(_) => ConsoleModeKind::Ansi,
        }
    }

    pub fn try_create_stdout_adapter() -> Option<Arc<dyn ConsoleAttributes>> {
        WindowsConsole::stdout()
            .ok()
            .map(|it| Arc::new(it) as Arc<dyn ConsoleAttributes>)
    }
}

#[cfg(windows)]
pub use windows_console::WindowsConsole;

#[cfg(windows)]
mod windows_console {
    use std::{io::{self, Write as _},
              sync::Mutex};

    use winapi_util::console::{self as wincon, Intense};

    use super::ConsoleAttributes;
    use crate::Code;

    /// [`ConsoleAttributes`] backed by the Win32 console API for stdout.
    pub struct WindowsConsole {
        console: Mutex<wincon::Console>,
    }

    impl std::fmt::Debug for WindowsConsole {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("WindowsConsole").finish_non_exhaustive()
        }
    }

    impl WindowsConsole {
        /// # Errors
        ///
        /// Returns an error if stdout is not attached to a console.
        pub fn stdout() -> io::Result<Self> {
            Ok(Self {
                console: Mutex::new(wincon::Console::stdout()?),
            })
        }

        fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, wincon::Console>> {
            self.console
                .lock()
                .map_err(|_| io::Error::other("console lock poisoned"))
        }
    }

    /// Which console call a single code turns into. Codes the console API can't express
    /// (italic, blink, etc.) are skipped.
    enum ConsoleOp {
        Fg(Intense, wincon::Color),
        Bg(Intense, wincon::Color),
        Reset,
    }

    fn to_console_op(code: Code) -> Option<ConsoleOp> {
        match code.0 {
            0 | 39 | 49 => Some(ConsoleOp::Reset),
            30..=37 => Some(ConsoleOp::Fg(Intense::No, to_color(code.0 - 30))),
            90..=97 => Some(ConsoleOp::Fg(Intense::Yes, to_color(code.0 - 90))),
            40..=47 => Some(ConsoleOp::Bg(Intense::No, to_color(code.0 - 40))),
            100..=107 => Some(ConsoleOp::Bg(Intense::Yes, to_color(code.0 - 100))),
            _ => None,
        }
    }

    /// SGR color offset (black, red, green, yellow, blue, magenta, cyan, white).
    #[rustfmt::skip]
    fn to_color(offset: u8) -> wincon::Color {
        match offset {
            0 => wincon::Color::Black,
            1 => wincon::Color::Red,
            2 => wincon::Color::Green,
            3 => wincon::Color::Yellow,
            4 => wincon::Color::Blue,
            5 => wincon::Color::Magenta,
            6 => wincon::Color::Cyan,
            _ => wincon::Color::White,
        }
    }

    fn apply(console: &mut wincon::Console, codes: &[Code]) -> io::Result<()> {
        for op in codes.iter().copied().filter_map(to_console_op) {
            match op {
                ConsoleOp::Fg(intense, color) => console.fg(intense, color)?,
                ConsoleOp::Bg(intense, color) => console.bg(intense, color)?,
                ConsoleOp::Reset => console.reset()?,
            }
        }
        Ok(())
    }

    impl ConsoleAttributes for WindowsConsole {
        fn set(&self, codes: &[Code]) -> io::Result<usize> {
            apply(&mut *self.lock()?, codes)?;
            Ok(0)
        }

        fn reset(&self) -> io::Result<usize> {
            self.lock()?.reset()?;
            Ok(0)
        }

        fn print(&self, message: &str, codes: &[Code]) -> io::Result<usize> {
            let mut console = self.lock()?;
            apply(&mut console, codes)?;
            let mut stdout = io::stdout().lock();
            let result = stdout
                .write_all(message.as_bytes())
                .and_then(|()| stdout.flush());
            // Always restore the console, even if the write failed.
            console.reset()?;
            result.map(|()| message.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[derive(Debug)]
    struct NoopConsole;

    impl ConsoleAttributes for NoopConsole {
        fn set(&self, _codes: &[Code]) -> io::Result<usize> { Ok(0) }

        fn reset(&self) -> io::Result<usize> { Ok(0) }

        fn print(&self, message: &str, _codes: &[Code]) -> io::Result<usize> {
            Ok(message.len())
        }
    }

    #[test]
    fn test_console_mode_kind() {
        assert_eq!(ConsoleMode::Ansi.kind(), ConsoleModeKind::Ansi);
        assert_eq!(
            ConsoleMode::restricted(NoopConsole).kind(),
            ConsoleModeKind::Restricted
        );
    }

    #[test]
    #[serial]
    fn test_ansi_host_env_var_means_ansi() {
        let saved = std::env::var("WT_SESSION").ok();
        unsafe {
            std::env::set_var("WT_SESSION", "1");
        }
        let kind = detect_console_mode_kind();
        unsafe {
            match saved {
                Some(it) => std::env::set_var("WT_SESSION", it),
                None => std::env::remove_var("WT_SESSION"),
            }
        }
        assert_eq!(kind, ConsoleModeKind::Ansi);
    }

    #[cfg(not(windows))]
    #[test]
    #[serial]
    fn test_never_restricted_off_windows() {
        assert_eq!(detect_console_mode_kind(), ConsoleModeKind::Ansi);
        assert_eq!(ConsoleMode::from_env().kind(), ConsoleModeKind::Ansi);
    }
}

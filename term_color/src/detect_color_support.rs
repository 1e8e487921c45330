// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://no-color.org/>
//! - <https://bixense.com/clicolors/>
//! - <https://github.com/termstandard/colors>
//! - <https://unix.stackexchange.com/a/67540/302646>

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// Memoized answer to "does this environment support ANSI color", plus an override.
///
/// Detection looks at a handful of environment variables and whether stdout is a TTY.
/// That is cheap once, but not something to redo on every render call, so the result of
/// the first [`detect()`] is cached until [`clear_cache()`] is called.
///
/// Two global atomic variables manage the detection state:
/// - `COLOR_SUPPORT_GLOBAL`: Explicit override values (highest priority)
/// - `COLOR_SUPPORT_CACHED`: Memoized detection results
pub mod global_color_support {
    use super::{AtomicI8, ColorSupport, Ordering, Stream,
                examine_env_vars_to_determine_color_support};

    static COLOR_SUPPORT_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static COLOR_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// 1. If [`set_override`] was called, return that value.
    /// 2. If detection already ran, return the cached result.
    /// 3. Otherwise run [`examine_env_vars_to_determine_color_support`] for stdout, cache
    ///    and return the result.
    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Ok(it) = try_get_override() {
            return it;
        }

        if let Ok(cached) = try_get_cached() {
            return cached;
        }

        let detected = examine_env_vars_to_determine_color_support(Stream::Stdout);
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🎨 Detected color support",
            color_support = ?detected
        );
        set_cached(detected);
        detected
    }

    /// Override the color support. Regardless of the value of the environment variables
    /// the value you set here will be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
    /// function. In any test in which this function is called, please use the `#[serial]`
    /// attribute to annotate that test. Otherwise there will be flakiness in the test
    /// results (tests are run in parallel using many threads).
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_GLOBAL.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { COLOR_SUPPORT_GLOBAL.store(NOT_SET_VALUE, Ordering::Release); }

    /// Clear the cached detection result, forcing re-detection on the next call.
    pub fn clear_cache() { COLOR_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if no cached value has been set yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_CACHED.load(Ordering::Acquire))
    }

    fn set_cached(value: ColorSupport) {
        COLOR_SUPPORT_CACHED.store(i8::from(value), Ordering::Release);
    }

    /// # Errors
    ///
    /// Returns `Err(())` if no override value has been set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_GLOBAL.load(Ordering::Acquire))
    }
}

/// Determine whether color is supported heuristically. This is based on the environment
/// variables, and whether `stream` is attached to a terminal.
///
/// Prefer [`global_color_support::detect()`], which only runs this once.
///
/// 1. `NO_COLOR`, `TERM=dumb`, or not a TTY (unless `IGNORE_IS_TERMINAL` is set) turn
///    color off.
/// 2. Windows consoles are assumed to support color. Legacy consoles that don't are
///    handled by [`crate::ConsoleAttributes`] instead of escape sequences.
/// 3. `COLORTERM`, a color capable `TERM`, `CLICOLOR`, or running in CI turn color on.
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    if helpers::env_no_color()
        || env::var("TERM").is_ok_and(|v| v == "dumb")
        || !(helpers::is_a_tty(stream)
            || env::var("IGNORE_IS_TERMINAL").is_ok_and(|v| v != "0"))
    {
        return ColorSupport::NoColor;
    }

    if env::consts::OS == "windows" {
        return ColorSupport::Ansi;
    }

    if env::var("COLORTERM").is_ok()
        || env::var("TERM").is_ok_and(|term| helpers::check_ansi_color(&term))
        || env::var("CLICOLOR").is_ok_and(|v| v != "0")
        || is_ci::uncached()
    {
        return ColorSupport::Ansi;
    }

    ColorSupport::NoColor
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The result of the color support check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Ansi,
    NoColor,
}

impl ColorSupport {
    #[must_use]
    pub fn is_supported(self) -> bool { matches!(self, ColorSupport::Ansi) }
}

impl From<bool> for ColorSupport {
    fn from(supported: bool) -> Self {
        if supported {
            ColorSupport::Ansi
        } else {
            ColorSupport::NoColor
        }
    }
}

/// These trait implementations allow us to use `ColorSupport` and `i8` interchangeably.
mod convert_between_color_and_i8 {
    impl TryFrom<i8> for super::ColorSupport {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorSupport::Ansi),
                2 => Ok(super::ColorSupport::NoColor),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorSupport) -> Self {
            match value {
                super::ColorSupport::Ansi    => 1,
                super::ColorSupport::NoColor => 2,
            }
        }
    }
}

mod helpers {
    use super::{Stream, env};

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        use std::io::IsTerminal;
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("vscode")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }

    #[must_use]
    pub fn env_no_color() -> bool {
        match env::var("NO_COLOR").as_deref() {
            Ok("0") | Err(_) => false,
            Ok(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use test_case::test_case;

    use super::*;

    #[test]
    #[serial]
    fn cycle_1() {
        global_color_support::set_override(ColorSupport::Ansi);
        assert_eq!(
            global_color_support::try_get_override(),
            Ok(ColorSupport::Ansi)
        );
        assert_eq!(global_color_support::detect(), ColorSupport::Ansi);
        global_color_support::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_2() {
        global_color_support::set_override(ColorSupport::NoColor);
        assert_eq!(
            global_color_support::try_get_override(),
            Ok(ColorSupport::NoColor)
        );
        assert_eq!(global_color_support::detect(), ColorSupport::NoColor);
        global_color_support::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_3() {
        global_color_support::clear_override();
        assert_eq!(global_color_support::try_get_override(), Err(()));
    }

    #[test]
    #[serial]
    fn test_caching_behavior() {
        global_color_support::clear_override();
        global_color_support::clear_cache();

        // First call should detect and cache.
        let first_result = global_color_support::detect();
        assert_eq!(global_color_support::try_get_cached(), Ok(first_result));

        // Second call should return the same cached result.
        let second_result = global_color_support::detect();
        assert_eq!(first_result, second_result);

        global_color_support::clear_cache();
        assert!(global_color_support::try_get_cached().is_err());
    }

    #[test]
    #[serial]
    fn test_no_color_env_var_wins() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("IGNORE_IS_TERMINAL", "1");
            std::env::set_var("COLORTERM", "truecolor");
        }
        let result = examine_env_vars_to_determine_color_support(Stream::Stdout);
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("IGNORE_IS_TERMINAL");
            std::env::remove_var("COLORTERM");
        }
        assert_eq!(result, ColorSupport::NoColor);
    }

    #[test]
    #[serial]
    fn test_dumb_term() {
        let saved_term = std::env::var("TERM").ok();
        unsafe {
            std::env::set_var("TERM", "dumb");
            std::env::set_var("IGNORE_IS_TERMINAL", "1");
        }
        let result = examine_env_vars_to_determine_color_support(Stream::Stdout);
        unsafe {
            match saved_term {
                Some(term) => std::env::set_var("TERM", term),
                None => std::env::remove_var("TERM"),
            }
            std::env::remove_var("IGNORE_IS_TERMINAL");
        }
        assert_eq!(result, ColorSupport::NoColor);
    }

    #[test]
    #[serial]
    fn test_colorterm_with_ignore_is_terminal() {
        let saved_no_color = std::env::var("NO_COLOR").ok();
        let saved_term = std::env::var("TERM").ok();
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("TERM", "xterm-256color");
            std::env::set_var("IGNORE_IS_TERMINAL", "1");
            std::env::set_var("COLORTERM", "truecolor");
        }
        let result = examine_env_vars_to_determine_color_support(Stream::Stdout);
        unsafe {
            if let Some(it) = saved_no_color {
                std::env::set_var("NO_COLOR", it);
            }
            match saved_term {
                Some(term) => std::env::set_var("TERM", term),
                None => std::env::remove_var("TERM"),
            }
            std::env::remove_var("IGNORE_IS_TERMINAL");
            std::env::remove_var("COLORTERM");
        }
        assert_eq!(result, ColorSupport::Ansi);
    }

    #[test_case("xterm-256color", true)]
    #[test_case("screen", true)]
    #[test_case("vt100", true)]
    #[test_case("linux", true)]
    #[test_case("vscode", true)]
    #[test_case("dumb", false)]
    #[test_case("", false)]
    fn test_check_ansi_color(term: &str, expected: bool) {
        assert_eq!(helpers::check_ansi_color(term), expected);
    }

    #[test]
    fn test_i8_round_trip_rejects_unset() {
        assert_eq!(ColorSupport::try_from(-1_i8), Err(()));
        assert_eq!(ColorSupport::try_from(i8::from(ColorSupport::NoColor)), Ok(ColorSupport::NoColor));
    }
}

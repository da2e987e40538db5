//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(json_flag: bool, format_flag: Option<&str>) -> Self {
        Self::detect(std::io::stdout().is_terminal(), json_flag, format_flag)
    }

    /// Context for messages written to stderr.
    pub fn for_stderr() -> Self {
        Self::detect(std::io::stderr().is_terminal(), false, None)
    }

    fn detect(is_tty: bool, json_flag: bool, format_flag: Option<&str>) -> Self {
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        Self::resolve(is_tty, term_is_dumb, no_color_env, json_flag, format_flag)
    }

    fn resolve(
        is_tty: bool,
        term_is_dumb: bool,
        no_color_env: bool,
        json_flag: bool,
        format_flag: Option<&str>,
    ) -> Self {
        Self {
            color: is_tty && !no_color_env && !term_is_dumb,
            unicode: !term_is_dumb,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb),
        }
    }
}

/// Get terminal width, falling back to 80.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: ioctl succeeded, so winsize was filled in
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, None);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_mode_follows_the_stream_tty() {
        let tty = UiContext::resolve(true, false, false, false, None);
        assert!(tty.mode.is_pretty());
        assert!(tty.color);

        let piped = UiContext::resolve(false, false, false, false, None);
        assert!(!piped.mode.is_pretty());
        assert!(!piped.color);
    }

    #[test]
    fn test_width_has_default() {
        let ctx = UiContext::from_env(false, None);
        assert!(ctx.width > 0);
    }
}

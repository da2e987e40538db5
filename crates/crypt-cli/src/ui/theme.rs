//! Badges and text styles.

use owo_colors::{OwoColorize, Style};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Badge text, with a symbol when unicode is allowed.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::ok(),
            Self::Warn => styles::warn(),
            Self::Err => styles::err(),
        }
    }
}

pub mod styles {
    use owo_colors::Style;

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn ok() -> Style {
        Style::new().green().bold()
    }

    pub fn warn() -> Style {
        Style::new().yellow().bold()
    }

    pub fn err() -> Style {
        Style::new().red().bold()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("hi", styles::dim(), false), "hi");
    }

    #[test]
    fn test_styled_with_color_wraps() {
        let out = styled("hi", styles::err(), true);
        assert!(out.contains("hi"));
        assert!(out.starts_with('\u{1b}'));
    }
}

//! Colour handling for the text route renderer.

/// Escape sequences for the route listing.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Green badge in front of the first intersection.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Magenta badge in front of the destination.
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";
    /// Route coordinates.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Visit summary line.
    pub const GRAY: &str = "\x1b[90m";
}

/// Styles applied by `write_route_text`; every field is empty when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_goal: colors::TAG_GOAL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
        }
    }

    /// Palette for the current process environment.
    #[must_use]
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let term = std::env::var("TERM").ok();
        Self::for_terminal(no_color, term.as_deref())
    }

    /// Colour stays on unless `NO_COLOR` is set or the terminal is `dumb`.
    #[must_use]
    pub fn for_terminal(no_color: bool, term: Option<&str>) -> Self {
        let dumb = term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        if no_color || dumb {
            Self::plain()
        } else {
            Self::colored()
        }
    }
}

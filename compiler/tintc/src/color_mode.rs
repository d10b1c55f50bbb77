//! Terminal color selection.
//!
//! Precedence: `--color=MODE` flag, then the `TINT_COLOR` environment
//! variable, then `auto`.

use std::str::FromStr;

use crate::CliError;

/// Environment variable consulted when no `--color` flag is given.
pub const ENV_VAR: &str = "TINT_COLOR";

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output stream is a terminal.
    #[default]
    Auto,
    /// Always emit ANSI escapes.
    Always,
    /// Never emit ANSI escapes.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Pick the mode from the flag value and the environment value.
    ///
    /// An empty environment value counts as unset; an invalid flag or
    /// environment value is an error rather than a silent default.
    pub fn select(flag: Option<&str>, env: Option<&str>) -> Result<Self, CliError> {
        match (flag, env) {
            (Some(value), _) => value.parse(),
            (None, Some(value)) if !value.is_empty() => value.parse(),
            _ => Ok(ColorMode::Auto),
        }
    }
}

impl FromStr for ColorMode {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(CliError::InvalidColorMode(s.to_owned())),
        }
    }
}

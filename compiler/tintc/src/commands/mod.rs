//! Command handlers for the `tint` CLI.
//!
//! Each submodule implements one command. Handlers take the markup as a
//! string and write to any `Write`, so they are tested without touching the
//! terminal. Reading input lives here in the module root.

use std::io::Read;

use crate::cli::Input;
use crate::CliError;

mod check;
mod palette;
mod render;
mod runs;

pub use check::check_markup;
pub use palette::write_palette;
pub use render::{render_ansi, write_plain};
pub use runs::write_runs;

/// ANSI escape sequences shared by the handlers.
mod ansi {
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const LOCATION: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";

    /// 24-bit foreground.
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{r};{g};{b}m")
    }

    /// 24-bit background.
    pub fn bg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[48;2;{r};{g};{b}m")
    }
}

/// Read markup from a file or stdin.
pub fn read_input(input: &Input) -> Result<String, CliError> {
    match input {
        Input::Path(path) => {
            std::fs::read_to_string(path).map_err(|err| CliError::read(path, err))
        }
        Input::Stdin => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| CliError::read(input.display_name(), err))?;
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests;

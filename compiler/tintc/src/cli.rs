//! Argument parsing and command dispatch.

use std::io::Write;

use tracing::debug;

use crate::color_mode::ColorMode;
use crate::commands::{
    check_markup, read_input, render_ansi, write_palette, write_plain, write_runs,
};
use crate::CliError;

pub const USAGE_RUNS: &str = "tint runs <file|->";
pub const USAGE_RENDER: &str = "tint render <file|-> [--color=MODE]";
pub const USAGE_CHECK: &str = "tint check <file|-> [--color=MODE]";
pub const USAGE_STRIP: &str = "tint strip <file|->";

/// Where markup is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(String),
}

impl Input {
    fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::Path(arg.to_owned())
        }
    }

    /// Name used in messages.
    pub fn display_name(&self) -> &str {
        match self {
            Input::Stdin => "<stdin>",
            Input::Path(path) => path,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print runs as JSON.
    Runs(Input),
    /// Print runs with 24-bit ANSI foreground colors.
    Render(Input),
    /// Report markup issues.
    Check(Input),
    /// Print the text with directives removed.
    Strip(Input),
    /// List the palette.
    Palette,
    Help,
    Version,
}

impl Command {
    /// `check` reports go to stderr like compiler diagnostics; everything
    /// else is program output.
    pub fn writes_to_stderr(&self) -> bool {
        matches!(self, Command::Check(_))
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub color: ColorMode,
}

impl Invocation {
    /// Parse arguments (without the program name).
    ///
    /// `env_color` is the value of [`ENV_VAR`](crate::color_mode::ENV_VAR),
    /// passed in so parsing stays independent of the process environment.
    pub fn parse(args: &[String], env_color: Option<&str>) -> Result<Self, CliError> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Invocation {
                command: Command::Help,
                color: ColorMode::select(None, env_color)?,
            });
        };

        let mut color_flag = None;
        let mut positional = Vec::new();
        for arg in rest {
            if let Some(value) = arg.strip_prefix("--color=") {
                color_flag = Some(value);
            } else if arg == "-" || !arg.starts_with('-') {
                positional.push(arg.as_str());
            } else {
                return Err(CliError::UnexpectedArgument(arg.clone()));
            }
        }
        let color = ColorMode::select(color_flag, env_color)?;

        let command = match name.as_str() {
            "runs" => Command::Runs(single_input(&positional, USAGE_RUNS)?),
            "render" => Command::Render(single_input(&positional, USAGE_RENDER)?),
            "check" => Command::Check(single_input(&positional, USAGE_CHECK)?),
            "strip" => Command::Strip(single_input(&positional, USAGE_STRIP)?),
            "palette" => {
                no_positionals(&positional)?;
                Command::Palette
            }
            "help" | "--help" | "-h" => Command::Help,
            "version" | "--version" | "-V" => Command::Version,
            other => return Err(CliError::UnknownCommand(other.to_owned())),
        };
        Ok(Invocation { command, color })
    }

    /// Run the command, writing to `out`.
    ///
    /// `is_tty` describes `out` and only matters for [`ColorMode::Auto`].
    /// Returns the number of markup issues found (non-zero only for `check`).
    pub fn execute<W: Write + ?Sized>(
        &self,
        out: &mut W,
        is_tty: bool,
    ) -> Result<usize, CliError> {
        let colors = self.color.should_use_colors(is_tty);
        debug!(command = ?self.command, colors, "executing");

        match &self.command {
            Command::Runs(input) => {
                let source = read_input(input)?;
                write_runs(out, &source)?;
            }
            Command::Render(input) => {
                let source = read_input(input)?;
                render_ansi(out, &source, colors)?;
            }
            Command::Check(input) => {
                let source = read_input(input)?;
                return check_markup(out, &source, input.display_name(), colors);
            }
            Command::Strip(input) => {
                let source = read_input(input)?;
                write_plain(out, &source)?;
            }
            Command::Palette => write_palette(out, colors)?,
            Command::Help => write_usage(out)?,
            Command::Version => {
                writeln!(out, "tint {}", env!("CARGO_PKG_VERSION"))?;
            }
        }
        Ok(0)
    }
}

fn single_input(positional: &[&str], usage: &'static str) -> Result<Input, CliError> {
    match positional {
        [] => Err(CliError::MissingInput(usage)),
        [path] => Ok(Input::from_arg(path)),
        [_, extra, ..] => Err(CliError::UnexpectedArgument((*extra).to_owned())),
    }
}

fn no_positionals(positional: &[&str]) -> Result<(), CliError> {
    match positional.first() {
        Some(extra) => Err(CliError::UnexpectedArgument((*extra).to_owned())),
        None => Ok(()),
    }
}

/// Print `error: <message>`, followed by the usage text when the command
/// name itself was wrong.
pub fn report_error<W: Write + ?Sized>(out: &mut W, err: &CliError) -> std::io::Result<()> {
    writeln!(out, "error: {err}")?;
    if matches!(err, CliError::UnknownCommand(_)) {
        writeln!(out)?;
        write_usage(out)?;
    }
    Ok(())
}

pub fn write_usage<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "tint: inline color markup tool")?;
    writeln!(out)?;
    writeln!(out, "Usage: tint <command> [options]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  runs <file|->      Print colored runs as JSON")?;
    writeln!(out, "  render <file|->    Render markup with terminal colors")?;
    writeln!(out, "  check <file|->     Report markup issues (exit 1 if any)")?;
    writeln!(out, "  strip <file|->     Print text with directives removed")?;
    writeln!(out, "  palette            List palette names and colors")?;
    writeln!(out, "  help               Show this help message")?;
    writeln!(out, "  version            Show version information")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  --color=MODE       auto, always, or never (default: auto)")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(out, "  TINT_COLOR         Color mode when --color is not given")?;
    writeln!(out, "  RUST_LOG           Enable tracing (e.g. tint_markup=trace)")?;
    Ok(())
}

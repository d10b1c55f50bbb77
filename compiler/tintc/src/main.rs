//! tint CLI
//!
//! Inspect, render, and lint inline color markup.

use std::io::{IsTerminal, Write};

use tintc::cli::report_error;
use tintc::color_mode::ENV_VAR;
use tintc::{init_tracing, CliError, Invocation};
use tracing::debug;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_color = std::env::var(ENV_VAR).ok();

    match run(&args, env_color.as_deref()) {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            if let Err(io_err) = report_error(&mut std::io::stderr().lock(), &err) {
                debug!(%io_err, "failed to report error");
            }
            std::process::exit(1);
        }
    }
}

fn run(args: &[String], env_color: Option<&str>) -> Result<usize, CliError> {
    let invocation = Invocation::parse(args, env_color)?;

    if invocation.command.writes_to_stderr() {
        let stderr = std::io::stderr();
        let is_tty = stderr.is_terminal();
        let mut out = stderr.lock();
        let issues = invocation.execute(&mut out, is_tty)?;
        out.flush()?;
        Ok(issues)
    } else {
        let stdout = std::io::stdout();
        let is_tty = stdout.is_terminal();
        let mut out = stdout.lock();
        let issues = invocation.execute(&mut out, is_tty)?;
        out.flush()?;
        Ok(issues)
    }
}

use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;

use crate::locate;

/// Everything after `run` (and the optional leading `--exe`) is forwarded, so
/// `run` has no help or version flag of its own.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Run this executable instead of the bundled one.
    #[arg(long)]
    exe: Option<PathBuf>,
    /// Arguments passed through to the executable.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub(crate) args: Vec<OsString>,
}

/// The command line as announced before running it.
fn command_line(exe: &Path, args: &[OsString]) -> String {
    let mut line = exe.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

pub fn main(args: Args) -> Result<i32> {
    let exe = locate::locate(args.exe.as_deref(), &locate::launcher_dir()?)?;

    println!("Executing: {}", command_line(&exe, &args.args));
    let status = Command::new(&exe)
        .args(&args.args)
        .status()
        .context("failed to execute command")?;

    match status.code() {
        Some(code) => Ok(code),
        None => {
            log::warn!("{} was terminated by a signal", exe.display());
            Ok(1)
        }
    }
}

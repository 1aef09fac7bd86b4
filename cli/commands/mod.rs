use anyhow::Result;
use clap::Subcommand;

mod build;
mod run;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the bundled argecho executable.
    Run(run::Args),
    /// Build argecho and install it next to the launcher.
    Build(build::Args),
}

/// Runs a subcommand and returns the exit code for the launcher.
pub fn run_command(command: Command) -> Result<i32> {
    match command {
        Command::Run(args) => run::main(args),
        Command::Build(args) => build::main(args),
    }
}

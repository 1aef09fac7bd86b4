use clap::Parser;

#[macro_use]
mod print;

mod cargo;
mod commands;
mod locate;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print debug logs (overrides AXE_LOG). Must come before the subcommand.
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: commands::Command,
}

fn main() {
    let args = Cli::parse();
    print::init(args.verbose);

    let code = match commands::run_command(args.command) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{:#}", err);
            1
        }
    };

    std::process::exit(code);
}

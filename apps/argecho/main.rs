use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<_> = std::env::args_os().collect();

    let mut stdout = std::io::stdout().lock();
    // Like an unchecked printf, a failed write (e.g. a closed pipe) does not
    // change the exit status.
    let _ = argecho::write_report(&mut stdout, &args).and_then(|()| stdout.flush());

    ExitCode::SUCCESS
}

use log::Level;
use log::LevelFilter;
use log::Log;
use log::Metadata;
use log::Record;

pub const RESET: &str = "\x1b[0m";
pub const BOLD_CYAN: &str = "\x1b[1;96m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[96m";

/// Prints a status line like `     GEN bin/argecho` to stderr.
macro_rules! progress {
    ($label:expr, $value:expr) => {
        eprintln!(
            "{}{:>8}{} {}",
            $crate::print::BOLD_CYAN,
            $label,
            $crate::print::RESET,
            $value
        );
    };
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (color, label) = match record.level() {
            Level::Error => (RED, "error"),
            Level::Warn => (YELLOW, "warn"),
            Level::Info => (CYAN, "info"),
            Level::Debug => (RESET, "debug"),
            Level::Trace => (RESET, "trace"),
        };

        eprintln!("{}{}:{} {}", color, label, RESET, record.args());
    }

    fn flush(&self) {}
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Installs the stderr logger. The level comes from `AXE_LOG` unless
/// `verbose` is set.
pub fn init(verbose: bool) {
    static LOGGER: StderrLogger = StderrLogger;

    // Only fails if a logger is already installed.
    let _ = log::set_logger(&LOGGER);

    let level = if verbose {
        LevelFilter::Debug
    } else {
        parse_level(std::env::var("AXE_LOG").ok().as_deref())
    };
    log::set_max_level(level);
}

//! The invocation report printed by `argecho`.
//!
//! The format is fixed:
//!
//! ```text
//! Hello from C executable!
//! Received N arguments:
//!   argv[0]: <value0>
//!   argv[1]: <value1>
//! ```
//!
//! where `N` counts every argument, the invocation name included.

use std::ffi::OsStr;
use std::io;
use std::io::Write;

/// The first line of every report.
pub const GREETING: &str = "Hello from C executable!";

/// Writes the report for `args` to `out`.
///
/// Arguments are written as-is: no quoting, no escaping, no validation. On
/// Unix the raw bytes of each argument are written, so non-UTF-8 arguments
/// round-trip exactly.
pub fn write_report<W, S>(out: &mut W, args: &[S]) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<OsStr>,
{
    writeln!(out, "{}", GREETING)?;
    writeln!(out, "Received {} arguments:", args.len())?;
    for (i, arg) in args.iter().enumerate() {
        write!(out, "  argv[{}]: ", i)?;
        write_os_str(out, arg.as_ref())?;
        out.write_all(b"\n")?;
    }

    Ok(())
}

/// Renders the report into a buffer.
pub fn render_report<S: AsRef<OsStr>>(args: &[S]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64 + args.len() * 32);
    write_report(&mut buf, args).expect("writing to a Vec never fails");
    buf
}

#[cfg(unix)]
fn write_os_str<W: Write + ?Sized>(out: &mut W, s: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(s.as_bytes())
}

#[cfg(not(unix))]
fn write_os_str<W: Write + ?Sized>(out: &mut W, s: &OsStr) -> io::Result<()> {
    out.write_all(s.to_string_lossy().as_bytes())
}

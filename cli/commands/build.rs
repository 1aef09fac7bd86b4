use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;

use crate::cargo;
use crate::locate;

#[derive(Parser, Debug)]
pub struct Args {
    /// Where to install the executable (default: `bin` next to the launcher).
    #[arg(long)]
    target_dir: Option<PathBuf>,
    /// Build with the release profile.
    #[arg(long)]
    release: bool,
}

/// Copies `src` into `target_dir`, replacing any previous install atomically.
fn install(src: &Path, target_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(target_dir)
        .with_context(|| format!("failed to mkdir: {}", target_dir.display()))?;

    let dest = target_dir.join(locate::exe_file_name());
    let mut src_file =
        File::open(src).with_context(|| format!("failed to open {}", src.display()))?;
    let mut tmpfile = tempfile::NamedTempFile::new_in(target_dir)
        .context("failed to create temporary file")?;
    io::copy(&mut src_file, &mut tmpfile)
        .with_context(|| format!("failed to copy {}", src.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmpfile
            .as_file()
            .set_permissions(fs::Permissions::from_mode(0o755))
            .context("failed to make the executable runnable")?;
    }

    tmpfile
        .persist(&dest)
        .with_context(|| format!("failed to persist {}", dest.display()))?;
    Ok(dest)
}

pub fn main(args: Args) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let root = cargo::find_workspace_root(&cwd)?;
    log::info!("building argecho in {}", root.display());
    let built = cargo::build_argecho(&root, args.release)?;

    let target_dir = match args.target_dir {
        Some(dir) => dir,
        None => locate::launcher_dir()?.join("bin"),
    };

    let dest = install(&built, &target_dir)?;
    progress!("GEN", dest.display());
    Ok(0)
}

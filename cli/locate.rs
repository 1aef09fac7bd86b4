//! Finds the bundled `argecho` executable.
//!
//! `axe build` installs the executable into a `bin` directory next to the
//! launcher, so that is searched first. A copy sitting right next to the
//! launcher (as `cargo build` leaves it in `target/<profile>`) is the fallback.

use std::env::consts::EXE_SUFFIX;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("{} is not a file", .0.display())]
    Missing(PathBuf),
    #[error(
        "could not find the bundled argecho executable (searched: {})",
        display_paths(.0)
    )]
    NotFound(Vec<PathBuf>),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `argecho`, plus `.exe` on Windows.
pub fn exe_file_name() -> String {
    format!("argecho{}", EXE_SUFFIX)
}

/// The directory containing the running launcher.
pub fn launcher_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to get the launcher path")?;
    let dir = exe
        .parent()
        .with_context(|| format!("{} has no parent directory", exe.display()))?;
    Ok(dir.to_path_buf())
}

/// Candidate paths, in search order.
pub fn candidates(launcher_dir: &Path) -> Vec<PathBuf> {
    let name = exe_file_name();
    vec![launcher_dir.join("bin").join(&name), launcher_dir.join(name)]
}

/// Returns `explicit` if it is a file, otherwise the first existing file in
/// `bin/argecho`, then `argecho`, under `launcher_dir`.
pub fn locate(explicit: Option<&Path>, launcher_dir: &Path) -> Result<PathBuf, LocateError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }

        return Err(LocateError::Missing(path.to_path_buf()));
    }

    let candidates = candidates(launcher_dir);
    for candidate in &candidates {
        log::debug!("looking for {}", candidate.display());
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    Err(LocateError::NotFound(candidates))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn prefers_bin_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("bin")).unwrap();
        fs::write(dir.path().join("bin").join(exe_file_name()), b"").unwrap();
        fs::write(dir.path().join(exe_file_name()), b"").unwrap();

        let found = locate(None, dir.path()).unwrap();
        assert_eq!(found, dir.path().join("bin").join(exe_file_name()));
    }

    #[test]
    fn falls_back_to_sibling() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(exe_file_name()), b"").unwrap();

        let found = locate(None, dir.path()).unwrap();
        assert_eq!(found, dir.path().join(exe_file_name()));
    }

    #[test]
    fn directory_named_like_the_executable_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("bin").join(exe_file_name())).unwrap();
        fs::write(dir.path().join(exe_file_name()), b"").unwrap();

        let found = locate(None, dir.path()).unwrap();
        assert_eq!(found, dir.path().join(exe_file_name()));
    }

    #[test]
    fn not_found_lists_every_candidate() {
        let dir = tempfile::tempdir().unwrap();

        match locate(None, dir.path()) {
            Err(LocateError::NotFound(searched)) => {
                assert_eq!(searched, candidates(dir.path()));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("custom");
        fs::write(&exe, b"").unwrap();

        assert_eq!(locate(Some(exe.as_path()), Path::new("/nonexistent")).unwrap(), exe);

        let missing = dir.path().join("missing");
        assert!(matches!(
            locate(Some(missing.as_path()), dir.path()),
            Err(LocateError::Missing(path)) if path == missing
        ));
    }
}

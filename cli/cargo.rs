use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use log::Level;
use serde_json::Value;

/// Walks up from `start` to the workspace containing the argecho crate.
pub fn find_workspace_root(start: &Path) -> Result<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let manifest = dir.join("apps").join("argecho").join("Cargo.toml");
        if let Ok(contents) = fs::read_to_string(&manifest) {
            if contents.contains("name = \"argecho\"") {
                return Ok(dir);
            }
        }

        if !dir.pop() {
            break;
        }
    }

    bail!(
        "failed to locate the argecho workspace from {}",
        start.display()
    );
}

fn log_stderr(level: Level, output: &Output) {
    if !output.stderr.is_empty() {
        log::log!(
            level,
            "cargo stderr:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Picks the argecho executable out of cargo's `--message-format=json`
/// output. The lib target shares the name but has no `executable`.
fn find_executable(messages: &str) -> Option<PathBuf> {
    messages
        .lines()
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .filter(|msg| msg["reason"] == "compiler-artifact" && msg["target"]["name"] == "argecho")
        .filter_map(|msg| msg["executable"].as_str().map(PathBuf::from))
        .last()
}

/// Builds the argecho executable and returns its path.
pub fn build_argecho(root: &Path, release: bool) -> Result<PathBuf> {
    let cargo = env::var_os("CARGO").unwrap_or_else(|| "cargo".into());
    let mut cmd = Command::new(cargo);
    cmd.current_dir(root).args([
        "build",
        "--bin",
        "argecho",
        "--message-format=json-render-diagnostics",
    ]);
    if release {
        cmd.arg("--release");
    }

    log::debug!("running {:?}", cmd);
    let output = cmd.output().context("failed to run cargo")?;
    log_stderr(Level::Debug, &output);
    if !output.status.success() {
        log_stderr(Level::Error, &output);
        bail!("cargo build failed ({})", output.status);
    }

    let messages = String::from_utf8_lossy(&output.stdout);
    let exe = find_executable(&messages)
        .context("cargo succeeded but reported no argecho executable")?;
    if !exe.is_file() {
        bail!("cargo reported {} but it does not exist", exe.display());
    }

    Ok(exe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_root_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("apps").join("argecho");
        fs::create_dir_all(&app_dir).unwrap();
        fs::write(
            app_dir.join("Cargo.toml"),
            "[package]\nname = \"argecho\"\n",
        )
        .unwrap();

        let nested = dir.path().join("cli").join("commands");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_workspace_root(&nested).unwrap(), dir.path());
        assert_eq!(find_workspace_root(dir.path()).unwrap(), dir.path());
    }

    #[test]
    fn ignores_other_crates() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("apps").join("argecho");
        fs::create_dir_all(&app_dir).unwrap();
        fs::write(app_dir.join("Cargo.toml"), "[package]\nname = \"other\"\n").unwrap();

        assert!(find_workspace_root(dir.path()).is_err());
    }

    #[test]
    fn executable_from_json_messages() {
        let messages = concat!(
            r#"{"reason":"compiler-artifact","target":{"kind":["lib"],"name":"argecho"},"filenames":["/w/target/x86_64-unknown-linux-gnu/debug/libargecho.rlib"],"executable":null,"fresh":true}"#,
            "\n",
            r#"{"reason":"compiler-artifact","target":{"kind":["bin"],"name":"argecho"},"filenames":["/w/out/x86_64-unknown-linux-gnu/debug/argecho"],"executable":"/w/out/x86_64-unknown-linux-gnu/debug/argecho","fresh":false}"#,
            "\n",
            r#"{"reason":"build-finished","success":true}"#,
            "\n",
        );

        assert_eq!(
            find_executable(messages),
            Some(PathBuf::from("/w/out/x86_64-unknown-linux-gnu/debug/argecho"))
        );
    }

    #[test]
    fn no_executable_reported() {
        let messages = concat!(
            r#"{"reason":"compiler-artifact","target":{"kind":["bin"],"name":"other"},"executable":"/w/target/debug/other"}"#,
            "\n",
            "not json\n",
            r#"{"reason":"build-finished","success":true}"#,
        );

        assert_eq!(find_executable(messages), None);
        assert_eq!(find_executable(""), None);
    }
}

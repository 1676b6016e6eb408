//! Helpers for tests that need a fake `ollama` executable on `PATH`.
//!
//! Tests using these MUST be marked `#[serial]`: `PATH` is process-global.

use std::path::{Path, PathBuf};

/// Creates a fake **ollama** executable in `dir` that runs `script`.
#[cfg(unix)]
pub fn stub_ollama(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(super::binary::OLLAMA_EXECUTABLE);
    std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(windows)]
pub fn stub_ollama(dir: &Path, script: &str) -> PathBuf {
    use std::process::Command;

    // Windows has no executable bit; compile a tiny real program instead.
    let exit_code = if script.contains("exit 1") { 1 } else { 0 };
    let src = dir.join("stub.rs");
    std::fs::write(
        &src,
        format!(r#"fn main() {{ std::process::exit({exit_code}); }}"#),
    )
    .unwrap();

    let exe = dir.join(super::binary::OLLAMA_EXECUTABLE);
    Command::new("rustc")
        .args([src.to_str().unwrap(), "-O", "-o", exe.to_str().unwrap()])
        .status()
        .unwrap();
    exe
}

/// Restores the previous `PATH` value when dropped.
pub struct PathGuard {
    old: Option<std::ffi::OsString>,
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        match &self.old {
            Some(v) => std::env::set_var("PATH", v),
            None => std::env::remove_var("PATH"),
        }
    }
}

/// Prepends `new_dir` to `PATH`.
pub fn prepend_path(new_dir: &Path) -> PathGuard {
    let old = std::env::var_os("PATH");
    let sep = if cfg!(windows) { ";" } else { ":" };
    let new_path = match &old {
        Some(val) => format!("{}{}{}", new_dir.display(), sep, val.to_string_lossy()),
        None => new_dir.display().to_string(),
    };
    std::env::set_var("PATH", &new_path);
    PathGuard { old }
}

/// Empties `PATH` so nothing resolves.
pub fn clear_path() -> PathGuard {
    let old = std::env::var_os("PATH");
    std::env::set_var("PATH", "");
    PathGuard { old }
}

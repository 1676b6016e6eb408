//! Locating the `ollama` executable.

use std::path::{Path, PathBuf};

use crate::error::{SetupError, SetupResult};

#[cfg(target_os = "windows")]
pub const OLLAMA_EXECUTABLE: &str = "ollama.exe";
#[cfg(target_os = "linux")]
pub const OLLAMA_EXECUTABLE: &str = "ollama";
#[cfg(target_os = "macos")]
pub const OLLAMA_EXECUTABLE: &str = "ollama";

/// Returns the path to the `ollama` executable.
///
/// Scans the process `PATH` first. On macOS it then probes a fixed list of
/// known install locations, so GUI-launched processes whose `PATH` omits
/// `/usr/local/bin` or `/opt/homebrew/bin` can still find it.
pub fn locate_ollama() -> SetupResult<PathBuf> {
    if let Some(path) = search_path(OLLAMA_EXECUTABLE) {
        return Ok(path);
    }
    for candidate in candidate_paths() {
        let path = Path::new(candidate);
        // `metadata` follows symlinks; canonicalize so the returned path is
        // the real executable.
        match path.metadata() {
            Ok(meta) if meta.is_file() => {
                return Ok(std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()));
            }
            _ => continue,
        }
    }
    Err(SetupError::ExecutableNotFound {
        name: OLLAMA_EXECUTABLE,
    })
}

fn search_path(executable_name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let candidate = dir.join(executable_name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Known install locations probed when the process `PATH` is minimal.
#[cfg(target_os = "macos")]
fn candidate_paths() -> &'static [&'static str] {
    &[
        "/usr/local/bin/ollama",
        "/opt/homebrew/bin/ollama",
        "/Applications/Ollama.app/Contents/Resources/ollama",
    ]
}

#[cfg(not(target_os = "macos"))]
fn candidate_paths() -> &'static [&'static str] {
    &[]
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::ollama::tests_helpers::*;

    #[test]
    #[serial]
    fn locate_finds_stub_on_path() {
        let tmp = tempfile::tempdir().unwrap();
        let stub = stub_ollama(tmp.path(), "exit 0");
        let _guard = prepend_path(tmp.path());

        let found = locate_ollama().unwrap();
        assert_eq!(found, stub);
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    #[serial]
    fn locate_fails_on_empty_path() {
        let _guard = clear_path();

        let err = locate_ollama().unwrap_err();
        assert!(matches!(
            err,
            SetupError::ExecutableNotFound {
                name: OLLAMA_EXECUTABLE
            }
        ));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    #[serial]
    fn locate_skips_non_executable_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(OLLAMA_EXECUTABLE), "not a program").unwrap();
        let _cleared = clear_path();
        let _guard = prepend_path(tmp.path());

        assert!(locate_ollama().is_err());
    }
}

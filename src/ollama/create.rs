//! Model registration via `ollama create`.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use crate::{
    error::{SetupError, SetupResult},
    ollama::binary::locate_ollama,
};

/// Runs `ollama create <model_name> -f <modelfile_path>`, streaming the
/// subprocess output live. Blocks until the subprocess exits; a non-zero exit
/// is surfaced as a failure with no retry.
pub fn create_model(modelfile_path: &Path, model_name: &str) -> SetupResult<()> {
    let exe = locate_ollama()?;

    let mut cmd = Command::new(&exe);
    cmd.arg("create")
        .arg(model_name)
        .arg("-f")
        .arg(modelfile_path)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    crate::trace!("Running ollama command: {:?}", cmd);

    let status = cmd
        .status()
        .map_err(|e| SetupError::file_system("spawn ollama create", &exe, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(SetupError::Subprocess {
            command: format!("ollama create {model_name}"),
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::ollama::tests_helpers::*;

    #[test]
    #[serial]
    fn create_model_succeeds_on_zero_exit() {
        let tmp = tempfile::tempdir().unwrap();
        stub_ollama(tmp.path(), "exit 0");
        let _guard = prepend_path(tmp.path());

        create_model(Path::new("Modelfile"), "daemon").unwrap();
    }

    #[test]
    #[serial]
    fn create_model_surfaces_non_zero_exit() {
        let tmp = tempfile::tempdir().unwrap();
        stub_ollama(tmp.path(), "exit 1");
        let _guard = prepend_path(tmp.path());

        match create_model(Path::new("Modelfile"), "daemon").unwrap_err() {
            SetupError::Subprocess { command, code } => {
                assert_eq!(command, "ollama create daemon");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected Subprocess error, got {other:?}"),
        }
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    #[serial]
    fn create_model_requires_the_executable() {
        let _guard = clear_path();

        assert!(matches!(
            create_model(Path::new("Modelfile"), "daemon").unwrap_err(),
            SetupError::ExecutableNotFound { .. }
        ));
    }
}

//! Modelfile rendering and writing.
//!
//! A Modelfile is the plain-text artifact `ollama create` consumes to register a
//! custom model: a `FROM` declaration, a block of `PARAMETER` lines, and a
//! triple-quoted `SYSTEM` block. The system prompt goes inside the delimited
//! block, so embedded newlines and quotes never corrupt the surrounding
//! structure.

use std::path::{Path, PathBuf};

use crate::error::{SetupError, SetupResult};

pub const DEFAULT_BASE_MODEL: &str = "llama3.2:3b";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are Daemon, a helpful and concise personal assistant running locally on the user's own hardware. You respect the user's privacy -- no data ever leaves this machine. You answer questions clearly and directly. When you are unsure, you say so. You are friendly but not verbose.";

/// Parameters rendered into the Modelfile. Constructed once per invocation and
/// never persisted except as rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    /// `FROM ...`
    pub base_model: String,
    /// `SYSTEM """..."""`
    pub system_prompt: String,
    /// `PARAMETER temperature`
    pub temperature: f64,
    /// `PARAMETER top_p`
    pub top_p: f64,
    /// `PARAMETER num_ctx`
    pub num_ctx: u32,
}

impl ModelParams {
    /// Defaults for the Daemon model. An empty `base_model` falls back to
    /// [`DEFAULT_BASE_MODEL`].
    pub fn new(base_model: &str) -> Self {
        let base_model = if base_model.is_empty() {
            DEFAULT_BASE_MODEL
        } else {
            base_model
        };
        Self {
            base_model: base_model.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: 0.7,
            top_p: 0.9,
            num_ctx: 2048,
        }
    }

    /// Renders the full Modelfile content. Pure and deterministic: identical
    /// params yield byte-identical output.
    pub fn render(&self) -> String {
        format!(
            "FROM {}\n\nPARAMETER temperature {:.1}\nPARAMETER top_p {:.1}\nPARAMETER num_ctx {}\n\nSYSTEM \"\"\"\n{}\n\"\"\"\n",
            self.base_model, self.temperature, self.top_p, self.num_ctx, self.system_prompt,
        )
    }
}

impl Default for ModelParams {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_MODEL)
    }
}

/// Writes the rendered Modelfile to `path`, creating missing parent directories
/// and truncating any existing file. Failures surface as-is; there is no
/// partial-write recovery.
pub fn write_modelfile(path: &Path, params: &ModelParams) -> SetupResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| SetupError::file_system("create parent directory", parent, e))?;
    }
    std::fs::write(path, params.render())
        .map_err(|e| SetupError::file_system("write Modelfile", path, e))
}

/// Default Modelfile location: `Modelfile` in the user's home directory.
pub fn default_modelfile_path() -> SetupResult<PathBuf> {
    let base_dirs = directories::BaseDirs::new().ok_or(SetupError::NoHomeDir)?;
    Ok(base_dirs.home_dir().join("Modelfile"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_params() -> ModelParams {
        ModelParams {
            base_model: "llama3.2:3b".to_string(),
            system_prompt: "You are Daemon.".to_string(),
            temperature: 0.7,
            top_p: 0.9,
            num_ctx: 2048,
        }
    }

    #[test]
    fn render_is_deterministic() {
        let params = ModelParams::new("llama3.2:3b");
        assert_eq!(params.render(), params.render());
    }

    #[test]
    fn render_scenario_content() {
        let content = scenario_params().render();

        let from_lines: Vec<&str> = content
            .lines()
            .filter(|l| l.starts_with("FROM "))
            .collect();
        assert_eq!(from_lines, vec!["FROM llama3.2:3b"]);

        assert!(content.contains("PARAMETER temperature 0.7\n"));
        assert!(content.contains("PARAMETER top_p 0.9\n"));
        assert!(content.contains("PARAMETER num_ctx 2048\n"));
        assert!(content.contains("SYSTEM \"\"\"\nYou are Daemon.\n\"\"\"\n"));
    }

    #[test]
    fn render_formats_floats_to_one_decimal() {
        let mut params = scenario_params();
        params.temperature = 1.0;
        params.top_p = 0.95;
        let content = params.render();
        assert!(content.contains("PARAMETER temperature 1.0\n"));
        // One decimal place is the contract, even when it loses precision.
        assert!(content.contains("PARAMETER top_p 0.9\n"));
    }

    #[test]
    fn empty_base_model_falls_back_to_default() {
        let params = ModelParams::new("");
        assert_eq!(params.base_model, DEFAULT_BASE_MODEL);
    }

    #[test]
    fn write_then_read_back_matches_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Modelfile");
        let params = scenario_params();

        write_modelfile(&path, &params).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, params.render());
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("Modelfile");

        write_modelfile(&path, &ModelParams::default()).unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Modelfile");
        std::fs::write(&path, "# stale\n".repeat(512)).unwrap();

        let params = scenario_params();
        write_modelfile(&path, &params).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), params.render());
    }
}

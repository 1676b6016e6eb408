//! Prerequisite check: executable on `PATH`, API reachable, required models
//! registered.
//!
//! The check runs as a sequence of hard gates; each gate prints a
//! status/guidance line before returning, and that printed output is the
//! check's primary observable, not just its return value. The one soft
//! condition, the custom model not existing yet, is a [`CheckOutcome`]
//! variant rather than an error, since creating that model is the whole point
//! of setup.

use crate::{
    error::{SetupError, SetupResult},
    modelfile::DEFAULT_BASE_MODEL,
    ollama::{
        binary::locate_ollama,
        client::{ClientError, OllamaClient},
    },
};

pub const DEFAULT_CUSTOM_MODEL: &str = "daemon";

/// What a run that cleared every hard gate found.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Executable, base model, and custom model are all present.
    Ready,
    /// Only the custom model is missing. Soft: composite flows proceed to
    /// registration instead of aborting.
    MissingCustomModel { name: String },
}

/// One prerequisite verification pass. Model names are fully parameterized;
/// empty strings fall back to the canonical defaults.
#[derive(Debug)]
pub struct PrereqCheck {
    pub client: OllamaClient,
    /// Only verify that the executable resolves; skip the API entirely.
    pub skip_api: bool,
    pub base_model: String,
    pub custom_model: String,
}

impl PrereqCheck {
    pub fn new(skip_api: bool, base_model: &str, custom_model: &str) -> Self {
        Self::with_client(OllamaClient::new(), skip_api, base_model, custom_model)
    }

    /// Test seam: run the same gates against an injected client.
    pub fn with_client(
        client: OllamaClient,
        skip_api: bool,
        base_model: &str,
        custom_model: &str,
    ) -> Self {
        let base_model = if base_model.is_empty() {
            DEFAULT_BASE_MODEL
        } else {
            base_model
        };
        let custom_model = if custom_model.is_empty() {
            DEFAULT_CUSTOM_MODEL
        } else {
            custom_model
        };
        Self {
            client,
            skip_api,
            base_model: base_model.to_string(),
            custom_model: custom_model.to_string(),
        }
    }

    pub fn run(&self) -> SetupResult<CheckOutcome> {
        let path = match locate_ollama() {
            Ok(path) => path,
            Err(e) => {
                println!("Ollama not found in PATH.");
                println!("Install it from https://ollama.com and re-run this check.");
                return Err(e);
            }
        };
        println!("Ollama found: {}", path.display());

        if self.skip_api {
            return Ok(CheckOutcome::Ready);
        }

        let tags = match self.client.tags() {
            Ok(tags) => tags,
            Err(e) => {
                self.report_api_error(&e);
                return Err(e.into());
            }
        };
        crate::debug!("tags endpoint returned {} models", tags.models.len());

        let registered = tags.registered();

        if !registered.contains(&self.base_model) {
            println!(
                "Base model \"{}\" not found. Run: ollama pull {}",
                self.base_model, self.base_model
            );
            return Err(SetupError::BaseModelMissing {
                model: self.base_model.clone(),
            });
        }
        println!("Base model {}: present", self.base_model);

        if !registered.contains(&self.custom_model) {
            println!(
                "Custom model \"{}\" not found. Run: daemon-setup init",
                self.custom_model
            );
            return Ok(CheckOutcome::MissingCustomModel {
                name: self.custom_model.clone(),
            });
        }
        println!("Custom model {}: present", self.custom_model);
        Ok(CheckOutcome::Ready)
    }

    fn report_api_error(&self, e: &ClientError) {
        match e {
            ClientError::Remote { code, .. } => {
                println!("Ollama API returned status {code}.");
            }
            ClientError::Serde(_) => {
                println!("Failed to parse the Ollama API response: {e}");
            }
            _ => {
                println!("Ollama API not reachable at {}.", self.client.base_url());
                if cfg!(target_os = "windows") {
                    println!(
                        "Start Ollama from the Start menu or run 'ollama serve' in a terminal."
                    );
                } else {
                    println!("Start Ollama (e.g. systemctl start ollama) or run 'ollama serve'.");
                }
            }
        }
    }
}

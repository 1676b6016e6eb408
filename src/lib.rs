//! daemon_setup – configure the Daemon local assistant on top of [Ollama](https://ollama.com)
//! ==========================================================================================
//!
//! ## What it does
//! - **Prerequisite check** – Finds the `ollama` executable and verifies the required
//!   base and custom models against the local API with [`PrereqCheck`].
//! - **Modelfile rendering** – Writes the Modelfile describing the `daemon` model with
//!   [`ModelParams`] and [`write_modelfile`].
//! - **Model registration** – Runs `ollama create` with live output via [`create_model`].
//! - **Shell alias** – Idempotently appends a `daemon` alias (or PowerShell function)
//!   to the user's rc file with [`AliasInstaller`].
//!
//! ## CLI
//! - **`daemon-setup`** – `check`, `init`, `modelfile`, `alias`, `setup`, and `guide`
//!   subcommands; run without arguments to print the command menu.
//!
//! ---
//!
//! ```rust,no_run
//! use daemon_setup::*;
//!
//! fn main() -> SetupResult<()> {
//!     let outcome = PrereqCheck::new(false, "", "").run()?;
//!     if let CheckOutcome::MissingCustomModel { name } = outcome {
//!         let path = default_modelfile_path()?;
//!         write_modelfile(&path, &ModelParams::new("llama3.2:3b"))?;
//!         create_model(&path, &name)?;
//!     }
//!     Ok(())
//! }
//! ```

#[allow(unused_imports)]
use tracing::{Level, debug, error, info, span, trace, warn};

pub mod error;
pub mod logging;
pub mod modelfile;
pub mod ollama;
pub mod setup;
pub mod shell;

pub use error::{SetupError, SetupResult};
pub use logging::LoggingConfig;
pub use modelfile::{DEFAULT_BASE_MODEL, ModelParams, default_modelfile_path, write_modelfile};
pub use ollama::{
    binary::{OLLAMA_EXECUTABLE, locate_ollama},
    check::{CheckOutcome, DEFAULT_CUSTOM_MODEL, PrereqCheck},
    client::{DEFAULT_HOST, OllamaClient},
    create::create_model,
};
pub use setup::{
    InitOptions, LITE_BASE_MODEL, LITE_CUSTOM_MODEL, SetupFlow, run_init, run_modelfile, run_setup,
};
pub use shell::{AliasInstaller, AliasOutcome, AliasSyntax, rc_path_for};

//! Composite setup flows: check, then init, then alias.
//!
//! Flows stop at the first hard error. The one soft condition, a missing
//! custom model, is an explicit branch: setup exists to create that model, so
//! it falls through to registration instead of aborting.

use std::{io::Write, path::PathBuf};

use crate::{
    error::SetupResult,
    modelfile::{DEFAULT_BASE_MODEL, ModelParams, default_modelfile_path, write_modelfile},
    ollama::{
        check::{CheckOutcome, DEFAULT_CUSTOM_MODEL, PrereqCheck},
        create::create_model,
    },
    shell::AliasInstaller,
};

/// Base model used by the `--lite` variant, sized for low-power hardware.
pub const LITE_BASE_MODEL: &str = "llama3.2:1b";
pub const LITE_CUSTOM_MODEL: &str = "daemon-lite";

/// Parameters shared by the init, modelfile, and setup flows.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Where to write the Modelfile; `None` means `Modelfile` in the home
    /// directory.
    pub modelfile_path: Option<PathBuf>,
    pub model_name: String,
    pub base_model: String,
}

impl InitOptions {
    pub fn new(modelfile_path: Option<PathBuf>, model_name: &str, base_model: &str) -> Self {
        Self {
            modelfile_path,
            model_name: model_name.to_string(),
            base_model: base_model.to_string(),
        }
    }

    /// The `--lite` variant: smaller base model, distinct custom-model name.
    pub fn lite(modelfile_path: Option<PathBuf>) -> Self {
        Self::new(modelfile_path, LITE_CUSTOM_MODEL, LITE_BASE_MODEL)
    }

    pub fn resolved_path(&self) -> SetupResult<PathBuf> {
        match &self.modelfile_path {
            Some(path) => Ok(path.clone()),
            None => default_modelfile_path(),
        }
    }
}

impl Default for InitOptions {
    fn default() -> Self {
        Self::new(None, DEFAULT_CUSTOM_MODEL, DEFAULT_BASE_MODEL)
    }
}

/// Writes the Modelfile only, printing the follow-up `ollama create` command.
pub fn run_modelfile(opts: &InitOptions) -> SetupResult<()> {
    let path = opts.resolved_path()?;
    write_modelfile(&path, &ModelParams::new(&opts.base_model))?;
    println!(
        "Wrote Modelfile to {}. Create the model with: ollama create {} -f {}",
        path.display(),
        opts.model_name,
        path.display()
    );
    Ok(())
}

/// Writes the Modelfile and registers the model.
pub fn run_init(opts: &InitOptions) -> SetupResult<()> {
    let path = opts.resolved_path()?;
    write_modelfile(&path, &ModelParams::new(&opts.base_model))?;
    println!("Wrote Modelfile to {}", path.display());
    create_model(&path, &opts.model_name)?;
    println!(
        "Daemon model \"{}\" created. Run: ollama run {}",
        opts.model_name, opts.model_name
    );
    Ok(())
}

/// The full setup pipeline with its collaborators made explicit, so tests can
/// inject a mock-backed check and a temp-file installer.
#[derive(Debug)]
pub struct SetupFlow {
    pub check: PrereqCheck,
    pub installer: AliasInstaller,
    pub opts: InitOptions,
    /// Skip the `[y/N]` confirmations.
    pub assume_yes: bool,
}

impl SetupFlow {
    pub fn from_env(opts: InitOptions, assume_yes: bool) -> SetupResult<Self> {
        Ok(Self {
            check: PrereqCheck::new(false, &opts.base_model, &opts.model_name),
            installer: AliasInstaller::from_env()?,
            opts,
            assume_yes,
        })
    }

    pub fn run(&self) -> SetupResult<()> {
        match self.check.run()? {
            CheckOutcome::Ready => {}
            // Registration below is exactly what creates this model.
            CheckOutcome::MissingCustomModel { .. } => {}
        }

        let path = self.opts.resolved_path()?;
        if !self.assume_yes
            && !confirm(&format!(
                "Will write Modelfile to {} and create model \"{}\". Continue? [y/N]: ",
                path.display(),
                self.opts.model_name
            ))
        {
            println!("Aborted.");
            return Ok(());
        }

        run_init(&self.opts)?;

        if !self.assume_yes && !confirm("Add shell alias so you can run 'daemon'? [y/N]: ") {
            return Ok(());
        }
        self.installer.add_alias(
            DEFAULT_CUSTOM_MODEL,
            &format!("ollama run {}", self.opts.model_name),
            false,
        )?;
        Ok(())
    }
}

/// Runs check, then init, then alias against the real environment.
pub fn run_setup(opts: InitOptions, assume_yes: bool) -> SetupResult<()> {
    SetupFlow::from_env(opts, assume_yes)?.run()
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    let _ = std::io::stdout().flush();
    let mut response = String::new();
    if std::io::stdin().read_line(&mut response).is_err() {
        return false;
    }
    matches!(response.trim(), "y" | "Y")
}

//! Daemon Setup CLI — Binary crate entry-point
//! ===========================================
//!
//! Thin command-line wrapper around the `daemon_setup` library. Its job is to
//! **verify** that Ollama and the required models are available, **write** the
//! Modelfile, **register** the daemon model, and optionally **install** a
//! shell alias so the assistant starts with one short command.
//!
//! ## Typical usage
//! ```text
//! # Verify Ollama and the required models
//! $ daemon-setup check
//!
//! # Write the Modelfile and create the daemon model
//! $ daemon-setup init
//!
//! # One-shot full setup without confirmations
//! $ daemon-setup setup --yes
//!
//! # Smaller model for low-power hardware
//! $ daemon-setup init --lite
//! ```
//!
//! The binary is intentionally *stateless*: every invocation fully describes
//! the desired outcome via flags and exits when the work is done. Any
//! unrecovered failure exits non-zero.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use daemon_setup::*;

#[derive(Debug, Parser)]
#[command(
    name = "daemon-setup",
    version,
    about = "Setup the Daemon personal assistant (Ollama + Modelfile)"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Verify Ollama is installed and the required models are available
    Check {
        /// Only check that ollama resolves; do not query the API
        #[arg(long)]
        skip_api: bool,

        #[command(flatten)]
        model: ModelSpec,
    },

    /// Write the Modelfile and create the daemon model with ollama
    Init {
        #[command(flatten)]
        target: TargetSpec,
    },

    /// Write the Modelfile only (no ollama create)
    Modelfile {
        #[command(flatten)]
        target: TargetSpec,
    },

    /// Add a shell alias so you can run 'daemon' to start the assistant
    Alias {
        /// Print what would be appended without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Run check, then init, then alias (full setup)
    Setup {
        /// Skip confirmations
        #[arg(long)]
        yes: bool,

        #[command(flatten)]
        target: TargetSpec,
    },

    /// Show the full setup guide and workflow
    Guide,
}

#[derive(Debug, Args)]
struct ModelSpec {
    /// Name of the custom model to create
    #[arg(long, value_name = "NAME", default_value = DEFAULT_CUSTOM_MODEL)]
    model_name: String,

    /// Base model in the Modelfile (FROM)
    #[arg(long, value_name = "NAME", default_value = DEFAULT_BASE_MODEL)]
    base_model: String,

    /// Use llama3.2:1b and create daemon-lite (faster inference on low-power hardware)
    #[arg(long)]
    lite: bool,
}

impl ModelSpec {
    fn names(&self) -> (String, String) {
        if self.lite {
            (LITE_CUSTOM_MODEL.to_string(), LITE_BASE_MODEL.to_string())
        } else {
            (self.model_name.clone(), self.base_model.clone())
        }
    }
}

#[derive(Debug, Args)]
struct TargetSpec {
    /// Path to write the Modelfile (default: Modelfile in the home directory)
    #[arg(long, value_name = "PATH")]
    modelfile: Option<PathBuf>,

    #[command(flatten)]
    model: ModelSpec,
}

impl TargetSpec {
    fn into_options(self) -> InitOptions {
        let (model_name, base_model) = self.model.names();
        InitOptions::new(self.modelfile, &model_name, &base_model)
    }
}

fn main() -> SetupResult<()> {
    LoggingConfig::default().load_logger()?;
    let cli = Cli::parse();

    match cli.cmd {
        None => {
            print_menu();
            Ok(())
        }

        Some(Cmd::Check { skip_api, model }) => {
            let (model_name, base_model) = model.names();
            match PrereqCheck::new(skip_api, &base_model, &model_name).run()? {
                CheckOutcome::Ready => Ok(()),
                // Already reported by the check; standalone check treats it
                // as a failure.
                CheckOutcome::MissingCustomModel { .. } => std::process::exit(1),
            }
        }

        Some(Cmd::Init { target }) => run_init(&target.into_options()),

        Some(Cmd::Modelfile { target }) => run_modelfile(&target.into_options()),

        Some(Cmd::Alias { dry_run }) => {
            AliasInstaller::from_env()?.add_alias(
                DEFAULT_CUSTOM_MODEL,
                &format!("ollama run {DEFAULT_CUSTOM_MODEL}"),
                dry_run,
            )?;
            Ok(())
        }

        Some(Cmd::Setup { yes, target }) => run_setup(target.into_options(), yes),

        Some(Cmd::Guide) => {
            print_guide();
            Ok(())
        }
    }
}

fn print_menu() {
    println!("Daemon setup - configure your local assistant");
    println!();
    println!("Commands:");
    println!("  check     Verify Ollama and required models");
    println!("  init      Write Modelfile and create the daemon model");
    println!("  modelfile Write Modelfile only");
    println!("  alias     Add shell alias so you can run 'daemon'");
    println!("  setup     Full setup (check, then init, then alias)");
    println!("  guide     Show full setup guide and workflow");
    println!();
    println!("Run 'daemon-setup guide' for the full walkthrough.");
}

fn print_guide() {
    println!("Daemon setup - full guide");
    println!();
    println!("daemon-setup configures the Daemon personal assistant on your PC: it checks");
    println!("prerequisites (Ollama and models), writes the Modelfile, creates the daemon");
    println!("model, and can add a shell alias so you can run 'daemon' to start it.");
    println!();
    println!("Prerequisites");
    println!("  * Ollama installed and in PATH");
    println!("  * Base model pulled (e.g. llama3.2:3b, or llama3.2:1b for --lite)");
    println!();
    println!("Commands");
    println!("  check     Verify Ollama is installed and required models are available");
    println!("  init      Write the Modelfile and create the daemon model with ollama");
    println!("  modelfile Write the Modelfile only (no ollama create)");
    println!("  alias     Add shell alias so you can run 'daemon' to start the assistant");
    println!("  setup     Run check, then init, then alias (full setup)");
    println!();
    println!("Typical workflow");
    println!("  1. daemon-setup check     # verify Ollama and models");
    println!("  2. daemon-setup init      # create the daemon model");
    if cfg!(target_os = "windows") {
        println!(
            "  3. daemon-setup alias     # add 'daemon' function, then restart PowerShell or run . $PROFILE"
        );
    } else {
        println!(
            "  3. daemon-setup alias     # add 'daemon' alias, then source ~/.bashrc or ~/.zshrc"
        );
    }
    println!();
    println!("  Or one-shot:  daemon-setup setup --yes");
    println!();
    println!("  For low-power hardware (e.g. N100), use the 1B model for faster inference:");
    println!("  ollama pull llama3.2:1b");
    println!("  daemon-setup init --lite   # creates daemon-lite");
    println!();
    println!("Examples");
    if cfg!(target_os = "windows") {
        println!("  .\\daemon-setup check");
        println!("  .\\daemon-setup setup --yes");
    } else {
        println!("  daemon-setup check");
        println!("  daemon-setup setup --yes");
    }
}

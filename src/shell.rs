//! Shell Alias Installer
//! =====================
//!
//! Idempotently appends an alias (Unix) or function (PowerShell) definition to
//! the user's shell rc file.
//!
//! The correctness property here is **idempotence under repeated invocation
//! and tolerance of pre-existing content**: after any successful install,
//! exactly one line defining the alias name exists in the file, existing lines
//! are never modified or reordered, and a stale definition with a *different*
//! value still counts as present (matched by prefix signature) rather than
//! being duplicated. The scan and the append are not one atomic transaction;
//! concurrent writers of the same rc file are out of scope for an interactive
//! single-user tool.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::error::{SetupError, SetupResult};

/// How an alias is spelled in the target shell family. Selected once at
/// startup and passed in, never branched on inline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AliasSyntax {
    /// `alias name="value"`, for bash, zsh, and friends.
    Posix,
    /// `function name { value }`, for PowerShell profiles.
    PowerShell,
}

impl AliasSyntax {
    pub fn for_host() -> Self {
        if cfg!(target_os = "windows") {
            Self::PowerShell
        } else {
            Self::Posix
        }
    }

    /// The exact directive ensured present, without the trailing newline.
    pub fn line(&self, alias_name: &str, alias_value: &str) -> String {
        match self {
            Self::Posix => format!("alias {alias_name}=\"{alias_value}\""),
            Self::PowerShell => format!("function {alias_name} {{ {alias_value} }}"),
        }
    }

    /// Prefix identifying any existing definition of `alias_name`, regardless
    /// of its current value.
    pub fn signature(&self, alias_name: &str) -> String {
        match self {
            Self::Posix => format!("alias {alias_name}="),
            Self::PowerShell => format!("function {alias_name} "),
        }
    }

    /// How to load the new definition without opening a new terminal.
    pub fn activation_hint(&self, rc_path: &Path) -> String {
        match self {
            Self::Posix => format!(
                "Run 'source {}' or open a new terminal.",
                rc_path.display()
            ),
            Self::PowerShell => "Restart PowerShell or run `. $PROFILE` to load it.".to_string(),
        }
    }
}

/// What [`AliasInstaller::add_alias`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum AliasOutcome {
    /// A matching or same-name definition already exists; nothing written.
    AlreadyPresent,
    /// Dry run: reported the line that would be appended, wrote nothing.
    DryRun { line: String },
    /// Appended exactly one line.
    Added,
}

/// Installs alias definitions into one rc file.
///
/// The rc path and syntax are plain fields so tests can point the installer at
/// a temp file; [`AliasInstaller::from_env`] resolves the real platform
/// defaults.
#[derive(Debug, Clone)]
pub struct AliasInstaller {
    pub rc_path: PathBuf,
    pub syntax: AliasSyntax,
}

impl AliasInstaller {
    pub fn new(rc_path: impl Into<PathBuf>, syntax: AliasSyntax) -> Self {
        Self {
            rc_path: rc_path.into(),
            syntax,
        }
    }

    /// Resolves the platform's rc file: the PowerShell profile on Windows,
    /// `.zshrc` or `.bashrc` (from `$SHELL`, defaulting to bash) elsewhere.
    pub fn from_env() -> SetupResult<Self> {
        let base_dirs = directories::BaseDirs::new().ok_or(SetupError::NoHomeDir)?;
        let shell = std::env::var("SHELL").ok();
        Ok(Self::new(
            rc_path_for(base_dirs.home_dir(), shell.as_deref()),
            AliasSyntax::for_host(),
        ))
    }

    /// Ensures the alias definition is present, appending it at most once.
    ///
    /// Scans the file line by line (a missing file reads as empty); a trimmed
    /// line equal to the new directive, or starting with the name's prefix
    /// signature, means the alias is already installed. With `dry_run` the
    /// would-be append is reported and nothing is written.
    pub fn add_alias(
        &self,
        alias_name: &str,
        alias_value: &str,
        dry_run: bool,
    ) -> SetupResult<AliasOutcome> {
        let line = self.syntax.line(alias_name, alias_value);
        let signature = self.syntax.signature(alias_name);

        match std::fs::read_to_string(&self.rc_path) {
            Ok(existing) => {
                for existing_line in existing.lines() {
                    let trimmed = existing_line.trim();
                    if trimmed == line || trimmed.starts_with(&signature) {
                        println!("Alias already present in {}.", self.rc_path.display());
                        return Ok(AliasOutcome::AlreadyPresent);
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File does not exist yet; we will create it below.
            }
            Err(e) => {
                return Err(SetupError::file_system("read rc file", &self.rc_path, e));
            }
        }

        if dry_run {
            println!("Would append to {}:\n{line}", self.rc_path.display());
            return Ok(AliasOutcome::DryRun { line });
        }

        if let Some(parent) = self.rc_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SetupError::file_system("create rc file directory", parent, e))?;
        }

        let mut rc = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.rc_path)
            .map_err(|e| SetupError::file_system("open rc file", &self.rc_path, e))?;
        writeln!(rc, "{line}")
            .map_err(|e| SetupError::file_system("append to rc file", &self.rc_path, e))?;

        println!(
            "Added alias to {}. {}",
            self.rc_path.display(),
            self.syntax.activation_hint(&self.rc_path)
        );
        Ok(AliasOutcome::Added)
    }
}

/// Pure rc-path selection, split out so tests can feed a synthetic home
/// directory and `$SHELL` value.
pub fn rc_path_for(home: &Path, shell_env: Option<&str>) -> PathBuf {
    if cfg!(target_os = "windows") {
        return home
            .join("Documents")
            .join("WindowsPowerShell")
            .join("Microsoft.PowerShell_profile.ps1");
    }
    match shell_env {
        Some(shell) if shell.contains("zsh") => home.join(".zshrc"),
        _ => home.join(".bashrc"),
    }
}

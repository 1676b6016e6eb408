// top-level error for the public API

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Client(#[from] crate::ollama::client::ClientError),

    #[error("executable '{name}' not found")]
    ExecutableNotFound { name: &'static str },

    #[error("base model '{model}' not found")]
    BaseModelMissing { model: String },

    #[error("could not resolve the user home directory")]
    NoHomeDir,

    #[error("`{command}` exited with {}", exit_label(.code))]
    Subprocess {
        command: String,
        /// `None` when the child was terminated by a signal.
        code: Option<i32>,
    },

    #[error("{operation} failed for '{path}'")]
    FileSystem {
        operation: &'static str,
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SetupResult<T> = std::result::Result<T, SetupError>;

impl SetupError {
    pub fn file_system(
        operation: &'static str,
        path: impl Into<std::path::PathBuf>,
        err: impl Into<std::io::Error>,
    ) -> Self {
        Self::FileSystem {
            operation,
            path: path.into(),
            source: err.into(),
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "a signal".to_string(),
    }
}

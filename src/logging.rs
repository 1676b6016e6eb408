use tracing_subscriber::layer::SubscriberExt;

/// Diagnostic logging for the setup CLI.
///
/// Tracing output goes to stderr behind an `EnvFilter` so the stdout
/// status/guidance lines stay the primary observable output. Defaults to
/// WARN; raise it with `RUST_LOG`.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: tracing::Level,
    pub logging_enabled: bool,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::WARN,
            logging_enabled: true,
        }
    }
}

impl LoggingConfig {
    pub fn load_logger(&self) -> crate::SetupResult<()> {
        if !self.logging_enabled {
            return Ok(());
        }

        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(self.level.into())
            .from_env_lossy();

        let terminal_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(false)
            .with_writer(std::io::stderr);

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(terminal_layer);

        // A second invocation (e.g. from tests) keeps the first subscriber.
        let _ = tracing::subscriber::set_global_default(subscriber);
        Ok(())
    }
}

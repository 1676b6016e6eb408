//! Ollama API – HTTP Client
//! ====================================
//!
//! Thin wrapper around [`ureq`] for the single endpoint this tool needs:
//! `GET /api/tags`. Its goals are **zero configuration**, **one
//! connection-pool per client**, and **predictable failure semantics**
//! (all transport errors are mapped to [`ClientError`]).
//!
//! The base URL is injectable (see [`OllamaClient::with_base_url`]) so tests
//! can point the client at a mock server; the CLI always talks to the fixed
//! local endpoint.

use std::{collections::HashSet, io::Read, time::Duration};

use serde::Deserialize;
use ureq::Agent;

/// Fixed request timeout (connect + read + write). Not configurable, no retry.
const TIMEOUT: Duration = Duration::from_secs(5);

/// The local Ollama endpoint.
pub const DEFAULT_HOST: &str = "http://localhost:11434";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("failed to parse response body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("remote error {code}: {message}")]
    Remote { code: u16, message: String },

    #[error("client setup error: {reason}")]
    Setup { reason: String },
}

/// Lightweight HTTP/1.1 client backed by [`ureq`].
#[derive(Debug)]
pub struct OllamaClient {
    /// Underlying *ureq* connection-pool and HTTP state-machine.
    agent: Agent,
    /// Prefix shared by every request, e.g. `http://localhost:11434`.
    base_url: String,
}

impl OllamaClient {
    /// Creates a client for the fixed local endpoint, [`DEFAULT_HOST`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_HOST)
    }

    /// Creates a client for an arbitrary base URL. Test seam.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let agent = Agent::new_with_config(
            Agent::config_builder()
                .timeout_global(Some(TIMEOUT)) // applies to connect + read + write
                .build(),
        );
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the set of registered models from `GET /api/tags`.
    pub fn tags(&self) -> Result<TagsResponse, ClientError> {
        let bytes = self.get_raw("/api/tags")?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    /// Performs the request and maps *ureq* errors to our unified
    /// [`ClientError`] enum. `path` must start with `/`.
    fn get_raw(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        debug_assert!(path.starts_with('/'));
        let url = format!("{}{}", self.base_url, path);

        match self.agent.get(&url).call() {
            Ok(resp) if (200..300).contains(&resp.status().as_u16()) => {
                let mut body = Vec::new();
                resp.into_body().into_reader().read_to_end(&mut body)?;
                Ok(body)
            }

            Ok(resp) => Err(ClientError::Remote {
                code: resp.status().as_u16(),
                message: resp
                    .status()
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            }),

            Err(ureq::Error::StatusCode(code)) => Err(ClientError::Remote {
                code,
                message: format!("HTTP {code}"),
            }),

            Err(ureq::Error::Timeout(_)) => Err(ClientError::Timeout(TIMEOUT)),

            Err(ureq::Error::Io(e)) => Err(ClientError::Io(e)),

            Err(other) => Err(ClientError::Setup {
                reason: format!("ureq error: {other}"),
            }),
        }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OllamaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OllamaClient({})", self.base_url)
    }
}

/// Response shape of `GET /api/tags`. The live endpoint attaches more metadata
/// per model (size, digest, ...); only the name matters here. A body without a
/// `models` array fails to parse.
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ModelEntry {
    pub name: String,
}

impl TagsResponse {
    /// Builds the name-membership set over the registered models.
    pub fn registered(&self) -> RegisteredModels {
        let mut names = HashSet::new();
        for model in &self.models {
            // Model names can be "llama3.2:3b" or "daemon"; index both the
            // full name and the portion before the tag separator.
            names.insert(model.name.clone());
            if let Some((repo, _tag)) = model.name.split_once(':') {
                if !repo.is_empty() {
                    names.insert(repo.to_string());
                }
            }
        }
        RegisteredModels(names)
    }
}

/// Name-membership snapshot taken from one tags response.
#[derive(Debug)]
pub struct RegisteredModels(HashSet<String>);

impl RegisteredModels {
    /// Exact match, or colon-prefix match when `name` carries a tag
    /// ("llama3.2:3b" is satisfied by a registered "llama3.2").
    pub fn contains(&self, name: &str) -> bool {
        if self.0.contains(name) {
            return true;
        }
        match name.split_once(':') {
            Some((repo, _tag)) if !repo.is_empty() => self.0.contains(repo),
            _ => false,
        }
    }
}

//! Optional KDL configuration.
//!
//! ```kdl
//! hooks-dir ".rbgithook"
//! git "git"
//! ```
//!
//! Every node is optional; absent nodes keep their defaults.

use std::path::{Path, PathBuf};

use crate::git::GitCli;
use crate::hooks::{HookFileWriter, DEFAULT_HOOKS_DIR};

const HOOKS_DIR_NODE: &str = "hooks-dir";
const GIT_NODE: &str = "git";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that holds hook scripts, relative to the working directory.
    pub hooks_dir: PathBuf,
    /// Git executable used to read and write `core.hooksPath`.
    pub git: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hooks_dir: PathBuf::from(DEFAULT_HOOKS_DIR),
            git: "git".to_string(),
        }
    }
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    #[diagnostic(code(rbgithook::config::not_found))]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    #[diagnostic(code(rbgithook::config::read))]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    #[diagnostic(code(rbgithook::config::syntax))]
    ParseError(String),
    #[error("invalid config: {0}")]
    #[diagnostic(code(rbgithook::config::invalid))]
    ValidationError(String),
}

impl Config {
    /// Load a config from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::ReadError(e)
            }
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Parse a KDL string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc: kdl::KdlDocument = content
            .parse()
            .map_err(|e: kdl::KdlError| ConfigError::ParseError(e.to_string()))?;
        Self::from_document(&doc, content)
    }

    fn from_document(doc: &kdl::KdlDocument, source: &str) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        for node in doc.nodes() {
            let name = node.name().value();
            match name {
                HOOKS_DIR_NODE => config.hooks_dir = PathBuf::from(single_string(node, source)?),
                GIT_NODE => config.git = single_string(node, source)?,
                other => {
                    return Err(ConfigError::ValidationError(format!(
                        "line {}: unknown node '{other}'",
                        line_of(node, source)
                    )))
                }
            }
        }
        Ok(config)
    }

    /// The hook writer for the configured directory.
    pub fn writer(&self) -> HookFileWriter {
        HookFileWriter::new(&self.hooks_dir)
    }

    /// The git client for the configured executable.
    pub fn git(&self) -> GitCli {
        GitCli::new(&self.git)
    }
}

/// Extract the one non-empty string argument of a node.
fn single_string(node: &kdl::KdlNode, source: &str) -> Result<String, ConfigError> {
    let line = line_of(node, source);
    let name = node.name().value();
    let values: Vec<&str> = node
        .entries()
        .iter()
        .filter_map(|e| e.value().as_string())
        .collect();
    if node.children().is_some() {
        return Err(ConfigError::ValidationError(format!(
            "line {line}: '{name}' does not take a children block"
        )));
    }
    match values.as_slice() {
        [value] if node.entries().len() == 1 && !value.is_empty() => Ok(value.to_string()),
        _ => Err(ConfigError::ValidationError(format!(
            "line {line}: '{name}' expects exactly one non-empty string"
        ))),
    }
}

/// 1-based line number of a node in the config text.
fn line_of(node: &kdl::KdlNode, source: &str) -> usize {
    let offset = node.span().offset();
    source[..offset.min(source.len())]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
        + 1
}

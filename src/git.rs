use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Git configuration key that redirects hook lookup.
pub const HOOKS_PATH_KEY: &str = "core.hooksPath";

/// `git config --unset` exit status when the key is not set.
const EXIT_KEY_NOT_SET: i32 = 5;

/// `git config --get` exit status when the key is not set.
const EXIT_GET_MISSING: i32 = 1;

/// Errors from running the `git` binary.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GitError {
    #[error("failed to run {program}: {source}")]
    #[diagnostic(code(rbgithook::git::spawn), help("is git installed and on PATH?"))]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("`git {args}` exited with status {code}: {stderr}")]
    #[diagnostic(code(rbgithook::git::failed))]
    CommandFailed {
        args: String,
        code: i32,
        stderr: String,
    },
}

/// Reads and writes the `core.hooksPath` setting of one repository.
pub trait GitConfig {
    /// Point Git's hook lookup at `dir`.
    fn set_hooks_path(&self, dir: &Path) -> Result<(), GitError>;

    /// Remove the hook lookup override. Succeeds if it was never set.
    fn unset_hooks_path(&self) -> Result<(), GitError>;

    /// Current repository-local hook lookup override, `None` when unset.
    fn hooks_path(&self) -> Result<Option<String>, GitError>;
}

/// [`GitConfig`] backed by the `git` command-line tool.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    work_dir: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            work_dir: None,
        }
    }

    /// Run git inside `dir` instead of the process working directory.
    #[cfg(test)]
    pub(crate) fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }
        tracing::debug!(program = %self.program, ?args, "running git");
        cmd.output().map_err(|source| GitError::Spawn {
            program: self.program.clone(),
            source,
        })
    }

    fn failed(args: &[&str], output: &Output) -> GitError {
        GitError::CommandFailed {
            args: args.join(" "),
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

impl GitConfig for GitCli {
    fn set_hooks_path(&self, dir: &Path) -> Result<(), GitError> {
        let dir = dir.to_string_lossy();
        let args = ["config", HOOKS_PATH_KEY, &*dir];
        let output = self.run(&args)?;
        if !output.status.success() {
            return Err(Self::failed(&args, &output));
        }
        tracing::info!(key = HOOKS_PATH_KEY, value = %dir, "set git config");
        Ok(())
    }

    fn unset_hooks_path(&self) -> Result<(), GitError> {
        let args = ["config", "--unset", HOOKS_PATH_KEY];
        let output = self.run(&args)?;
        match output.status.code() {
            Some(0) => {
                tracing::info!(key = HOOKS_PATH_KEY, "unset git config");
                Ok(())
            }
            Some(EXIT_KEY_NOT_SET) => {
                tracing::warn!(key = HOOKS_PATH_KEY, "git config key was not set");
                Ok(())
            }
            _ => Err(Self::failed(&args, &output)),
        }
    }

    fn hooks_path(&self) -> Result<Option<String>, GitError> {
        let args = ["config", "--local", "--get", HOOKS_PATH_KEY];
        let output = self.run(&args)?;
        match output.status.code() {
            Some(0) => Ok(Some(
                String::from_utf8_lossy(&output.stdout).trim().to_string(),
            )),
            Some(EXIT_GET_MISSING) => Ok(None),
            _ => Err(Self::failed(&args, &output)),
        }
    }
}

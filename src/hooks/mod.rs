//! Hook file materialization.
//!
//! [`HookFileWriter`] owns one hooks directory and is the only thing that
//! creates or mutates files inside it. Every mutation runs the same
//! pipeline: validate the name and command, resolve the target path and
//! prove it stays inside the directory, strip residual shell expansion
//! characters, write, then mark the file executable.

use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::{CommandError, HookCommand, HookName, NameError};
use crate::path;

/// Directory used when no configuration overrides it.
pub const DEFAULT_HOOKS_DIR: &str = ".rbgithook";

/// First bytes of every hook file created with [`WriteMode::Set`].
pub const SHEBANG_PREAMBLE: &str = "#!/usr/bin/env sh\n\n";

/// Mode applied to the hooks directory and to every hook file after a write.
#[cfg(unix)]
const EXECUTABLE_MODE: u32 = 0o755;

/// Errors from hook validation, path resolution, and file I/O.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HookError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Command(#[from] CommandError),

    #[error("invalid file path: hook {name:?} resolves to {} outside {}", .resolved.display(), .dir.display())]
    #[diagnostic(code(rbgithook::path::escape))]
    PathEscape {
        name: String,
        dir: PathBuf,
        resolved: PathBuf,
    },

    #[error("invalid file path: {} is a symbolic link", .0.display())]
    #[diagnostic(
        code(rbgithook::path::symlink),
        help("replace the link with a regular file or directory")
    )]
    SymlinkNotAllowed(PathBuf),

    #[error("invalid file path: hook {name:?} resolved to {}", .resolved.display())]
    #[diagnostic(code(rbgithook::path::manipulation))]
    PathManipulation { name: String, resolved: PathBuf },

    #[error("Directory {} not found, please run `rbgithook install` first", .0.display())]
    #[diagnostic(code(rbgithook::dir::missing))]
    DirectoryMissing(PathBuf),

    #[error("File not found, please run `rbgithook set {name} '{command}'`")]
    #[diagnostic(code(rbgithook::hook::missing))]
    HookMissing { name: String, command: String },

    #[error(transparent)]
    #[diagnostic(code(rbgithook::io))]
    Io(#[from] io::Error),
}

/// How [`HookFileWriter::write`] treats an existing hook file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate (or create) and start with the shebang preamble.
    Set,
    /// Append one more command line to an existing hook file.
    Add,
}

/// A hook name and command that passed every validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedHook {
    pub name: HookName,
    pub command: HookCommand,
}

/// Writes and enumerates executable hook scripts inside one directory.
#[derive(Debug, Clone)]
pub struct HookFileWriter {
    dir: PathBuf,
}

impl Default for HookFileWriter {
    fn default() -> Self {
        Self::new(DEFAULT_HOOKS_DIR)
    }
}

impl HookFileWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validate a raw name and command. Name checks run first.
    pub fn validate(&self, name: &str, command: &str) -> Result<ValidatedHook, HookError> {
        let name = HookName::new(name)?;
        let command = HookCommand::new(command)?;
        Ok(ValidatedHook { name, command })
    }

    /// Fail with [`HookError::DirectoryMissing`] unless the hooks directory exists.
    pub fn require_dir(&self) -> Result<(), HookError> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(HookError::DirectoryMissing(self.dir.clone()))
        }
    }

    /// Create the hooks directory (and parents) if absent, mode 0755.
    ///
    /// Returns `true` when the directory was created by this call.
    pub fn ensure_dir(&self) -> Result<bool, HookError> {
        if self.dir.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.dir)?;
        set_executable(&self.dir)?;
        tracing::info!(dir = %self.dir.display(), "created hooks directory");
        Ok(true)
    }

    /// Resolve the on-disk path for a validated hook name.
    pub fn resolve_path(&self, name: &HookName) -> Result<PathBuf, HookError> {
        self.resolve_unchecked(name.as_str())
    }

    /// Path resolution without name validation.
    ///
    /// The containment, symlink, and final-component checks here hold on
    /// their own; [`HookName`] validation is not a prerequisite for safety.
    pub(crate) fn resolve_unchecked(&self, name: &str) -> Result<PathBuf, HookError> {
        let candidate = self.dir.join(name);
        let dir = fs::canonicalize(&self.dir)?;

        let resolved = path::canonicalize_lenient(&candidate)?;
        let resolved = match resolved {
            Some(resolved) if path::is_within(&dir, &resolved) => resolved,
            other => {
                return Err(HookError::PathEscape {
                    name: name.to_string(),
                    dir,
                    resolved: other.unwrap_or(candidate),
                })
            }
        };

        if let Some(parent) = candidate.parent() {
            if path::is_symlink(parent)? {
                return Err(HookError::SymlinkNotAllowed(parent.to_path_buf()));
            }
        }
        if path::is_symlink(&candidate)? {
            return Err(HookError::SymlinkNotAllowed(candidate));
        }

        if resolved.file_name() != Some(OsStr::new(name)) {
            return Err(HookError::PathManipulation {
                name: name.to_string(),
                resolved,
            });
        }

        tracing::debug!(hook = name, path = %resolved.display(), "resolved hook path");
        Ok(resolved)
    }

    /// Validate, resolve, and write one command line into a hook file.
    ///
    /// Validation runs before anything touches the disk, so a rejected call
    /// leaves the filesystem as it was. An I/O failure part-way through a
    /// write is not rolled back. [`WriteMode::Add`] fails with
    /// [`HookError::HookMissing`] when the hook file does not exist yet.
    ///
    /// Returns the path of the written hook file.
    pub fn write(&self, name: &str, command: &str, mode: WriteMode) -> Result<PathBuf, HookError> {
        let hook = self.validate(name, command)?;
        if mode == WriteMode::Add {
            match fs::symlink_metadata(self.dir.join(hook.name.as_str())) {
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Err(HookError::HookMissing {
                        name: name.to_string(),
                        command: command.to_string(),
                    })
                }
                Err(e) => return Err(e.into()),
            }
        }
        self.ensure_dir()?;
        let path = self.resolve_path(&hook.name)?;
        let line = hook.command.sanitized();

        match mode {
            WriteMode::Set => {
                let mut file = fs::File::create(&path)?;
                writeln!(file, "{SHEBANG_PREAMBLE}{line}")?;
            }
            WriteMode::Add => {
                let needs_separator = fs::read(&path)?.last().is_some_and(|b| *b != b'\n');
                let mut file = OpenOptions::new().append(true).open(&path)?;
                if needs_separator {
                    file.write_all(b"\n")?;
                }
                writeln!(file, "{line}")?;
            }
        }

        set_executable(&path)?;
        tracing::info!(hook = %hook.name, ?mode, path = %path.display(), "wrote hook");
        Ok(path)
    }

    /// Names of executable regular files in the hooks directory, sorted.
    ///
    /// A missing directory yields an empty list. Entries that are not valid
    /// hook names (dotfiles, `*.sample`, `pre-commit.sh`) are skipped and
    /// logged at debug level.
    pub fn list(&self) -> Result<Vec<HookName>, HookError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut hooks = Vec::new();
        for entry in entries {
            let entry = entry?;
            let meta = entry.metadata()?;
            if !meta.is_file() || !is_executable(&meta) {
                continue;
            }
            let file_name = entry.file_name();
            let Some(raw) = file_name.to_str() else {
                continue;
            };
            match HookName::new(raw) {
                Ok(name) => hooks.push(name),
                Err(e) => tracing::debug!(entry = raw, error = %e, "skipping non-hook entry"),
            }
        }
        hooks.sort();
        Ok(hooks)
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    true
}

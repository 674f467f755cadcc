use std::path::PathBuf;

use crate::hooks::{HookError, HookFileWriter, WriteMode};

/// Execute `set` or `add`.
///
/// A missing hooks directory or, for `add`, a missing hook file is reported
/// as plain guidance on stderr with exit status 1 instead of a diagnostic.
pub fn run(
    writer: &HookFileWriter,
    name: &str,
    command: &str,
    mode: WriteMode,
) -> miette::Result<()> {
    match execute(writer, name, command, mode) {
        Ok(_) => Ok(()),
        Err(missing @ (HookError::DirectoryMissing(_) | HookError::HookMissing { .. })) => {
            eprintln!("{missing}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn execute(
    writer: &HookFileWriter,
    name: &str,
    command: &str,
    mode: WriteMode,
) -> Result<PathBuf, HookError> {
    writer.require_dir()?;
    writer.write(name, command, mode)
}

use std::path::Path;

use crate::git::{GitConfig, HOOKS_PATH_KEY};
use crate::hooks::HookFileWriter;

/// Print where `core.hooksPath` points and whether the hooks directory exists.
pub fn run(writer: &HookFileWriter, git: &impl GitConfig) -> miette::Result<()> {
    let current = git.hooks_path()?;
    print!(
        "{}",
        describe(writer.dir(), current.as_deref(), writer.dir().is_dir())
    );
    Ok(())
}

fn describe(dir: &Path, current: Option<&str>, dir_exists: bool) -> String {
    let key_line = match current {
        Some(value) if Path::new(value) == dir => format!("{HOOKS_PATH_KEY}: {value}"),
        Some(value) => format!(
            "{HOOKS_PATH_KEY}: {value} (not {}, run `rbgithook install`)",
            dir.display()
        ),
        None => format!("{HOOKS_PATH_KEY}: not set (run `rbgithook install`)"),
    };
    let dir_line = format!(
        "hooks directory: {} ({})",
        dir.display(),
        if dir_exists { "present" } else { "missing" }
    );
    format!("{key_line}\n{dir_line}\n")
}

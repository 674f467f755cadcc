use crate::git::GitConfig;
use crate::hooks::HookFileWriter;

/// Create the hooks directory and point `core.hooksPath` at it.
///
/// Re-running is harmless: an existing directory is left alone and the
/// config key is overwritten with the same value.
pub fn run(writer: &HookFileWriter, git: &impl GitConfig) -> miette::Result<()> {
    writer.ensure_dir()?;
    git.set_hooks_path(writer.dir())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::RecordingGit;
    use tempfile::TempDir;

    #[test]
    fn install_creates_dir_and_sets_hooks_path() {
        let tmp = TempDir::new().unwrap();
        let writer = HookFileWriter::new(tmp.path().join(".rbgithook"));
        let git = RecordingGit::default();

        run(&writer, &git).unwrap();

        assert!(writer.dir().is_dir());
        assert_eq!(
            *git.calls.borrow(),
            vec![format!("set {}", writer.dir().display())]
        );
    }

    #[test]
    fn install_twice_keeps_existing_hooks() {
        let tmp = TempDir::new().unwrap();
        let writer = HookFileWriter::new(tmp.path().join(".rbgithook"));
        let git = RecordingGit::default();

        run(&writer, &git).unwrap();
        writer
            .write("pre-commit", "rubocop", crate::hooks::WriteMode::Set)
            .unwrap();
        run(&writer, &git).unwrap();

        assert_eq!(writer.list().unwrap().len(), 1);
    }
}

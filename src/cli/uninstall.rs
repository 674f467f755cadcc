use crate::git::GitConfig;

/// Unset `core.hooksPath`. Hook files stay on disk.
pub fn run(git: &impl GitConfig) -> miette::Result<()> {
    git.unset_hooks_path()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::RecordingGit;

    #[test]
    fn uninstall_unsets_hooks_path() {
        let git = RecordingGit::default();
        *git.hooks_path.borrow_mut() = Some(".rbgithook".into());

        run(&git).unwrap();

        assert_eq!(*git.hooks_path.borrow(), None);
        assert_eq!(*git.calls.borrow(), vec!["unset"]);
    }
}

pub mod install;
pub mod list;
pub mod status;
pub mod uninstall;
pub mod write;

use clap::Subcommand;

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the hooks directory and point core.hooksPath at it
    Install,
    /// Replace a hook with a single command
    Set {
        /// Hook name, e.g. pre-commit
        name: String,
        /// Command line the hook runs
        #[arg(allow_hyphen_values = true)]
        command: String,
    },
    /// Append a command to a hook created with `set`
    Add {
        /// Hook name, e.g. pre-push
        name: String,
        /// Command line to append
        #[arg(allow_hyphen_values = true)]
        command: String,
    },
    /// List installed hooks
    ///
    /// Shows executable regular files in the hooks directory whose names are
    /// valid hook names (letters, digits, `-`, `_`). Files such as
    /// `pre-commit.sh` or `pre-push.sample` are not listed.
    List {
        /// Print a JSON object instead of one name per line
        #[arg(long)]
        json: bool,
    },
    /// Unset core.hooksPath (hook files are kept)
    Uninstall,
    /// Show where core.hooksPath points
    Status,
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::path::Path;

    use crate::git::{GitConfig, GitError};

    /// In-memory [`GitConfig`] that records every call.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingGit {
        pub(crate) hooks_path: RefCell<Option<String>>,
        pub(crate) calls: RefCell<Vec<String>>,
    }

    impl GitConfig for RecordingGit {
        fn set_hooks_path(&self, dir: &Path) -> Result<(), GitError> {
            let dir = dir.to_string_lossy().to_string();
            self.calls.borrow_mut().push(format!("set {dir}"));
            *self.hooks_path.borrow_mut() = Some(dir);
            Ok(())
        }

        fn unset_hooks_path(&self) -> Result<(), GitError> {
            self.calls.borrow_mut().push("unset".to_string());
            *self.hooks_path.borrow_mut() = None;
            Ok(())
        }

        fn hooks_path(&self) -> Result<Option<String>, GitError> {
            self.calls.borrow_mut().push("get".to_string());
            Ok(self.hooks_path.borrow().clone())
        }
    }
}

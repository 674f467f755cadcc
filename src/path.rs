use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Canonical form of a path that may not exist yet.
///
/// Existing paths are canonicalized directly (symlinks followed). For a
/// missing path, the parent is canonicalized and the final component is
/// re-attached. Returns `Ok(None)` when the path has no usable final
/// component (it ends in `..` or is a root).
pub(crate) fn canonicalize_lenient(path: &Path) -> io::Result<Option<PathBuf>> {
    match std::fs::canonicalize(path) {
        Ok(canonical) => return Ok(Some(canonical)),
        Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
        Err(_) => {}
    }

    let (Some(parent), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Ok(None);
    };
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    Ok(Some(std::fs::canonicalize(parent)?.join(file_name)))
}

/// Whether `candidate` is `dir` itself or lies underneath it.
///
/// Both paths must already be canonical. The prefix is anchored with a
/// trailing separator so `/repo/.rbgithook-evil` is not treated as inside
/// `/repo/.rbgithook`.
pub(crate) fn is_within(dir: &Path, candidate: &Path) -> bool {
    let dir = dir.to_string_lossy();
    let candidate = candidate.to_string_lossy();
    if candidate == dir {
        return true;
    }
    let anchored = if dir.ends_with(MAIN_SEPARATOR) {
        dir.into_owned()
    } else {
        format!("{dir}{MAIN_SEPARATOR}")
    };
    candidate.starts_with(&anchored)
}

/// Whether `path` itself is a symbolic link. Missing paths are not.
pub(crate) fn is_symlink(path: &Path) -> io::Result<bool> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) => Ok(meta.file_type().is_symlink()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ---- is_within tests ----

    #[test]
    fn within_same_dir() {
        assert!(is_within(Path::new("/repo/.rbgithook"), Path::new("/repo/.rbgithook")));
    }

    #[test]
    fn within_direct_child() {
        assert!(is_within(
            Path::new("/repo/.rbgithook"),
            Path::new("/repo/.rbgithook/pre-commit")
        ));
    }

    #[test]
    fn sibling_with_shared_prefix_is_outside() {
        assert!(!is_within(
            Path::new("/repo/.rbgithook"),
            Path::new("/repo/.rbgithook-evil/pre-commit")
        ));
    }

    #[test]
    fn parent_is_outside() {
        assert!(!is_within(Path::new("/repo/.rbgithook"), Path::new("/repo")));
    }

    #[test]
    fn root_dir_contains_everything() {
        assert!(is_within(Path::new("/"), Path::new("/etc/passwd")));
    }

    // ---- canonicalize_lenient tests ----

    #[test]
    fn lenient_existing_path_canonicalized() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("hook");
        std::fs::write(&file, "").unwrap();
        let expected = std::fs::canonicalize(&file).unwrap();
        assert_eq!(canonicalize_lenient(&file).unwrap(), Some(expected));
    }

    #[test]
    fn lenient_missing_leaf_joins_canonical_parent() {
        let tmp = TempDir::new().unwrap();
        let canonical_tmp = std::fs::canonicalize(tmp.path()).unwrap();
        assert_eq!(
            canonicalize_lenient(&tmp.path().join("missing")).unwrap(),
            Some(canonical_tmp.join("missing"))
        );
    }

    #[test]
    fn lenient_dotdot_resolves_upwards() {
        let tmp = TempDir::new().unwrap();
        let hooks = tmp.path().join("hooks");
        std::fs::create_dir(&hooks).unwrap();
        let canonical_tmp = std::fs::canonicalize(tmp.path()).unwrap();
        assert_eq!(
            canonicalize_lenient(&hooks.join("..").join("outside")).unwrap(),
            Some(canonical_tmp.join("outside"))
        );
    }

    #[test]
    fn lenient_missing_parent_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = canonicalize_lenient(&tmp.path().join("nope").join("leaf")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    // ---- is_symlink tests ----

    #[test]
    fn missing_path_is_not_symlink() {
        let tmp = TempDir::new().unwrap();
        assert!(!is_symlink(&tmp.path().join("missing")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_detected_without_following() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target");
        std::fs::write(&target, "").unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(is_symlink(&link).unwrap());
        assert!(!is_symlink(&target).unwrap());
    }
}

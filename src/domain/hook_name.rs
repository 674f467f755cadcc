/// Substrings that let a name climb out of, or address outside of, the hooks directory.
///
/// The percent-encoded forms are matched case-insensitively.
const TRAVERSAL_PATTERNS: &[&str] = &["..", "/", "\\", "\0", "%2e%2e", "%2f", "%5c"];

/// Error from hook name validation.
///
/// Variants are checked in declaration order; the first failing check wins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum NameError {
    #[error("hook name cannot be empty")]
    #[diagnostic(code(rbgithook::name::empty), help("pass a hook name such as `pre-commit`"))]
    Empty,

    #[error("hook name {name:?} contains traversal pattern {pattern:?}")]
    #[diagnostic(
        code(rbgithook::name::traversal),
        help("hook names cannot contain path separators or traversal patterns")
    )]
    TraversalPattern { name: String, pattern: String },

    #[error("hook name {0:?} starts with '.'; hidden files are not allowed")]
    #[diagnostic(code(rbgithook::name::hidden))]
    HiddenFile(String),

    #[error("hook name {name:?} contains control character 0x{byte:02x}")]
    #[diagnostic(code(rbgithook::name::control))]
    ControlCharacter { name: String, byte: u8 },

    #[error("hook name {0:?} has invalid characters")]
    #[diagnostic(
        code(rbgithook::name::charset),
        help("hook names can only contain alphanumeric characters, hyphens, and underscores")
    )]
    InvalidCharacterSet(String),
}

/// A validated hook file name (e.g. `pre-commit`).
///
/// Guaranteed to match `^[A-Za-z0-9_-]+$`, which rules out separators,
/// dots, control bytes and anything else the filesystem gives meaning to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HookName(pub(crate) String);

impl HookName {
    /// Validate a raw name.
    ///
    /// Check order: empty, traversal patterns, leading dot, control bytes,
    /// character set.
    pub fn new(raw: &str) -> Result<Self, NameError> {
        if raw.is_empty() {
            return Err(NameError::Empty);
        }

        let lowered = raw.to_ascii_lowercase();
        if let Some(pattern) = TRAVERSAL_PATTERNS.iter().find(|p| lowered.contains(**p)) {
            return Err(NameError::TraversalPattern {
                name: raw.to_string(),
                pattern: pattern.escape_default().to_string(),
            });
        }

        if raw.starts_with('.') {
            return Err(NameError::HiddenFile(raw.to_string()));
        }

        if let Some(byte) = raw.bytes().find(|b| b.is_ascii_control()) {
            return Err(NameError::ControlCharacter {
                name: raw.to_string(),
                byte,
            });
        }

        if !raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(NameError::InvalidCharacterSet(raw.to_string()));
        }

        Ok(HookName(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for HookName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HookName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for HookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operator sequences rejected in hook commands.
///
/// Two-character sequences come first so that `a && b` is reported as `&&`
/// rather than `&`.
const DANGEROUS_SEQUENCES: &[&str] = &[
    "&&", "||", ";", "&", "|", "`", "$", "(", ")", ">", "<",
];

/// Characters stripped by [`sanitize`].
const STRIPPED_CHARS: &[char] = &['`', '$'];

/// Error from hook command validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum CommandError {
    #[error("hook command cannot be empty")]
    #[diagnostic(code(rbgithook::command::empty))]
    Empty,

    #[error("hook command {command:?} contains potentially dangerous characters: {pattern:?}")]
    #[diagnostic(
        code(rbgithook::command::dangerous),
        help("a hook line runs one plain command; wrap anything more complex in a script and call that")
    )]
    DangerousCharacter { command: String, pattern: String },

    #[error("hook command {0:?} cannot contain newline characters")]
    #[diagnostic(
        code(rbgithook::command::multiline),
        help("use `rbgithook add` once per line")
    )]
    Multiline(String),
}

/// A validated one-line shell command to embed in a hook script.
///
/// The stored string is the raw input. Call [`HookCommand::sanitized`] for
/// the text that actually lands in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookCommand(pub(crate) String);

impl HookCommand {
    /// Validate a raw command.
    ///
    /// Check order: empty, dangerous sequences, line breaks. A command that
    /// does not parse as one simple shell command is still accepted but
    /// logged as a warning.
    pub fn new(raw: &str) -> Result<Self, CommandError> {
        if raw.is_empty() {
            return Err(CommandError::Empty);
        }

        if let Some(pattern) = DANGEROUS_SEQUENCES.iter().find(|p| raw.contains(**p)) {
            return Err(CommandError::DangerousCharacter {
                command: raw.to_string(),
                pattern: pattern.to_string(),
            });
        }

        if raw.contains(['\n', '\r']) {
            return Err(CommandError::Multiline(raw.to_string()));
        }

        match crate::command::single_program(raw) {
            Ok(program) => tracing::debug!(command = raw, %program, "validated hook command"),
            Err(reason) => tracing::warn!(
                command = raw,
                %reason,
                "hook command is not a single simple command; the hook may not run as expected"
            ),
        }

        Ok(HookCommand(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The command with backticks and dollar signs removed.
    pub fn sanitized(&self) -> String {
        sanitize(&self.0)
    }
}

/// Strip every backtick and dollar sign from a command string.
///
/// Runs on every write even though [`HookCommand::new`] already rejects
/// both characters.
pub fn sanitize(command: &str) -> String {
    command.replace(STRIPPED_CHARS, "")
}

use brush_parser::ast;

/// The single program invocation a hook line resolves to.
#[derive(Debug, PartialEq)]
pub(crate) struct CommandSegment {
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
}

impl std::fmt::Display for CommandSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Why a command string is not exactly one simple command.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("shell syntax error: {0}")]
    Parse(String),
    #[error("no command to run")]
    NoCommand,
    #[error("more than one command")]
    MultipleCommands,
    #[error("compound shell construct")]
    Compound,
}

/// Parse a command string and require it to be one simple command.
///
/// Uses brush-parser to build a shell AST. Lists, pipelines, and compound
/// commands (groups, loops, conditionals, functions) are rejected, as is
/// input with no command word at all (blank or comment-only).
pub(crate) fn single_program(command: &str) -> Result<CommandSegment, ShapeError> {
    if command.trim().is_empty() {
        return Err(ShapeError::NoCommand);
    }

    let mut parser = brush_parser::Parser::builder()
        .reader(std::io::Cursor::new(command.to_string()))
        .build();

    let program = parser
        .parse_program()
        .map_err(|e| ShapeError::Parse(e.to_string()))?;

    // CompleteCommand = CompoundList, CompoundList.0 = Vec<CompoundListItem>
    let complete_command = match program.complete_commands.as_slice() {
        [] => return Err(ShapeError::NoCommand),
        [only] => only,
        _ => return Err(ShapeError::MultipleCommands),
    };
    let and_or = match complete_command.0.as_slice() {
        [] => return Err(ShapeError::NoCommand),
        [item] => &item.0,
        _ => return Err(ShapeError::MultipleCommands),
    };
    if !and_or.additional.is_empty() {
        return Err(ShapeError::MultipleCommands);
    }
    let command = match and_or.first.seq.as_slice() {
        [] => return Err(ShapeError::NoCommand),
        [only] => only,
        _ => return Err(ShapeError::MultipleCommands),
    };

    match command {
        ast::Command::Simple(simple) => {
            let name = simple
                .word_or_name
                .as_ref()
                .map(|word| word.flatten())
                .unwrap_or_default();
            if name.is_empty() {
                return Err(ShapeError::NoCommand);
            }
            Ok(CommandSegment {
                program: name,
                args: args_from_suffix(&simple.suffix),
            })
        }
        _ => Err(ShapeError::Compound),
    }
}

/// Collect plain word arguments, skipping redirections and assignments.
fn args_from_suffix(suffix: &Option<ast::CommandSuffix>) -> Vec<String> {
    let Some(suffix) = suffix else {
        return vec![];
    };
    suffix
        .0
        .iter()
        .filter_map(|item| match item {
            ast::CommandPrefixOrSuffixItem::Word(word) => Some(word.flatten()),
            _ => None,
        })
        .collect()
}

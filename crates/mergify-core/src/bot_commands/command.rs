use thiserror::Error;

/// Command error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command.
    #[error("This command is unknown.")]
    UnknownCommand { command: String },
    /// Incomplete command.
    #[error("Incomplete command.")]
    IncompleteCommand,
}

/// Command result.
pub type CommandResult<T> = core::result::Result<T, CommandError>;

/// Bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-evaluate the pull request.
    Refresh,
    /// Merge the base branch into the pull request.
    Update,
    /// Rebase the pull request on its base branch.
    Rebase,
    /// Backport the pull request to target branches once merged.
    Backport(Vec<String>),
}

impl Command {
    /// Parse a command from its name and arguments.
    pub fn from_comment(command: &str, args: &[&str]) -> CommandResult<Self> {
        Ok(match command {
            "refresh" => Self::Refresh,
            "update" => Self::Update,
            "rebase" => Self::Rebase,
            "backport" => {
                if args.is_empty() {
                    return Err(CommandError::IncompleteCommand);
                }
                Self::Backport(args.iter().map(|arg| arg.to_string()).collect())
            }
            unknown => {
                return Err(CommandError::UnknownCommand {
                    command: unknown.into(),
                })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandError};

    #[test]
    fn from_comment() {
        assert_eq!(Command::from_comment("refresh", &[]), Ok(Command::Refresh));
        assert_eq!(Command::from_comment("update", &[]), Ok(Command::Update));
        assert_eq!(Command::from_comment("rebase", &[]), Ok(Command::Rebase));
        assert_eq!(
            Command::from_comment("backport", &["stable/1.0", "stable/2.0"]),
            Ok(Command::Backport(vec![
                "stable/1.0".into(),
                "stable/2.0".into()
            ]))
        );
    }

    #[test]
    fn backport_needs_a_target() {
        assert_eq!(
            Command::from_comment("backport", &[]),
            Err(CommandError::IncompleteCommand)
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            Command::from_comment("dance", &[]),
            Err(CommandError::UnknownCommand {
                command: "dance".into()
            })
        );
    }
}

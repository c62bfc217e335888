use mergify_config::Config;

use super::command::{Command, CommandResult};

/// Command parser.
pub struct CommandParser;

impl CommandParser {
    /// Whether a comment body is addressed to the bot at all.
    ///
    /// The mention must be followed by a space, matching how users write
    /// `@mergify refresh` on one line.
    pub fn mentions_bot(config: &Config, comment_body: &str) -> bool {
        let body = comment_body.to_lowercase();
        body.contains(&format!("@{} ", config.name))
            || body.contains(&format!("@{}io ", config.name))
    }

    /// Parse commands from comment body.
    pub fn parse_commands(config: &Config, comment_body: &str) -> Vec<CommandResult<Command>> {
        let mut commands = vec![];

        for line in comment_body.lines() {
            match Self::parse_single_command(config, line) {
                Err(e) => {
                    commands.push(Err(e));
                }
                Ok(Some(command)) => {
                    commands.push(Ok(command));
                }
                Ok(None) => (),
            }
        }

        commands
    }

    /// Parse command from a single comment line.
    pub fn parse_single_command(config: &Config, line: &str) -> CommandResult<Option<Command>> {
        if let Some((command_line, args)) =
            Self::parse_command_string_from_comment_line(config, line)
        {
            let command = Command::from_comment(command_line, &args)?;
            Ok(Some(command))
        } else {
            Ok(None)
        }
    }

    /// Parse command string from comment line.
    pub fn parse_command_string_from_comment_line<'a>(
        config: &Config,
        comment: &'a str,
    ) -> Option<(&'a str, Vec<&'a str>)> {
        let mut split = comment.split_whitespace();
        let mention = split.next()?.to_lowercase();

        if mention == format!("@{}", config.name) || mention == format!("@{}io", config.name) {
            if let Some(command) = split.next() {
                // Take command and remaining args
                return Some((command, split.collect()));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use mergify_config::Config;
    use pretty_assertions::assert_eq;

    use super::CommandParser;
    use crate::bot_commands::{Command, CommandError};

    fn create_test_config() -> Config {
        let mut config = Config::from_env_no_version();
        config.name = "mergify".into();
        config
    }

    #[test]
    fn mentions_bot() {
        let config = create_test_config();

        assert!(CommandParser::mentions_bot(&config, "@mergify refresh"));
        assert!(CommandParser::mentions_bot(&config, "@mergifyio refresh"));
        assert!(CommandParser::mentions_bot(&config, "@MERGIFY refresh"));
        assert!(!CommandParser::mentions_bot(&config, "looks good"));
        assert!(!CommandParser::mentions_bot(&config, "ping @mergify"));
    }

    #[test]
    fn parse_command_string_from_comment_line() {
        let config = create_test_config();

        assert_eq!(
            CommandParser::parse_command_string_from_comment_line(&config, "@mergify refresh"),
            Some(("refresh", vec![]))
        );

        assert_eq!(
            CommandParser::parse_command_string_from_comment_line(
                &config,
                "@mergifyio backport stable/1.0"
            ),
            Some(("backport", vec!["stable/1.0"]))
        );

        assert_eq!(
            CommandParser::parse_command_string_from_comment_line(&config, "refresh please"),
            None
        );
    }

    #[test]
    fn parse_commands() {
        let config = create_test_config();
        let commands = CommandParser::parse_commands(
            &config,
            "Thanks!\n@mergify refresh\n@mergifyio dance\nunrelated line",
        );

        assert_eq!(
            commands,
            vec![
                Ok(Command::Refresh),
                Err(CommandError::UnknownCommand {
                    command: "dance".into()
                }),
            ]
        );
    }

    #[test]
    fn mention_alone_is_not_a_command() {
        let config = create_test_config();
        assert_eq!(
            CommandParser::parse_single_command(&config, "@mergify"),
            Ok(None)
        );
    }
}

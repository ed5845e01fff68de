use std::str::FromStr;

use crate::errors::RankingError;

/// One step of a ranking script.
///
/// Scripts are plain text, one command per line:
///
/// * `best <category>` queries the top item of a category
/// * `change <item> <score>` sets a new score for an item
///
/// Item and category names may contain inner spaces: `best` takes the rest of the line as the
/// category, and `change` takes the last token as the score.
///
/// # Examples
///
/// ```
/// # use ferris_rankings::commands::Command;
/// let cmd: Command = "change sushi 16".parse().unwrap();
/// assert_eq!(
///     cmd,
///     Command::Change { item: "sushi".to_string(), score: 16 }
/// );
///
/// let cmd: Command = "best japanese".parse().unwrap();
/// assert_eq!(cmd, Command::Best("japanese".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Best(String),
    Change { item: String, score: i64 },
}

impl FromStr for Command {
    type Err = RankingError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let invalid = || RankingError::ParseError(format!("invalid command '{}'", line));

        // names may contain inner spaces, only the keyword and the score are single tokens
        let (keyword, rest) = line.split_once(char::is_whitespace).ok_or_else(invalid)?;
        let rest = rest.trim_start();

        match keyword {
            "best" => Ok(Command::Best(rest.to_string())),
            "change" => {
                let (item, score) = rest.rsplit_once(char::is_whitespace).ok_or_else(invalid)?;
                let item = item.trim_end();
                if item.is_empty() {
                    return Err(invalid());
                }
                let score = score.parse::<i64>().map_err(|e| {
                    RankingError::ParseError(format!("invalid score '{}': {}", score, e))
                })?;
                Ok(Command::Change {
                    item: item.to_string(),
                    score,
                })
            }
            _ => Err(invalid()),
        }
    }
}

/// Parses a whole script, skipping blank lines and `#` comments.
///
/// Errors name the 1-based line number of the offending command.
pub fn parse_script<'a, L>(lines: L) -> Result<Vec<Command>, RankingError>
where
    L: IntoIterator<Item = &'a str>,
{
    let mut commands = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command = line.parse::<Command>().map_err(|e| match e {
            RankingError::ParseError(msg) => {
                RankingError::ParseError(format!("line {}: {}", idx + 1, msg))
            }
            other => other,
        })?;
        commands.push(command);
    }
    Ok(commands)
}

pub mod args;
pub mod commands;
pub mod config;
pub mod errors;
pub mod ranking_index;
pub mod ranking_queue;

use crate::commands::Command;
use crate::config::Config;
use crate::errors::RankingError;
use crate::ranking_index::RankingIndex;
use std::error::Error;

/// Builds a [`RankingIndex`] from the configured dataset, runs the configured script against it
/// and prints one line per answered query.
///
/// # Errors
///
/// Returns an error if the dataset cannot be indexed or if [`execute`] fails.
pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let dataset = &config.dataset;
    let mut index = RankingIndex::new(&dataset.items, &dataset.categories, &dataset.scores)?;

    log::info!(
        "Running {} commands against {} items",
        config.commands.len(),
        index.len()
    );

    for line in execute(&mut index, &config.commands, config.strict)? {
        println!("{}", line);
    }

    if config.verbose {
        let mut categories: Vec<&str> = index.categories().collect();
        categories.sort_unstable();
        for category in categories {
            log::debug!(
                "{} holds {} queue entries",
                category,
                index.queue_len(category).unwrap_or_default()
            );
        }
    }

    Ok(())
}

/// Applies `commands` to `index` in order and returns the answer to each `best` query,
/// formatted as `<category>: <item> (<score>)`.
///
/// Queries on unknown categories are logged and skipped. Score changes for unknown items are
/// ignored unless `strict` is set, in which case they abort with
/// [`RankingError::UnknownItem`]. An [`RankingError::EmptyCategory`] always aborts.
///
/// # Examples
///
/// ```
/// # use ferris_rankings::commands::Command;
/// # use ferris_rankings::ranking_index::RankingIndex;
/// let mut index = RankingIndex::new(&["kimchi", "bulgogi"], &["korean", "korean"], &[9, 7]).unwrap();
/// let commands = vec![
///     Command::Change { item: "kimchi".to_string(), score: 3 },
///     Command::Best("korean".to_string()),
/// ];
///
/// let answers = ferris_rankings::execute(&mut index, &commands, false).unwrap();
/// assert_eq!(answers, vec!["korean: bulgogi (7)"]);
/// ```
pub fn execute(
    index: &mut RankingIndex,
    commands: &[Command],
    strict: bool,
) -> Result<Vec<String>, RankingError> {
    let mut answers = Vec::new();

    for command in commands {
        match command {
            Command::Change { item, score } => {
                if strict {
                    index.try_change_score(item, *score)?;
                } else {
                    index.change_score(item, *score);
                }
            }
            Command::Best(category) => {
                let best = index.best_in_category(category).map(str::to_string);
                match best {
                    Ok(item) => {
                        let score = index.score_of(&item).unwrap_or_default();
                        answers.push(format!("{}: {} ({})", category, item, score));
                    }
                    Err(e @ RankingError::UnknownCategory(_)) => log::error!("{}", e),
                    Err(e) => return Err(e),
                }
            }
        }
    }

    Ok(answers)
}

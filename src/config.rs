use crate::args::Args;
use crate::commands::{parse_script, Command};
use crate::errors::RankingError;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};

const SAMPLE_DATASET: &str = "\
kimchi,korean,9
miso,japanese,12
sushi,japanese,8
moussaka,greek,15
ramen,japanese,14
bulgogi,korean,7
";

const SAMPLE_SCRIPT: &str = "\
best korean
best japanese
change sushi 16
best japanese
change kimchi 3
best korean
";

/// The three parallel sequences a [`crate::ranking_index::RankingIndex`] is built from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub items: Vec<String>,
    pub categories: Vec<String>,
    pub scores: Vec<i64>,
}

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `dataset` - Items, categories and initial scores to index
/// * `commands` - Script of queries and score changes to run against the index
/// * `strict` - Bool to determine if score changes for unknown items abort the run
/// * `verbose` - Bool to determine if debug level logging is enabled
///
#[derive(Clone)]
pub struct Config {
    pub dataset: Dataset,
    pub commands: Vec<Command>,
    pub strict: bool,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Details
    ///
    /// 1. Loads the dataset file if one was supplied, else the built-in sample
    /// 2. Loads the script file if one was supplied, else the sample scenario
    /// 3. Copies the strict and verbose flags
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * A dataset or script file cannot be opened or read
    /// * A dataset record or script command is malformed
    ///
    pub fn build(args: &Args) -> Result<Config, Box<dyn Error>> {
        let dataset = match &args.data_file {
            Some(path) => {
                log::info!("Loading dataset from {}", path);
                parse_dataset(read_lines(path)?.iter().map(String::as_str))?
            }
            None => {
                log::info!("No dataset provided, using built-in sample");
                parse_dataset(SAMPLE_DATASET.lines())?
            }
        };

        let commands = match &args.script_file {
            Some(path) => {
                log::info!("Loading script from {}", path);
                parse_script(read_lines(path)?.iter().map(String::as_str))?
            }
            None => parse_script(SAMPLE_SCRIPT.lines())?,
        };

        Ok(Config {
            dataset,
            commands,
            strict: args.strict,
            verbose: args.verbose,
        })
    }
}

fn read_lines(path: &str) -> Result<Vec<String>, RankingError> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

/// Parses `item,category,score` records, skipping blank lines and `#` comments.
///
/// Fields are split on every comma and there is no escaping, so item and category names
/// cannot contain a comma. Surrounding whitespace is trimmed; inner spaces are kept.
///
/// # Examples
///
/// ```
/// # use ferris_rankings::config::parse_dataset;
/// let dataset = parse_dataset("# food\nkimchi, korean, 9\n\nmiso,japanese,-2".lines()).unwrap();
/// assert_eq!(dataset.items, vec!["kimchi", "miso"]);
/// assert_eq!(dataset.categories, vec!["korean", "japanese"]);
/// assert_eq!(dataset.scores, vec![9, -2]);
/// ```
pub fn parse_dataset<'a, L>(lines: L) -> Result<Dataset, RankingError>
where
    L: IntoIterator<Item = &'a str>,
{
    let mut dataset = Dataset::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let (item, category, score) = match fields.as_slice() {
            [item, category, score] if !item.is_empty() && !category.is_empty() => {
                (*item, *category, *score)
            }
            _ => {
                return Err(RankingError::ParseError(format!(
                    "line {}: expected 'item,category,score', found '{}'",
                    idx + 1,
                    line
                )))
            }
        };
        let score = score.parse::<i64>().map_err(|e| {
            RankingError::ParseError(format!("line {}: invalid score '{}': {}", idx + 1, score, e))
        })?;

        dataset.items.push(item.to_string());
        dataset.categories.push(category.to_string());
        dataset.scores.push(score);
    }

    Ok(dataset)
}

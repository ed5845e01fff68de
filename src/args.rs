use clap::Parser;
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// (optional) File of `item,category,score` records, defaults to a built-in sample
    #[arg(short = 'd', long = "data")]
    pub data_file: Option<String>,

    /// (optional) File of `best <category>` / `change <item> <score>` commands, one per line
    #[arg(short = 's', long = "script")]
    pub script_file: Option<String>,

    /// (optional) Abort when a script changes the score of an unknown item
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

use std::process;

use clap::Parser;
use env_logger::Env;

use ferris_rankings::args::Args;
use ferris_rankings::config::Config;

fn main() {
    let args = Args::parse();

    // RUST_LOG still wins over the verbose flag
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not load configuration: {err}");
        process::exit(1);
    });

    if let Err(e) = ferris_rankings::run(config) {
        eprintln!("Fatal Error: {e}");
        process::exit(1);
    }
}

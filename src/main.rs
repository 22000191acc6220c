use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ydict::cli::Cli;
use ydict::config::Config;
use ydict::error::{Error, Result};
use ydict::services::wordlist::store;
use ydict::services::{lookup, pager};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&Cli::parse()) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::default();

    if cli.list {
        if !config.store_enabled {
            return Err(Error::WordlistDisabled);
        }
        store::ensure_exists(&config.wordlist_path)?;
        return pager::view(&config.wordlist_path);
    }

    let word = cli.word.as_deref().ok_or(Error::Usage)?;

    let output = lookup::run(&config, word)?;
    println!("{output}");

    Ok(())
}

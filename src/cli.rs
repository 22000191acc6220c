use clap::Parser;

/// Youdao dictionary lookup with a local wordlist cache.
#[derive(Debug, Parser)]
#[command(name = "ydict", version, about)]
pub struct Cli {
    /// Word to look up
    pub word: Option<String>,

    /// Open the local wordlist in the system pager
    #[arg(short = 'l', long = "list")]
    pub list: bool,
}

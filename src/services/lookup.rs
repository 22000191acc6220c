use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::wordlist::{normalize, record, store};
use crate::services::{render, youdao};

/// Resolves one query end to end and returns the formatted output;
/// printing is the caller's job.
///
/// With the local store enabled the wordlist is consulted first: a hit is
/// reformatted without touching the network, a miss falls through to the
/// API and the fresh result is appended for next time. A store that
/// cannot be created is a fatal error, not a downgrade to network-only.
pub fn run(config: &Config, raw_word: &str) -> Result<String> {
    let word = normalize::normalize(raw_word);
    if word.is_empty() {
        return Err(Error::Usage);
    }

    if !config.store_enabled {
        let result = youdao::lookup(config, &word)?;
        return Ok(render::network(&result));
    }

    store::ensure_exists(&config.wordlist_path)?;

    if let Some(block) = store::find(&config.wordlist_path, &word)? {
        debug!("serving `{word}` from the wordlist");
        let result = record::parse(&block);
        return Ok(render::cached(&result));
    }

    let result = youdao::lookup(config, &word)?;
    store::append(&config.wordlist_path, &record::serialize(&result))?;

    Ok(render::network(&result))
}

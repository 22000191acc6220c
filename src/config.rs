use std::env;
use std::path::PathBuf;

const KEYFROM: &str = "KEYFROM"; // your keyfrom string from the Youdao API
const KEY: &str = "KEY"; // your API key string from the Youdao API
const API_URL: &str = "http://fanyi.youdao.com/openapi.do";

const WORDLIST_FILE: &str = ".ydict_words";

/// Everything the lookup path needs, passed in explicitly so nothing
/// reads process-wide state after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub keyfrom: String,
    pub key: String,
    pub endpoint: String,
    pub store_enabled: bool,
    pub wordlist_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keyfrom: KEYFROM.to_string(),
            key: KEY.to_string(),
            endpoint: API_URL.to_string(),
            store_enabled: true,
            wordlist_path: wordlist_base_dir().join(WORDLIST_FILE),
        }
    }
}

fn wordlist_base_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home);
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

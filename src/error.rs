use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is terminal: main prints the message once and exits 1.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("usage: ydict <word> | ydict -l")]
    Usage,

    #[error("failed to reach the Youdao API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Youdao API answered HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("word is too long for the API (limit 200 characters)")]
    InputTooLong,

    #[error("could not get the translation")]
    TranslationUnavailable,

    #[error("this language is not supported")]
    UnsupportedLanguage,

    #[error("invalid API key or keyfrom")]
    InvalidCredentials,

    #[error("no dictionary entry for `{0}`")]
    WordNotFound(String),

    #[error("Youdao API reported error code {0}")]
    Api(i64),

    #[error("cannot open wordlist at {}: {source}", .path.display())]
    Storage { path: PathBuf, source: io::Error },

    #[error("failed to launch the pager: {0}")]
    Pager(io::Error),

    #[error("the local wordlist is disabled")]
    WordlistDisabled,
}

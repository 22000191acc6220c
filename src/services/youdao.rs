use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::result::{LookupResult, Senses, WebExample, DICT_LABEL};

const TIMEOUT_SECS: u64 = 10;

/// Wire envelope of the openapi endpoint. Everything except the error
/// code may be absent.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "errorCode")]
    error_code: i64,
    #[serde(default)]
    query: String,
    #[serde(default)]
    translation: Vec<String>,
    basic: Option<Basic>,
    #[serde(default)]
    web: Vec<WebItem>,
}

#[derive(Debug, Deserialize)]
struct Basic {
    #[serde(default)]
    phonetic: String,
    #[serde(default)]
    explains: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WebItem {
    key: String,
    #[serde(default)]
    value: Vec<String>,
}

/// Performs one blocking lookup against the Youdao openapi endpoint.
/// `word` must already be normalized. No retry: every failure is terminal.
pub fn lookup(config: &Config, word: &str) -> Result<LookupResult> {
    let client = Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;

    debug!("querying {} for `{word}`", config.endpoint);

    let response = client
        .get(&config.endpoint)
        .query(&[
            ("keyfrom", config.keyfrom.as_str()),
            ("key", config.key.as_str()),
            ("type", "data"),
            ("doctype", "json"),
            ("version", "1.1"),
            ("q", word),
        ])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status));
    }

    let envelope: Envelope = response.json()?;
    debug!("youdao answered with error code {}", envelope.error_code);

    into_result(envelope, word)
}

fn into_result(envelope: Envelope, word: &str) -> Result<LookupResult> {
    match envelope.error_code {
        0 => {}
        20 => return Err(Error::InputTooLong),
        30 => return Err(Error::TranslationUnavailable),
        40 => return Err(Error::UnsupportedLanguage),
        50 => return Err(Error::InvalidCredentials),
        code => return Err(Error::Api(code)),
    }

    // code 0 without a basic section means the word does not exist
    let basic = match envelope.basic {
        Some(basic) => basic,
        None => return Err(Error::WordNotFound(word.to_string())),
    };

    let word = if envelope.query.is_empty() {
        word.to_string()
    } else {
        envelope.query
    };

    Ok(LookupResult {
        word,
        pronunciation: format!("[{}]", basic.phonetic),
        translation: envelope.translation,
        senses: Senses::single(DICT_LABEL, basic.explains),
        web_examples: envelope
            .web
            .into_iter()
            .map(|item| WebExample {
                phrase: item.key,
                usages: item.value,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::{into_result, Envelope};
    use crate::error::Error;
    use crate::model::result::DICT_LABEL;

    fn envelope(json: &str) -> Envelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn success_envelope_maps_to_a_result() {
        let env = envelope(
            r#"{"errorCode":0, "query":"test", "translation":["测试"],
                "basic":{"phonetic":"test", "explains":["n. test"]},
                "web":[{"key":"test drive","value":["试驾"]}]}"#,
        );

        let result = into_result(env, "test").unwrap();

        assert_eq!(result.word, "test");
        assert_eq!(result.pronunciation, "[test]");
        assert_eq!(result.translation, ["测试"]);
        assert_eq!(
            result.senses.get(DICT_LABEL),
            Some(&["n. test".to_string()][..])
        );
        assert_eq!(result.web_examples.len(), 1);
        assert_eq!(result.web_examples[0].phrase, "test drive");
        assert_eq!(result.web_examples[0].usages, ["试驾"]);
    }

    #[test]
    fn error_code_fifty_is_invalid_credentials() {
        let err = into_result(envelope(r#"{"errorCode":50}"#), "test").unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }

    #[test]
    fn error_codes_map_to_distinct_errors() {
        let cases = [
            (20, "word is too long"),
            (30, "could not get the translation"),
            (40, "not supported"),
        ];

        for (code, fragment) in cases {
            let err =
                into_result(envelope(&format!(r#"{{"errorCode":{code}}}"#)), "x").unwrap_err();
            assert!(err.to_string().contains(fragment), "code {code}: {err}");
        }
    }

    #[test]
    fn unknown_error_code_is_reported_as_is() {
        let err = into_result(envelope(r#"{"errorCode":666}"#), "x").unwrap_err();
        assert!(matches!(err, Error::Api(666)));
    }

    #[test]
    fn code_zero_without_basic_is_word_not_found() {
        let env = envelope(r#"{"errorCode":0, "query":"zzzz", "translation":["zzzz"]}"#);
        let err = into_result(env, "zzzz").unwrap_err();
        assert!(matches!(err, Error::WordNotFound(w) if w == "zzzz"));
    }
}

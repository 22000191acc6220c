use regex::Regex;

use crate::model::result::{LookupResult, Senses};

/// Serializes a result into one wordlist block: a header line holding the
/// word and its pronunciation, a bracketed label line per sense group
/// followed by that group's explanation lines, and a terminating blank
/// line so the next append starts a fresh block.
///
/// Translation glosses and web examples are not written; the cache keeps
/// only what the cached display needs.
pub fn serialize(result: &LookupResult) -> String {
    let mut out = String::new();

    out.push_str(&result.word);
    if !result.pronunciation.is_empty() {
        out.push(' ');
        out.push_str(&result.pronunciation);
    }
    out.push('\n');

    for (label, lines) in result.senses.iter() {
        out.push('[');
        out.push_str(label);
        out.push_str("]\n");
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
    }

    out.push('\n');
    out
}

/// Rebuilds a result from the raw lines of one block.
///
/// The word is the first whitespace-delimited token of the header line,
/// the pronunciation is whatever follows it. Senses are collected from
/// bracketed label lines; a label with no following lines keeps an empty
/// group. Lines before the first label are discarded. Malformed input
/// degrades to empty fields, never an error.
pub fn parse(lines: &[String]) -> LookupResult {
    let label_re = Regex::new(r"^\[(.+)\]$").unwrap();

    let (word, pronunciation) = match lines.first() {
        Some(header) => split_header(header),
        None => (String::new(), String::new()),
    };

    let mut senses = Senses::new();
    let mut current: Option<String> = None;

    for line in lines.iter().skip(1) {
        if let Some(caps) = label_re.captures(line.trim()) {
            let label = caps[1].to_string();
            senses.open(&label);
            current = Some(label);
            continue;
        }

        match &current {
            Some(label) => senses.push(label, line.clone()),
            None => {} // preamble line, dropped
        }
    }

    LookupResult {
        word,
        pronunciation,
        translation: Vec::new(),
        senses,
        web_examples: Vec::new(),
    }
}

fn split_header(line: &str) -> (String, String) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word.to_string(), rest.trim_start().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, serialize};
    use crate::model::result::{LookupResult, Senses, WebExample, DICT_LABEL};

    fn sample() -> LookupResult {
        LookupResult {
            word: "test".to_string(),
            pronunciation: "[test]".to_string(),
            translation: vec!["测试".to_string()],
            senses: Senses::single(
                DICT_LABEL,
                vec!["n. 测试；试验".to_string(), "vt. 试验".to_string()],
            ),
            web_examples: vec![WebExample {
                phrase: "test drive".to_string(),
                usages: vec!["试驾".to_string()],
            }],
        }
    }

    fn as_lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn round_trip_keeps_word_pronunciation_and_senses() {
        let parsed = parse(&as_lines(&serialize(&sample())));

        assert_eq!(parsed.word, "test");
        assert_eq!(parsed.pronunciation, "[test]");
        assert_eq!(parsed.senses, sample().senses);
    }

    #[test]
    fn round_trip_drops_translation_and_web_examples() {
        let parsed = parse(&as_lines(&serialize(&sample())));

        assert!(parsed.translation.is_empty());
        assert!(parsed.web_examples.is_empty());
    }

    #[test]
    fn serialized_block_ends_with_a_blank_line() {
        assert!(serialize(&sample()).ends_with("\n\n"));
    }

    #[test]
    fn preamble_lines_are_discarded() {
        let lines = as_lines("hello [həˈləʊ]\nstray note\n[词典]\nint. 喂");
        let parsed = parse(&lines);

        assert_eq!(parsed.senses.len(), 1);
        assert_eq!(
            parsed.senses.get("词典"),
            Some(&["int. 喂".to_string()][..])
        );
    }

    #[test]
    fn label_without_lines_keeps_an_empty_group() {
        let lines = as_lines("dry [draɪ]\n[adj.]");
        let parsed = parse(&lines);

        assert!(parsed.senses.get("adj.").unwrap().is_empty());
    }

    #[test]
    fn header_without_pronunciation_parses() {
        let lines = as_lines("bare\n[词典]\nn. 裸的");
        let parsed = parse(&lines);

        assert_eq!(parsed.word, "bare");
        assert!(parsed.pronunciation.is_empty());
    }

    #[test]
    fn empty_block_degrades_to_an_empty_result() {
        let parsed = parse(&[]);

        assert!(parsed.word.is_empty());
        assert!(parsed.senses.is_empty());
    }
}

use console::style;

use crate::model::result::LookupResult;

const TRANSLATION_HEADER: &str = "翻译";
const WEB_HEADER: &str = "网络";

/// Renders a fresh API result: header line, translation glosses,
/// dictionary senses, web usage examples. Pure; printing is the caller's
/// job. Empty senses or web lists come out as an empty section body.
pub fn network(result: &LookupResult) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push(header_line(result));
    out.push(String::new());

    out.push(section_header(TRANSLATION_HEADER));
    out.push(result.translation.join(" "));
    out.push(String::new());

    push_senses(&mut out, result);

    out.push(section_header(WEB_HEADER));
    for example in &result.web_examples {
        out.push(format!("{}: {}", example.phrase, example.usages.join(", ")));
    }

    out.join("\n")
}

/// Renders a result reconstructed from the wordlist: header line plus the
/// labeled sense sections the record preserved. The cache format is lossy,
/// so there is no translation or web section to show.
pub fn cached(result: &LookupResult) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push(header_line(result));
    out.push(String::new());

    push_senses(&mut out, result);

    while out.last().is_some_and(String::is_empty) {
        out.pop();
    }

    out.join("\n")
}

fn push_senses(out: &mut Vec<String>, result: &LookupResult) {
    for (label, lines) in result.senses.iter() {
        out.push(section_header(label));
        for line in lines {
            out.push(line.clone());
        }
        out.push(String::new());
    }
}

fn header_line(result: &LookupResult) -> String {
    format!(
        "{} {}",
        style(&result.word).red().bold(),
        style(&result.pronunciation).black().bright().bold(),
    )
}

fn section_header(label: &str) -> String {
    style(format!("{label}：")).blue().bold().to_string()
}

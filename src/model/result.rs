/// Label synthesized for the API's single explains group. Cached records
/// carry it in the file, so both display variants render dictionary senses
/// under the same heading.
pub const DICT_LABEL: &str = "词典";

/// One resolved definition, either fresh from the API or rebuilt from a
/// cached wordlist record.
///
/// `word` is the record key in the wordlist: non-empty, trimmed,
/// lowercased, no embedded newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub word: String,
    pub pronunciation: String,
    pub translation: Vec<String>,
    pub senses: Senses,
    pub web_examples: Vec<WebExample>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebExample {
    pub phrase: String,
    pub usages: Vec<String>,
}

/// Ordered mapping from a sense label to its explanation lines.
///
/// Labels keep first-seen order so display stays deterministic; pushing a
/// line for an existing label extends that group instead of adding a
/// duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Senses(Vec<(String, Vec<String>)>);

impl Senses {
    pub fn new() -> Self {
        Senses(Vec::new())
    }

    /// One group under `label`; the shape every API result has.
    pub fn single(label: &str, lines: Vec<String>) -> Self {
        Senses(vec![(label.to_string(), lines)])
    }

    /// Makes sure a group exists for `label` without adding any lines.
    pub fn open(&mut self, label: &str) {
        if !self.0.iter().any(|(l, _)| l == label) {
            self.0.push((label.to_string(), Vec::new()));
        }
    }

    /// Appends one explanation line, creating the group when needed.
    pub fn push(&mut self, label: &str, line: String) {
        match self.0.iter_mut().find(|(l, _)| l == label) {
            Some((_, lines)) => lines.push(line),
            None => self.0.push((label.to_string(), vec![line])),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, lines)| lines.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(l, lines)| (l.as_str(), lines.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Senses;

    #[test]
    fn labels_keep_first_seen_order() {
        let mut senses = Senses::new();
        senses.push("n.", "a thing".to_string());
        senses.push("vt.", "to do".to_string());
        senses.push("n.", "another thing".to_string());

        let labels: Vec<&str> = senses.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["n.", "vt."]);
        assert_eq!(senses.get("n.").unwrap().len(), 2);
    }

    #[test]
    fn open_creates_an_empty_group_once() {
        let mut senses = Senses::new();
        senses.open("int.");
        senses.open("int.");

        assert_eq!(senses.len(), 1);
        assert!(senses.get("int.").unwrap().is_empty());
    }
}

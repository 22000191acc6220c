/// Canonical form of a query term: trimmed, lowercased, internal
/// whitespace runs collapsed to single spaces. The API is
/// case-insensitive, and the wordlist is keyed by this form — the
/// collapse guarantees the key never embeds a newline.
pub fn normalize(word: &str) -> String {
    let lowered = word.trim().to_lowercase();

    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

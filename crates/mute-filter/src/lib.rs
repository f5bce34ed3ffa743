//! Mute-word matching over status text and content warnings.
//!
//! A word hits when its lowercase form occurs anywhere in the lowercase
//! status text or summary. Blank words never hit.

use notification_curation::MuteWordMatcher;
use notification_model::Status;

/// Case-insensitive substring matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl MuteWordMatcher for SubstringMatcher {
    fn hits<'w>(&self, status: &Status, mute_words: &'w [String]) -> Vec<&'w str> {
        mute_word_hits(status, mute_words)
    }
}

/// Mute words that match `status`, in configured order.
pub fn mute_word_hits<'w>(status: &Status, mute_words: &'w [String]) -> Vec<&'w str> {
    if mute_words.is_empty() {
        return Vec::new();
    }

    let text = status.text.to_lowercase();
    let summary = status.summary.as_deref().unwrap_or_default().to_lowercase();

    let hits: Vec<&str> = mute_words
        .iter()
        .map(String::as_str)
        .filter(|word| {
            let needle = word.trim().to_lowercase();
            !needle.is_empty() && (text.contains(&needle) || summary.contains(&needle))
        })
        .collect();

    if !hits.is_empty() {
        tracing::trace!(count = hits.len(), "Mute words matched");
    }
    hits
}

/// Splits a newline-separated word list, dropping blank lines.
pub fn parse_mute_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(text: &str, summary: Option<&str>) -> Status {
        Status {
            text: text.into(),
            summary: summary.map(Into::into),
            ..Status::default()
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_hit_in_text_is_case_insensitive() {
        let list = words(&["Spoiler", "other"]);
        let hits = mute_word_hits(&status("BIG SPOILER inside", None), &list);
        assert_eq!(hits, vec!["Spoiler"]);
    }

    #[test]
    fn test_hit_in_summary() {
        let list = words(&["politics"]);
        let hits = mute_word_hits(&status("nothing here", Some("Politics talk")), &list);
        assert_eq!(hits, vec!["politics"]);
    }

    #[test]
    fn test_blank_words_never_hit() {
        let list = words(&["", "   "]);
        assert!(mute_word_hits(&status("anything", Some("at all")), &list).is_empty());
    }

    #[test]
    fn test_hits_keep_configured_order() {
        let list = words(&["b", "a", "zzz"]);
        let hits = SubstringMatcher.hits(&status("a b c", None), &list);
        assert_eq!(hits, vec!["b", "a"]);
    }

    #[test]
    fn test_parse_mute_words() {
        let parsed = parse_mute_words(" alpha\n\nbeta \n   \n gamma\t");
        assert_eq!(parsed, words(&["alpha", "beta", "gamma"]));
        assert!(parse_mute_words("").is_empty());
    }
}

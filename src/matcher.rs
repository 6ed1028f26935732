//! Keyword matching.
//!
//! Pure case-insensitive substring search of a fixed keyword set against
//! transcript text. No tokenization and no word-boundary checks: a keyword
//! like "62%" matches only if it appears literally, punctuation included.

/// An immutable, ordered set of keywords with precomputed lowercase forms.
///
/// Built once at startup from configuration and never mutated during a run.
/// The original order is significant: it drives tie-breaking in the summary
/// and row ordering in the timeline chart.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
    lowered: Vec<String>,
}

impl KeywordSet {
    /// Create a keyword set, preserving the given order.
    pub fn new(keywords: Vec<String>) -> Self {
        let lowered = keywords.iter().map(|k| k.to_lowercase()).collect();
        Self { keywords, lowered }
    }

    /// Number of tracked keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterate keywords in their original order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.as_str())
    }

    /// Return the subset of keywords present in the transcript, in keyword
    /// order. The transcript is lowercased once; each keyword's lowercase
    /// form is checked for substring containment.
    pub fn matches(&self, transcript: &str) -> Vec<String> {
        let transcript_lower = transcript.to_lowercase();

        self.keywords
            .iter()
            .zip(&self.lowered)
            .filter(|(_, lower)| transcript_lower.contains(lower.as_str()))
            .map(|(keyword, _)| keyword.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(keywords: &[&str]) -> KeywordSet {
        KeywordSet::new(keywords.iter().map(|k| k.to_string()).collect())
    }

    #[test]
    fn test_case_insensitive_matching() {
        let keywords = set(&["Tesla", "Bitcoin"]);
        let found = keywords.matches("today we talked about TESLA and bitcoin prices");
        assert_eq!(found, vec!["Tesla", "Bitcoin"]);
    }

    #[test]
    fn test_substring_not_word_boundary() {
        // Pure containment: "Elon" matches inside "Elongated".
        let keywords = set(&["Elon"]);
        assert_eq!(keywords.matches("an elongated discussion"), vec!["Elon"]);
    }

    #[test]
    fn test_punctuation_keywords_match_literally() {
        let keywords = set(&["62%", "$13 Vol.", "Supreme Court"]);
        assert_eq!(keywords.matches("odds hit 62% overnight"), vec!["62%"]);
        assert!(keywords.matches("62 percent").is_empty());
        assert_eq!(keywords.matches("volume was $13 vol. total"), vec!["$13 Vol."]);
    }

    #[test]
    fn test_matches_preserve_keyword_order() {
        let keywords = set(&["Nvidia", "China", "Tesla"]);
        let found = keywords.matches("tesla sells in china, nvidia too");
        assert_eq!(found, vec!["Nvidia", "China", "Tesla"]);
    }

    #[test]
    fn test_empty_transcript_matches_nothing() {
        let keywords = set(&["Tesla"]);
        assert!(keywords.matches("").is_empty());
    }

    #[test]
    fn test_no_matches() {
        let keywords = set(&["Tesla", "Bitcoin"]);
        assert!(keywords.matches("a quiet episode about gardening").is_empty());
    }
}

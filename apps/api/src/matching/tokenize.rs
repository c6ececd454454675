//! Word tokenization and keyword extraction for free-text matching.

use std::collections::HashSet;

/// Tokens this short carry no signal as keywords.
const MIN_KEYWORD_CHARS: usize = 4;

/// Filler words never treated as job-description keywords.
const STOP_WORDS: &[&str] = &[
    "and", "the", "for", "with", "this", "that", "have", "will", "from", "your",
];

/// Splits text into lowercase word tokens. Any non-alphanumeric character is
/// a boundary, so punctuation never ends up inside a token ("Node.js," →
/// "node", "js").
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Extracts candidate keywords from job-description tokens: long enough and
/// not a stop word, de-duplicated preserving first-occurrence order. The
/// order matters downstream, where missing-keyword reporting slices it.
pub fn extract_keywords(tokens: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for token in tokens {
        if token.chars().count() < MIN_KEYWORD_CHARS || is_stop_word(token) {
            continue;
        }
        if seen.insert(token.clone()) {
            keywords.push(token.clone());
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Senior Rust Engineer, remote (EU)."),
            toks(&["senior", "rust", "engineer", "remote", "eu"])
        );
    }

    #[test]
    fn test_tokenize_splits_dotted_and_hyphenated_names() {
        assert_eq!(tokenize("Node.js"), toks(&["node", "js"]));
        assert_eq!(tokenize("front-end"), toks(&["front", "end"]));
    }

    #[test]
    fn test_tokenize_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("—, . !?").is_empty());
    }

    #[test]
    fn test_extract_keywords_drops_short_tokens_and_stop_words() {
        let tokens = tokenize("the and for a is with your kubernetes experience");
        assert_eq!(extract_keywords(&tokens), toks(&["kubernetes", "experience"]));
    }

    #[test]
    fn test_extract_keywords_dedups_preserving_first_occurrence() {
        let tokens = tokenize("rust systems rust kubernetes systems");
        assert_eq!(
            extract_keywords(&tokens),
            toks(&["rust", "systems", "kubernetes"])
        );
    }

    #[test]
    fn test_stop_words_of_keyword_length_are_excluded() {
        for sw in ["with", "this", "that", "have", "will", "from", "your"] {
            assert!(is_stop_word(sw), "{sw} should be a stop word");
            let tokens = toks(&[sw]);
            assert!(extract_keywords(&tokens).is_empty());
        }
    }
}

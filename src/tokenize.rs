use lazy_static::lazy_static;
use regex::Regex;

use crate::context::STOP;

lazy_static! {
    static ref PUNCTUATION_PATTERN: Regex = Regex::new(r#"([,;:.!?¿¡()<>=\"'`])"#).unwrap();
}

/// Splits a line of text into a sentence: lowercased words with punctuation
/// split off, closed by the STOP marker. Returns `None` for a blank line.
pub fn tokenize_sentence(line: &str) -> Option<Vec<String>> {
    let lowered = line.to_lowercase();
    let parsed = PUNCTUATION_PATTERN.replace_all(&lowered, " $0 ");
    let mut tokens: Vec<String> = parsed.split_ascii_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        return None;
    }
    tokens.push(STOP.to_string());
    Some(tokens)
}

/// Splits a line on `|` into several sentences, skipping blank ones.
pub fn tokenize_corpus(line: &str) -> Vec<Vec<String>> {
    line.split('|').filter_map(tokenize_sentence).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_stop_marker() {
        assert_eq!(
            tokenize_sentence("The dog runs"),
            Some(vec![
                "the".to_string(),
                "dog".to_string(),
                "runs".to_string(),
                STOP.to_string()
            ])
        );
    }

    #[test]
    fn splits_off_punctuation() {
        let tokens = tokenize_sentence("dog, runs!").unwrap();
        assert_eq!(tokens, vec!["dog", ",", "runs", "!", STOP]);
    }

    #[test]
    fn blank_line_is_no_sentence() {
        assert_eq!(tokenize_sentence("   "), None);
    }

    #[test]
    fn corpus_splits_on_bar() {
        let corpus = tokenize_corpus("the dog runs | the cat walks |");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[1], vec!["the", "cat", "walks", STOP]);
    }
}

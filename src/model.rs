use std::collections::HashMap;

use log::trace;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::rule::ConditionalRule;

/// A fixed table of trigram probabilities, one `ConditionalRule` per word.
///
/// Nothing is smoothed: scoring a word or context that was never added is an
/// error rather than a probability of zero.
#[derive(Debug, Clone, Default)]
pub struct TrigramModel {
    rules: HashMap<String, ConditionalRule>,
}

impl TrigramModel {
    pub fn new() -> TrigramModel {
        TrigramModel {
            rules: HashMap::new(),
        }
    }

    /// Records P(word | context). A second call for the same word extends
    /// that word's rule; a second call for the same (word, context) overwrites.
    pub fn add_rule(&mut self, word: &str, context: Context, probability: f64) {
        self.rules
            .entry(word.to_string())
            .or_insert_with(|| ConditionalRule::new(word))
            .add_condition(context, probability);
    }

    pub fn rule_for(&self, word: &str) -> Option<&ConditionalRule> {
        self.rules.get(word)
    }

    pub fn rules(&self) -> impl Iterator<Item = &ConditionalRule> {
        self.rules.values()
    }

    /// Number of distinct words with a rule.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Per-word conditional probabilities of `words`, walking a two-word
    /// window that starts at `(START, START)`.
    fn conditionals<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<f64>> {
        if words.is_empty() {
            return Err(Error::EmptySequence);
        }

        let mut context = Context::start();
        let mut probabilities = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            let rule = self.rule_for(word).ok_or_else(|| Error::UnknownWord {
                word: word.to_string(),
            })?;
            let probability = rule.probability_given(&context).ok_or_else(|| {
                Error::UndefinedContext {
                    word: word.to_string(),
                    context: context.clone(),
                }
            })?;
            trace!("P({} | {}) = {}", word, context, probability);
            probabilities.push(probability);
            context = context.advance(word);
        }
        Ok(probabilities)
    }

    /// Joint probability of `words` under the trigram chain rule.
    pub fn probability_of<S: AsRef<str>>(&self, words: &[S]) -> Result<f64> {
        Ok(self.conditionals(words)?.into_iter().product())
    }

    /// `log2` of the joint probability of `words`, summed per word so that
    /// long sentences do not underflow. Fails if any conditional is `<= 0`.
    pub fn log2_probability_of<S: AsRef<str>>(&self, words: &[S]) -> Result<f64> {
        let mut total = 0.;
        for probability in self.conditionals(words)? {
            if probability <= 0. {
                return Err(Error::ZeroProbability {
                    sentence: words.iter().map(|w| w.as_ref().to_string()).collect(),
                });
            }
            total += probability.log2();
        }
        Ok(total)
    }
}

use std::collections::HashMap;

use crate::context::Context;

/// Conditional probabilities of one target word, keyed by the two words
/// that precede it.
#[derive(Debug, Clone)]
pub struct ConditionalRule {
    word: String,
    conditions: HashMap<Context, f64>,
}

impl ConditionalRule {
    pub fn new(word: &str) -> ConditionalRule {
        ConditionalRule {
            word: word.to_string(),
            conditions: HashMap::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Sets P(word | context), replacing any earlier value for that context.
    /// The probability is stored as given; range checks are up to the caller.
    pub fn add_condition(&mut self, context: Context, probability: f64) {
        self.conditions.insert(context, probability);
    }

    /// Returns P(word | context), or `None` if that context was never added.
    pub fn probability_given(&self, context: &Context) -> Option<f64> {
        self.conditions.get(context).copied()
    }

    pub fn contexts(&self) -> impl Iterator<Item = &Context> {
        self.conditions.keys()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

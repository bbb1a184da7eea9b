//! Fixed-table trigram language model and corpus perplexity.
//!
//! Probabilities are supplied directly as `(word, context, probability)`
//! triples; there is no training or smoothing. A sentence's probability is
//! the chain-rule product of P(word | two previous words), with the window
//! seeded by the `START` marker. Perplexity over a corpus is
//! `2^(-(Σ log2 P(sentence)) / N)`, N counting every token including `STOP`.
//!
//! ```
//! use trigramplexity::{Context, PerplexityCalculator, TrigramModel, START, STOP};
//!
//! let mut model = TrigramModel::new();
//! model.add_rule("the", Context::new(START, START), 1.0);
//! model.add_rule("dog", Context::new(START, "the"), 0.5);
//! model.add_rule("runs", Context::new("the", "dog"), 1.0);
//! model.add_rule(STOP, Context::new("dog", "runs"), 1.0);
//!
//! assert_eq!(model.probability_of(&["the", "dog", "runs", STOP]), Ok(0.5));
//!
//! let corpus = vec![vec!["the", "dog", "runs", STOP]];
//! let perplexity = PerplexityCalculator::new(&model).calculate(&corpus).unwrap();
//! assert_eq!(perplexity, 1.189);
//! ```

mod context;
mod error;
mod model;
mod perplexity;
mod rule;
pub mod tokenize;

pub use context::{Context, START, STOP};
pub use error::{Error, Result};
pub use model::TrigramModel;
pub use perplexity::{round_to, PerplexityCalculator, PRECISION};
pub use rule::ConditionalRule;

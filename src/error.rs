use std::fmt;

use crate::context::Context;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while scoring sentences against a `TrigramModel`.
///
/// None of these are recoverable: they point at a rule that was never added,
/// not at a transient condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No rule was ever registered for this word.
    UnknownWord { word: String },
    /// The word has a rule, but not for this context.
    UndefinedContext { word: String, context: Context },
    /// `probability_of` was called with no tokens.
    EmptySequence,
    /// `calculate` was called with no tokens at all.
    EmptyCorpus,
    /// A sentence scored 0, so its log2 is undefined.
    ZeroProbability { sentence: Vec<String> },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownWord { word } => write!(f, "no rule for word '{}'", word),
            Error::UndefinedContext { word, context } => {
                write!(f, "no probability for '{}' given {}", word, context)
            }
            Error::EmptySequence => write!(f, "cannot score an empty sequence"),
            Error::EmptyCorpus => write!(f, "cannot compute perplexity of an empty corpus"),
            Error::ZeroProbability { sentence } => {
                write!(f, "sentence '{}' has zero probability", sentence.join(" "))
            }
        }
    }
}

impl std::error::Error for Error {}

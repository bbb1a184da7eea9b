use std::fmt;

/// Marker filling the context window before the first word of a sentence.
pub const START: &str = "*";
/// Marker closing every sentence. Scored and counted like any other word.
pub const STOP: &str = "STOP";

/// The two words immediately preceding a target word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Context {
    two_ago: String,
    one_ago: String,
}

impl Context {
    pub fn new(two_ago: &str, one_ago: &str) -> Context {
        Context {
            two_ago: two_ago.to_string(),
            one_ago: one_ago.to_string(),
        }
    }

    /// `(START, START)`, the context of a sentence's first word.
    pub fn start() -> Context {
        Context::new(START, START)
    }

    pub fn two_ago(&self) -> &str {
        &self.two_ago
    }

    pub fn one_ago(&self) -> &str {
        &self.one_ago
    }

    /// Slides the window one word to the right.
    pub fn advance(self, word: &str) -> Context {
        Context {
            two_ago: self.one_ago,
            one_ago: word.to_string(),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.two_ago, self.one_ago)
    }
}

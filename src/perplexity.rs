use log::debug;

use crate::error::{Error, Result};
use crate::model::TrigramModel;

/// Decimal places kept by `PerplexityCalculator::calculate`.
pub const PRECISION: i32 = 3;

/// Rounds `value` to `places` decimals, halves away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Corpus-level perplexity over a borrowed `TrigramModel`.
pub struct PerplexityCalculator<'a> {
    model: &'a TrigramModel,
}

impl<'a> PerplexityCalculator<'a> {
    pub fn new(model: &'a TrigramModel) -> PerplexityCalculator<'a> {
        PerplexityCalculator { model }
    }

    /// `2^(-(Σ log2 P(sentence)) / N)` where N counts every token of every
    /// sentence, STOP markers included. Any sentence that cannot be scored
    /// aborts the whole calculation.
    pub fn calculate_unrounded<S, T>(&self, sentences: &[T]) -> Result<f64>
    where
        S: AsRef<str>,
        T: AsRef<[S]>,
    {
        let token_count: usize = sentences.iter().map(|s| s.as_ref().len()).sum();
        if token_count == 0 {
            return Err(Error::EmptyCorpus);
        }

        let mut total_log = 0.;
        for sentence in sentences {
            let sentence = sentence.as_ref();
            let log2 = self.model.log2_probability_of(sentence)?;
            debug!("sentence of {} tokens: log2 p = {}", sentence.len(), log2);
            total_log += log2;
        }

        Ok((2.0_f64).powf(-(total_log / token_count as f64)))
    }

    /// `calculate_unrounded`, rounded to `PRECISION` decimals.
    pub fn calculate<S, T>(&self, sentences: &[T]) -> Result<f64>
    where
        S: AsRef<str>,
        T: AsRef<[S]>,
    {
        Ok(round_to(self.calculate_unrounded(sentences)?, PRECISION))
    }
}

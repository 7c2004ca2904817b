//! Implanted-pattern and uniform dataset generators.
//!
//! The implanted generator is the primary consumer of the significance
//! engine: it keeps emitting sequences until the cumulative probability of
//! the pattern occurrences arising by chance drops to the configured
//! threshold, at which point the pattern is statistically recoverable and
//! adding more background would only dilute it.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use seqsig_core::{Composition, ErrorInfo, RngHandle, SigError};
use seqsig_prob::SignificanceEngine;

use crate::tokens::pattern_tokens;

/// Parameters for implanted-pattern dataset generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplantConfig {
    /// Number of distinct tokens in the implanted pattern (at least 2).
    pub pattern_len: u32,
    /// Cumulative significance at which generation stops, in `(0, 1]`.
    pub threshold: f64,
    /// Probability that a generated sequence carries the pattern.
    /// Must be strictly positive: only occurrence sequences lower the
    /// running significance, so at zero the stop condition is unreachable.
    #[serde(default = "ImplantConfig::default_occur_prob")]
    pub occur_prob: f64,
    /// Token prefix keeping concurrently implanted alphabets disjoint.
    #[serde(default)]
    pub prefix: String,
}

impl ImplantConfig {
    fn default_occur_prob() -> f64 {
        0.05
    }

    /// Validates the configuration at the generation boundary.
    pub fn validate(&self) -> Result<(), SigError> {
        if self.pattern_len < 2 {
            return Err(SigError::Generator(
                ErrorInfo::new(
                    "pattern-too-short",
                    "implanted patterns need at least two tokens",
                )
                .with_context("pattern_len", self.pattern_len.to_string()),
            ));
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(SigError::Generator(
                ErrorInfo::new("bad-threshold", "threshold must lie in (0, 1]")
                    .with_context("threshold", self.threshold.to_string())
                    .with_hint("pass a probability, not a percentage"),
            ));
        }
        if !(self.occur_prob > 0.0 && self.occur_prob <= 1.0) {
            return Err(SigError::Generator(
                ErrorInfo::new("bad-occur-prob", "occurrence probability must lie in (0, 1]")
                    .with_context("occur_prob", self.occur_prob.to_string())
                    .with_hint("at 0 no occurrence can ever push the significance below the threshold"),
            ));
        }
        Ok(())
    }
}

/// Dataset produced by [`generate_implanted`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplantedDataset {
    /// Generated sequences in emission order.
    pub sequences: Vec<Vec<String>>,
    /// The implanted pattern's tokens in pattern order.
    pub pattern: Vec<String>,
    /// Number of sequences carrying the pattern.
    pub occur_sequences: usize,
    /// Number of background noise sequences.
    pub noise_sequences: usize,
    /// Final cumulative significance (product of per-occurrence p-values).
    pub significance: f64,
}

/// Dataset produced by [`generate_uniform`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformDataset {
    /// Generated sequences in emission order.
    pub sequences: Vec<Vec<String>>,
    /// The alphabet the sequences draw from, in token order.
    pub pattern: Vec<String>,
}

/// Generates sequences until the implanted pattern becomes significant.
///
/// With probability `occur_prob` a sequence is `pad + pattern + pad`, where
/// each pad is `0..=len` tokens drawn with replacement from the pattern
/// alphabet; its composition is scored by the engine and folded into the
/// running significance. Otherwise a noise sequence of `1..=3*len` tokens is
/// drawn from a proper subset of the alphabet, so noise alone can never
/// exhibit the full pattern. Generation stops once the running significance
/// is at or below the threshold. For long runs the product may underflow to
/// zero, which simply stops generation at the next occurrence.
pub fn generate_implanted(
    config: &ImplantConfig,
    engine: &mut SignificanceEngine,
    rng: &mut RngHandle,
) -> Result<ImplantedDataset, SigError> {
    config.validate()?;
    let pattern = pattern_tokens(config.pattern_len, &config.prefix);
    let len = config.pattern_len as usize;

    let mut sequences = Vec::new();
    let mut significance = 1.0_f64;
    let mut occur_sequences = 0_usize;
    let mut noise_sequences = 0_usize;

    while significance > config.threshold {
        if rng.gen::<f64>() <= config.occur_prob {
            let mut sequence = draw_with_replacement(&pattern, rng.gen_range(0..=len), rng);
            sequence.extend(pattern.iter().cloned());
            sequence.extend(draw_with_replacement(&pattern, rng.gen_range(0..=len), rng));

            let composition = Composition::of_sequence(&sequence)?;
            significance *= engine.probability(&composition);
            occur_sequences += 1;
            sequences.push(sequence);
        } else {
            let subset_size = rng.gen_range(1..len);
            let subset: Vec<String> = pattern.choose_multiple(rng, subset_size).cloned().collect();
            let sequence = draw_with_replacement(&subset, rng.gen_range(1..=3 * len), rng);
            noise_sequences += 1;
            sequences.push(sequence);
        }
    }

    Ok(ImplantedDataset {
        sequences,
        pattern,
        occur_sequences,
        noise_sequences,
        significance,
    })
}

/// Generates a burst of uniform sequences over a fresh pattern alphabet.
///
/// Every sequence is `sequence_len` independent uniform draws from the
/// `pattern_len` tokens. Useful as a decoy block: the alphabet co-occurs
/// heavily without any sequential structure.
pub fn generate_uniform(
    pattern_len: u32,
    sequences: usize,
    sequence_len: usize,
    prefix: &str,
    rng: &mut RngHandle,
) -> Result<UniformDataset, SigError> {
    if pattern_len == 0 {
        return Err(SigError::Generator(ErrorInfo::new(
            "empty-alphabet",
            "uniform generation requires at least one token",
        )));
    }
    let pattern = pattern_tokens(pattern_len, prefix);
    let sequences = (0..sequences)
        .map(|_| draw_with_replacement(&pattern, sequence_len, rng))
        .collect();
    Ok(UniformDataset { sequences, pattern })
}

/// `count` independent uniform draws from a non-empty pool.
fn draw_with_replacement(pool: &[String], count: usize, rng: &mut RngHandle) -> Vec<String> {
    (0..count)
        .map(|_| pool[rng.gen_range(0..pool.len())].clone())
        .collect()
}

//! Multi-pattern corpus assembly.
//!
//! A corpus interleaves several implanted datasets (and optionally decoy
//! bursts) into one flat sequence collection, together with the ground-truth
//! patterns and a recommended relative support for downstream miners.
//!
//! Assembly is seeded by a single master seed; every dataset draws from its
//! own derived substream, so adding or removing one dataset never perturbs
//! the sequences of the others.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use seqsig_core::rng::{derive_substream_seed, RngHandle};
use seqsig_core::SigError;
use seqsig_prob::SignificanceEngine;

use crate::dataset::{generate_implanted, generate_uniform, ImplantConfig};

/// Number of sequences a mined pattern should span; divided by the corpus
/// size to obtain the relative support handed to mining tools.
const SUPPORT_SEQUENCES: f64 = 1.5;

/// An assembled multi-pattern corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    /// All sequences, dataset by dataset, in emission order.
    pub sequences: Vec<Vec<String>>,
    /// Ground-truth implanted patterns (decoy bursts are not listed).
    pub patterns: Vec<Vec<String>>,
    /// Recommended relative support fraction for mining the corpus.
    pub support: f64,
}

impl Corpus {
    /// Implanted datasets for pattern lengths 2 through 6.
    ///
    /// Each pattern is driven to a cumulative significance of `(1/6!)^3`
    /// before the next one starts.
    pub fn assemble_mixed(
        engine: &mut SignificanceEngine,
        master_seed: u64,
    ) -> Result<Self, SigError> {
        let threshold = significance_floor(6, 3);
        let mut corpus = CorpusBuilder::new(master_seed);
        for pattern_len in 2..=6 {
            let config = ImplantConfig {
                pattern_len,
                threshold,
                occur_prob: 0.05,
                prefix: String::new(),
            };
            corpus.push_implanted(&config, engine)?;
        }
        Ok(corpus.finish())
    }

    /// Bursty and evenly spread variants of each pattern length 3 through 6.
    ///
    /// The bursty variant (`B` prefix) concentrates its occurrences by
    /// carrying a higher per-sequence occurrence probability than the normal
    /// variant (`N` prefix); both run to a significance of `(1/7!)^3`.
    pub fn assemble_bursts(
        bursty_prob: f64,
        normal_prob: f64,
        engine: &mut SignificanceEngine,
        master_seed: u64,
    ) -> Result<Self, SigError> {
        let threshold = significance_floor(7, 3);
        let mut corpus = CorpusBuilder::new(master_seed);
        for pattern_len in 3..=6 {
            for (occur_prob, prefix) in [(bursty_prob, "B"), (normal_prob, "N")] {
                let config = ImplantConfig {
                    pattern_len,
                    threshold,
                    occur_prob,
                    prefix: prefix.to_string(),
                };
                corpus.push_implanted(&config, engine)?;
            }
        }
        Ok(corpus.finish())
    }

    /// Normal implanted datasets plus `blocks` uniform decoy bursts.
    ///
    /// Decoy alphabets co-occur heavily without sequential structure, so
    /// they are deliberately excluded from the ground-truth pattern list.
    pub fn assemble_random_bursts(
        blocks: usize,
        engine: &mut SignificanceEngine,
        master_seed: u64,
    ) -> Result<Self, SigError> {
        let threshold = significance_floor(6, 3);
        let mut corpus = CorpusBuilder::new(master_seed);
        for pattern_len in 3..=6 {
            let config = ImplantConfig {
                pattern_len,
                threshold,
                occur_prob: 0.15,
                prefix: "N".to_string(),
            };
            corpus.push_implanted(&config, engine)?;
        }
        for block in 0..blocks {
            let mut rng = corpus.next_rng();
            let burst = generate_uniform(4, 10, 20, &format!("B|{block}|"), &mut rng)?;
            corpus.sequences.extend(burst.sequences);
        }
        Ok(corpus.finish())
    }

    /// Shuffles the tokens inside every sequence independently.
    ///
    /// Null-model transform: token multiplicities per sequence are
    /// preserved while all sequential structure is destroyed.
    pub fn shuffle_within_sequences(&mut self, rng: &mut RngHandle) {
        for sequence in &mut self.sequences {
            sequence.shuffle(rng);
        }
    }
}

struct CorpusBuilder {
    master_seed: u64,
    substream: u64,
    sequences: Vec<Vec<String>>,
    patterns: Vec<Vec<String>>,
}

impl CorpusBuilder {
    fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            substream: 0,
            sequences: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// One substream per dataset, in assembly order.
    fn next_rng(&mut self) -> RngHandle {
        let seed = derive_substream_seed(self.master_seed, self.substream);
        self.substream += 1;
        RngHandle::from_seed(seed)
    }

    fn push_implanted(
        &mut self,
        config: &ImplantConfig,
        engine: &mut SignificanceEngine,
    ) -> Result<(), SigError> {
        let mut rng = self.next_rng();
        let dataset = generate_implanted(config, engine, &mut rng)?;
        self.patterns.push(dataset.pattern);
        self.sequences.extend(dataset.sequences);
        Ok(())
    }

    fn finish(self) -> Corpus {
        let support = SUPPORT_SEQUENCES / self.sequences.len() as f64;
        Corpus {
            sequences: self.sequences,
            patterns: self.patterns,
            support,
        }
    }
}

/// `(1 / alphabet!)^power`, the significance a pattern reaches after `power`
/// clean occurrences with no surrounding noise.
fn significance_floor(alphabet: u32, power: i32) -> f64 {
    let mut factorial = 1.0_f64;
    for step in 1..=alphabet {
        factorial *= f64::from(step);
    }
    factorial.recip().powi(power)
}

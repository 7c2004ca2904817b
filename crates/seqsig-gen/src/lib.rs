#![deny(missing_docs)]
#![doc = "Synthetic corpus generation for sequential-pattern-mining experiments: implanted-pattern datasets driven by the significance engine, uniform burst decoys, and multi-pattern corpus assembly."]

/// Multi-pattern corpus assembly and null-model shuffling.
pub mod corpus;
/// Implanted-pattern and uniform dataset generators.
pub mod dataset;
/// Token labelling for pattern alphabets.
pub mod tokens;

pub use corpus::Corpus;
pub use dataset::{
    generate_implanted, generate_uniform, ImplantConfig, ImplantedDataset, UniformDataset,
};
pub use tokens::{pattern_tokens, token_label};

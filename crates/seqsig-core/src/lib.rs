#![deny(missing_docs)]
#![doc = "Core types shared across the seqsig crates: structured errors, deterministic RNG handles, and the composition value type."]

pub mod errors;
pub mod rng;
mod composition;

pub use composition::Composition;
pub use errors::{ErrorInfo, SigError};
pub use rng::{derive_substream_seed, RngHandle};

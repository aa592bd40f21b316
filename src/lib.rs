//! Approximate string-distance kernels and a vectorized batch/nearest-match
//! driver: nine distance algorithms, a reusable q-gram tree, and the two
//! public entry points (`pairwise_distance`, `nearest_match`) that run them
//! over vectors of possibly-absent strings.

mod batch;
mod context;
mod error;
mod kernels;
mod nearest;
mod params;
mod qgram;
mod unit;

pub use batch::pairwise_distance;
pub use context::MatchContext;
pub use error::{Result, StringDistError};
pub use nearest::{contains, nearest_match};
pub use params::{EditWeights, JaroWeights, Method, Params};
pub use unit::{Encoding, MaybeStr, Seq, Unit};

use crate::error::{Result, StringDistError};
use crate::unit::Encoding;

/// One of the nine distance kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Osa,
    Lv,
    Dl,
    Hamming,
    Lcs,
    Qgram,
    Cosine,
    Jaccard,
    Jw,
    Soundex,
}

impl Method {
    fn uses_qgram_tree(self) -> bool {
        matches!(self, Method::Qgram | Method::Cosine | Method::Jaccard)
    }

    fn min_weight_arity(self) -> usize {
        match self {
            Method::Osa | Method::Dl => 4,
            Method::Lv | Method::Jw => 3,
            _ => 0,
        }
    }
}

/// Weights for osa/dl, in call order (deletion, insertion, substitution,
/// transposition). Unused trailing fields are ignored by methods that need
/// fewer of them (lv uses the first three, everything else ignores all).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditWeights {
    pub del: f64,
    pub ins: f64,
    pub sub: f64,
    pub trans: f64,
}

impl EditWeights {
    pub fn from_slice(weights: &[f64]) -> Self {
        Self {
            del: weights.first().copied().unwrap_or(1.0),
            ins: weights.get(1).copied().unwrap_or(1.0),
            sub: weights.get(2).copied().unwrap_or(1.0),
            trans: weights.get(3).copied().unwrap_or(1.0),
        }
    }
}

/// Weights for Jaro/Jaro-Winkler, in the caller's storage order
/// (weight on characters of the first string, weight on characters of the
/// second string, transposition weight). The kernel itself expects them
/// permuted — see `kernels::jaro::permute_weights` — the driver is
/// responsible for calling that, not the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWeights {
    pub a: f64,
    pub b: f64,
    pub t: f64,
}

impl JaroWeights {
    pub fn from_slice(weights: &[f64]) -> Self {
        Self {
            a: weights.first().copied().unwrap_or(1.0),
            b: weights.get(1).copied().unwrap_or(1.0),
            t: weights.get(2).copied().unwrap_or(1.0),
        }
    }
}

/// Only the members relevant to the chosen method are read.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub weight: Vec<f64>,
    pub q: usize,
    pub p: f64,
    pub max_dist: f64,
    pub use_bytes: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            weight: vec![1.0, 1.0, 1.0, 1.0],
            q: 1,
            p: 0.1,
            max_dist: f64::INFINITY,
            use_bytes: false,
        }
    }
}

impl Params {
    pub fn encoding(&self) -> Encoding {
        if self.use_bytes {
            Encoding::Byte
        } else {
            Encoding::CodePoint
        }
    }

    pub fn edit_weights(&self) -> EditWeights {
        EditWeights::from_slice(&self.weight)
    }

    pub fn jaro_weights(&self) -> JaroWeights {
        JaroWeights::from_slice(&self.weight)
    }

    /// Internal cap handed to a kernel: `+∞` is coerced to `0` for methods
    /// outside {osa, lv, dl, hamming, lcs} — a historical protocol quirk
    /// preserved for compatibility with how the uncapped case is signalled
    /// to those kernels internally.
    pub fn internal_max_dist(&self, method: Method) -> f64 {
        let capped_family = matches!(
            method,
            Method::Osa | Method::Lv | Method::Dl | Method::Hamming | Method::Lcs
        );
        if self.max_dist.is_infinite() && !capped_family {
            0.0
        } else {
            self.max_dist
        }
    }
}

/// Validates pre-call invariants. Any violation aborts the whole batch
/// before decoding begins.
pub fn validate(method: Method, params: &Params, threads: usize) -> Result<()> {
    if threads == 0 {
        return Err(StringDistError::InvalidArgument("nthread must be > 0".into()));
    }

    for &w in &params.weight {
        if !w.is_finite() || w <= 0.0 || w > 1.0 {
            return Err(StringDistError::InvalidArgument(format!(
                "weight {w} must be finite and in (0, 1]"
            )));
        }
    }

    let needed = method.min_weight_arity();
    if params.weight.len() < needed {
        return Err(StringDistError::InvalidArgument(format!(
            "method {method:?} needs at least {needed} weights, got {}",
            params.weight.len()
        )));
    }

    if !params.p.is_finite() || params.p < 0.0 || params.p > 0.25 {
        return Err(StringDistError::InvalidArgument(format!(
            "p must be in [0, 0.25], got {}",
            params.p
        )));
    }

    if !(params.max_dist > 0.0) {
        return Err(StringDistError::InvalidArgument(format!(
            "maxDist must be > 0, got {}",
            params.max_dist
        )));
    }

    // q == 0 is explicitly valid (both-empty inputs return 0 under it);
    // negative q cannot occur since `q` is unsigned, and an unreasonably
    // large q relative to any real input is left to the kernel's own
    // infeasibility handling rather than rejected here.
    let _ = method.uses_qgram_tree();

    Ok(())
}

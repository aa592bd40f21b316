pub mod dl;
pub mod hamming;
pub mod jaro;
pub mod lcs;
pub mod lv;
pub mod osa;
pub mod qgram_family;
pub mod soundex;

use crate::params::{Method, Params};
use crate::qgram::QgramTree;
use crate::unit::Seq;

/// Dispatches to the kernel named by `method`. Absent propagation is the
/// driver's job, not the kernel's — callers only reach this function once
/// both operands are known to be present.
///
/// `qtree` is only touched by the q-gram family; other kernels ignore it.
pub fn compute(method: Method, a: &Seq, b: &Seq, params: &Params, qtree: &mut QgramTree) -> f64 {
    let max_dist = params.internal_max_dist(method);
    match method {
        Method::Osa => osa::distance(a, b, &params.edit_weights(), max_dist),
        Method::Lv => lv::distance(a, b, &params.edit_weights(), max_dist),
        Method::Dl => dl::distance(a, b, &params.edit_weights(), max_dist),
        Method::Hamming => hamming::distance(a, b, max_dist),
        Method::Lcs => lcs::distance(a, b, max_dist),
        Method::Qgram => qgram_family::qgram(a, b, params.q, qtree),
        Method::Cosine => qgram_family::cosine(a, b, params.q, qtree),
        Method::Jaccard => qgram_family::jaccard(a, b, params.q, qtree),
        Method::Jw => {
            let w = jaro::permute_weights(&params.jaro_weights());
            jaro::winkler_distance(a, b, &w, params.p)
        }
        Method::Soundex => soundex::distance(a, b),
    }
}

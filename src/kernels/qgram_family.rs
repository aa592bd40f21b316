use crate::qgram::{insert_qgrams, QgramTree, Side};
use crate::unit::Seq;

/// Shared plumbing for qgram/cosine/jaccard: populate `tree` with both
/// operands' q-grams and hand the caller back the counts to reduce. `tree`
/// is cleared first so callers can reuse one instance across an entire
/// batch.
fn profile<'a>(a: &Seq, b: &Seq, q: usize, tree: &'a mut QgramTree) -> Option<&'a QgramTree> {
    if a.is_empty() && b.is_empty() {
        return None;
    }

    tree.clear();
    insert_qgrams(tree, a, q, Side::A);
    insert_qgrams(tree, b, q, Side::B);
    Some(tree)
}

/// `q == 0` or either operand shorter than `q` (unless both empty) is
/// infeasible under all three q-gram methods.
fn is_infeasible(a: &Seq, b: &Seq, q: usize) -> bool {
    if a.is_empty() && b.is_empty() {
        return false;
    }
    q == 0 || a.len() < q || b.len() < q
}

/// q-gram distance: sum of absolute per-gram count differences, an L1
/// distance between the two q-gram multisets.
pub fn qgram(a: &Seq, b: &Seq, q: usize, tree: &mut QgramTree) -> f64 {
    if is_infeasible(a, b, q) {
        return f64::INFINITY;
    }
    match profile(a, b, q, tree) {
        None => 0.0,
        Some(tree) => tree
            .traverse()
            .map(|c| (c.a as i64 - c.b as i64).unsigned_abs() as f64)
            .sum(),
    }
}

/// Cosine distance: `1 - (a·b) / (|a| |b|)` over q-gram count vectors. Both
/// operands contributing no grams (empty/empty under q-gram tokenization)
/// is defined as distance 0; negative roundoff from the floating
/// subtraction is clamped at 0.
pub fn cosine(a: &Seq, b: &Seq, q: usize, tree: &mut QgramTree) -> f64 {
    if is_infeasible(a, b, q) {
        return f64::INFINITY;
    }
    let tree = match profile(a, b, q, tree) {
        None => return 0.0,
        Some(tree) => tree,
    };

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for counts in tree.traverse() {
        dot += counts.a as f64 * counts.b as f64;
        norm_a += (counts.a as f64) * (counts.a as f64);
        norm_b += (counts.b as f64) * (counts.b as f64);
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())).max(0.0)
}

/// Jaccard distance over the sets of distinct q-grams present in each
/// operand: `1 - |intersection| / |union|`. Counts beyond presence/absence
/// are ignored, unlike `qgram`/`cosine`.
pub fn jaccard(a: &Seq, b: &Seq, q: usize, tree: &mut QgramTree) -> f64 {
    if is_infeasible(a, b, q) {
        return f64::INFINITY;
    }
    let tree = match profile(a, b, q, tree) {
        None => return 0.0,
        Some(tree) => tree,
    };

    let mut intersection = 0usize;
    let mut union = 0usize;
    for counts in tree.traverse() {
        if counts.a > 0 && counts.b > 0 {
            intersection += 1;
        }
        if counts.a > 0 || counts.b > 0 {
            union += 1;
        }
    }

    if union == 0 {
        return 0.0;
    }

    1.0 - (intersection as f64 / union as f64)
}

use crate::params::JaroWeights;

/// Swaps the caller-facing `(weight on a, weight on b, transposition
/// weight)` storage order into the order the kernel below actually
/// consumes. Calling this conversion out as its own function is
/// deliberate: the permutation is the driver's responsibility, never
/// something `winkler_distance` should do to its own arguments implicitly.
pub fn permute_weights(w: &JaroWeights) -> JaroWeights {
    JaroWeights { a: w.b, b: w.a, t: w.t }
}

/// Jaro distance (`1 - Jaro similarity`) between `a` and `b`. Two units
/// match if they are equal and within `floor(max(|a|,|b|)/2) - 1` of each
/// other's position; `t` counts matched-but-misordered pairs, each counted
/// as half a transposition per the classical definition.
fn jaro_distance(a: &[u32], b: &[u32], w: &JaroWeights) -> f64 {
    let n = a.len();
    let m = b.len();

    if n == 0 && m == 0 {
        return 0.0;
    }
    if n == 0 || m == 0 {
        return 1.0;
    }

    let window = (n.max(m) / 2).saturating_sub(1);

    let mut a_matched = vec![false; n];
    let mut b_matched = vec![false; m];
    let mut matches = 0usize;

    for i in 0..n {
        let lo = i.saturating_sub(window);
        let hi = (i + window).min(m - 1);
        if lo > hi {
            continue;
        }
        for j in lo..=hi {
            if !b_matched[j] && a[i] == b[j] {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 1.0;
    }

    let mut transpositions = 0usize;
    let mut bj = 0usize;
    for i in 0..n {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[bj] {
            bj += 1;
        }
        if a[i] != b[bj] {
            transpositions += 1;
        }
        bj += 1;
    }
    let t = (transpositions / 2) as f64;
    let matches = matches as f64;

    let similarity = (w.a * (matches / n as f64)
        + w.b * (matches / m as f64)
        + w.t * ((matches - t) / matches))
        / 3.0;

    (1.0 - similarity).clamp(0.0, 1.0)
}

/// Jaro-Winkler distance: Jaro distance with a bonus for a shared prefix of
/// up to 4 units, scaled by `p`. `w` must already be in kernel order — see
/// `permute_weights`.
pub fn winkler_distance(a: &[u32], b: &[u32], w: &JaroWeights, p: f64) -> f64 {
    let jaro = jaro_distance(a, b, w);
    if p == 0.0 {
        return jaro;
    }

    let prefix = a
        .iter()
        .zip(b.iter())
        .take(4)
        .take_while(|(x, y)| x == y)
        .count() as f64;

    (jaro - prefix * p * jaro).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Vec<u32> {
        text.chars().map(|c| c as u32).collect()
    }
    fn unit() -> JaroWeights {
        JaroWeights { a: 1.0, b: 1.0, t: 1.0 }
    }

    #[test]
    fn identity_is_zero() {
        assert_eq!(winkler_distance(&s("martha"), &s("martha"), &unit(), 0.1), 0.0);
    }

    #[test]
    fn one_empty_is_maximal() {
        assert_eq!(winkler_distance(&s(""), &s("abc"), &unit(), 0.1), 1.0);
    }

    #[test]
    fn both_empty_is_zero() {
        assert_eq!(winkler_distance(&s(""), &s(""), &unit(), 0.1), 0.0);
    }

    #[test]
    fn classic_martha_marhta_jaro() {
        // Jaro similarity(MARTHA, MARHTA) = 0.944..., distance ~= 0.0556.
        let dist = jaro_distance(&s("MARTHA"), &s("MARHTA"), &unit());
        assert!((dist - 0.0556).abs() < 0.001);
    }

    #[test]
    fn asymmetric_weights_normalize_by_a_fixed_third_not_their_sum() {
        // MARTHA vs MARHTA: m=6 matches, one transposition (t=1), so the
        // three weighted terms are 1, 1, 5/6. With weights that don't sum
        // to 3, normalizing by the fixed 1/3 factor (rather than by
        // w.a+w.b+w.t) gives a different, pinned result.
        let w = JaroWeights { a: 0.2, b: 0.6, t: 1.0 };
        let dist = jaro_distance(&s("MARTHA"), &s("MARHTA"), &w);
        assert!((dist - 0.45556).abs() < 0.001);
    }

    #[test]
    fn shared_prefix_reduces_winkler_distance_below_plain_jaro() {
        let plain = jaro_distance(&s("DWAYNE"), &s("DUANE"), &unit());
        let winkler = winkler_distance(&s("DWAYNE"), &s("DUANE"), &unit(), 0.1);
        assert!(winkler < plain);
    }

    #[test]
    fn prefix_bonus_caps_at_four_characters() {
        // "abcde..." vs "abcdf..." share exactly 4 prefix units before
        // diverging; a 5th shared unit would not add further bonus.
        let five_shared = winkler_distance(&s("abcdeX"), &s("abcdeY"), &unit(), 0.1);
        let four_shared = winkler_distance(&s("abcdX1"), &s("abcdY1"), &unit(), 0.1);
        assert_eq!(five_shared, four_shared);
    }
}

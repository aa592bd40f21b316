use hashish::HashMap;

use crate::params::EditWeights;

/// Unrestricted Damerau-Levenshtein distance: Levenshtein plus
/// arbitrary-distance transpositions, via the
/// Lowrance-Wagner algorithm. `da` tracks, per unit, the last row index
/// where that unit was seen in `a`, and `db` tracks the equivalent column
/// within the current row for `b` — together they locate the most recent
/// matching pair to transpose against.
///
/// Deletion/insertion weights follow the same b-into-a convention as
/// `osa::distance`.
pub fn distance(a: &[u32], b: &[u32], w: &EditWeights, max_dist: f64) -> f64 {
    let n = a.len();
    let m = b.len();

    if n == 0 && m == 0 {
        return 0.0;
    }

    // d is offset by one row/column versus the textbook indices so that
    // d[0][*] / d[*][0] can stand in for the algorithm's sentinel -1 row
    // and column.
    let mut d = vec![vec![0.0_f64; m + 2]; n + 2];
    for row in d.iter_mut() {
        row[0] = f64::INFINITY;
    }
    d[0].iter_mut().for_each(|cell| *cell = f64::INFINITY);
    for i in 0..=n {
        d[i + 1][1] = i as f64 * w.ins;
    }
    for j in 0..=m {
        d[1][j + 1] = j as f64 * w.del;
    }

    let mut da: HashMap<u32, usize> = HashMap::new();

    for i in 1..=n {
        let mut db = 0usize;

        for j in 1..=m {
            let k = *da.get(&b[j - 1]).unwrap_or(&0);
            let l = db;

            let cost = if a[i - 1] == b[j - 1] {
                db = j;
                0.0
            } else {
                w.sub
            };

            let transposition = if k == 0 || l == 0 {
                f64::INFINITY
            } else {
                let gap_a = (i - k).saturating_sub(1) as f64 * w.ins;
                let gap_b = (j - l).saturating_sub(1) as f64 * w.del;
                d[k][l] + gap_a + w.trans + gap_b
            };

            d[i + 1][j + 1] = (d[i][j] + cost)
                .min(d[i + 1][j] + w.del)
                .min(d[i][j + 1] + w.ins)
                .min(transposition);
        }

        da.insert(a[i - 1], i);

        if max_dist.is_finite() {
            let row_min = d[i + 1][1..=m + 1].iter().copied().fold(f64::INFINITY, f64::min);
            if row_min > max_dist {
                return f64::INFINITY;
            }
        }
    }

    d[n + 1][m + 1]
}

use rayon::prelude::*;

use crate::context::MatchContext;
use crate::error::Result;
use crate::kernels;
use crate::params::{Method, Params};
use crate::qgram::QgramTree;
use crate::unit::{decode_maybe, MaybeSeq, MaybeStr};

/// For each query in `x`, returns the 1-based index of its nearest match in
/// `table` under `maxDist`, or `nomatch`. Thread partitioning is over
/// queries, never over the table, so each worker scans the whole table
/// sequentially per query — required for "earliest `j` wins ties" to mean
/// anything, since that rule only makes sense under an in-order scan.
pub fn nearest_match(
    x: &[MaybeStr],
    table: &[MaybeStr],
    method: Method,
    params: &Params,
    nomatch: i64,
    match_absent: bool,
    ctx: &MatchContext,
) -> Result<Vec<i64>> {
    crate::params::validate(method, params, ctx.threads())?;

    let encoding = params.encoding();
    let x_decoded: Vec<MaybeSeq> = x
        .iter()
        .map(|s| decode_maybe(s, encoding))
        .collect::<Result<_>>()?;
    let table_decoded: Vec<MaybeSeq> = table
        .iter()
        .map(|s| decode_maybe(s, encoding))
        .collect::<Result<_>>()?;

    let first_absent_table_index = table_decoded
        .iter()
        .position(|t| t.is_none())
        .map(|idx| (idx + 1) as i64);

    let max_dist = params.max_dist;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ctx.threads())
        .build()
        .map_err(|e| crate::error::StringDistError::InvalidArgument(e.to_string()))?;

    let cancel = ctx.cancel_handle();

    let results = pool.install(|| {
        x_decoded
            .par_iter()
            .map(|query| {
                if cancel.load(std::sync::atomic::Ordering::Relaxed) {
                    return nomatch;
                }

                let query = match query {
                    None => {
                        return if match_absent {
                            first_absent_table_index.unwrap_or(nomatch)
                        } else {
                            nomatch
                        };
                    }
                    Some(q) => q,
                };

                let mut qtree = QgramTree::new();
                let mut best: f64 = f64::INFINITY;
                let mut best_j: Option<usize> = None;

                for (j, entry) in table_decoded.iter().enumerate() {
                    let entry = match entry {
                        None => continue,
                        Some(e) => e,
                    };

                    let d = kernels::compute(method, query, entry, params, &mut qtree);
                    if d <= max_dist && d < best {
                        best = d;
                        best_j = Some(j);
                    }
                }

                match best_j {
                    Some(j) => (j + 1) as i64,
                    None => nomatch,
                }
            })
            .collect()
    });

    if ctx.is_cancelled() {
        return Err(crate::error::StringDistError::Cancelled);
    }

    Ok(results)
}

/// `contains(x, table, ...) := nearest_match(..., nomatch=0, ...) > 0`.
pub fn contains(
    x: &[MaybeStr],
    table: &[MaybeStr],
    method: Method,
    params: &Params,
    match_absent: bool,
    ctx: &MatchContext,
) -> Result<Vec<bool>> {
    let matched = nearest_match(x, table, method, params, 0, match_absent, ctx)?;
    Ok(matched.into_iter().map(|idx| idx > 0).collect())
}

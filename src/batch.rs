use rayon::prelude::*;

use crate::context::MatchContext;
use crate::error::{Result, StringDistError};
use crate::kernels;
use crate::params::{Method, Params};
use crate::qgram::QgramTree;
use crate::unit::{decode_maybe, MaybeSeq, MaybeStr};

/// Pairwise batch distance. Recycles the shorter of `x`/`y`
/// modulo its own length to reach `N = max(|x|, |y|)`; either input being
/// empty makes the whole result empty. Either operand of a pair being
/// absent makes that result `None` without invoking the kernel.
pub fn pairwise_distance(
    x: &[MaybeStr],
    y: &[MaybeStr],
    method: Method,
    params: &Params,
    ctx: &MatchContext,
) -> Result<Vec<Option<f64>>> {
    crate::params::validate(method, params, ctx.threads())?;

    if x.is_empty() || y.is_empty() {
        return Ok(Vec::new());
    }

    let encoding = params.encoding();
    let x_decoded: Vec<MaybeSeq> = x
        .iter()
        .map(|s| decode_maybe(s, encoding))
        .collect::<Result<_>>()?;
    let y_decoded: Vec<MaybeSeq> = y
        .iter()
        .map(|s| decode_maybe(s, encoding))
        .collect::<Result<_>>()?;

    let n = x_decoded.len().max(y_decoded.len());
    let mut results: Vec<Option<f64>> = vec![None; n];

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ctx.threads())
        .build()
        .map_err(|e| StringDistError::InvalidArgument(e.to_string()))?;

    let chunk_size = n.div_ceil(ctx.threads()).max(1);
    let cancel = ctx.cancel_handle();

    pool.install(|| {
        results
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let mut qtree = QgramTree::new();
                let base = chunk_idx * chunk_size;

                for (offset, slot) in chunk.iter_mut().enumerate() {
                    if cancel.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }

                    let i = base + offset;
                    let a = &x_decoded[i % x_decoded.len()];
                    let b = &y_decoded[i % y_decoded.len()];

                    *slot = match (a, b) {
                        (Some(a), Some(b)) => {
                            Some(kernels::compute(method, a, b, params, &mut qtree))
                        }
                        _ => None,
                    };
                }
            });
    });

    if ctx.is_cancelled() {
        return Err(StringDistError::Cancelled);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(text: &str) -> MaybeStr {
        Some(text.to_string())
    }

    #[test]
    fn pre_cancelled_context_discards_results() {
        let ctx = MatchContext::new(1);
        ctx.cancel();
        let params = Params::default();
        let result = pairwise_distance(
            &[some("a")],
            &[some("b")],
            Method::Osa,
            &params,
            &ctx,
        );
        assert!(matches!(result, Err(StringDistError::Cancelled)));
    }

    #[test]
    fn either_empty_input_yields_empty_output() {
        let ctx = MatchContext::new(2);
        let params = Params::default();
        let result =
            pairwise_distance(&[], &[some("a")], Method::Osa, &params, &ctx).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn recycling_matches_explicit_repetition() {
        let ctx = MatchContext::new(2);
        let params = Params::default();
        let x = vec![some("aa"), some("bb"), some("cc")];
        let single = vec![some("zz")];
        let repeated = vec![some("zz"), some("zz"), some("zz")];

        let via_recycling =
            pairwise_distance(&x, &single, Method::Osa, &params, &ctx).unwrap();
        let via_repeat =
            pairwise_distance(&x, &repeated, Method::Osa, &params, &ctx).unwrap();

        assert_eq!(via_recycling, via_repeat);
    }

    #[test]
    fn absent_operand_yields_absent_result_without_invoking_kernel() {
        let ctx = MatchContext::new(1);
        let params = Params::default();
        let x = vec![None, some("a"), some("b"), some("c")];
        let y = vec![some("aa"), some("bb"), some("cc"), some("dd")];

        let result = pairwise_distance(&x, &y, Method::Osa, &params, &ctx).unwrap();
        assert_eq!(result.iter().filter(|r| r.is_none()).count(), 1);
        assert!(result[0].is_none());
    }

    #[test]
    fn qgram_tree_reuse_is_observationally_idempotent() {
        let ctx = MatchContext::new(1);
        let params = Params {
            q: 2,
            ..Default::default()
        };
        let x = vec![some("abcde")];
        let y = vec![some("edcba"), some("edcba")];

        let result = pairwise_distance(&x, &y, Method::Qgram, &params, &ctx).unwrap();
        assert_eq!(result[0], result[1]);
    }

    #[test]
    fn byte_codepoint_equivalence_for_ascii() {
        let ctx = MatchContext::new(1);
        let codepoint_params = Params::default();
        let byte_params = Params {
            use_bytes: true,
            ..Default::default()
        };
        let x = vec![some("kitten")];
        let y = vec![some("sitting")];

        let cp = pairwise_distance(&x, &y, Method::Lv, &codepoint_params, &ctx).unwrap();
        let by = pairwise_distance(&x, &y, Method::Lv, &byte_params, &ctx).unwrap();
        assert_eq!(cp, by);
    }
}

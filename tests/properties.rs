//! Property-based tests for invariants spanning the distance kernels and
//! the batch driver.

use proptest::prelude::*;
use stringdist_core::{pairwise_distance, MatchContext, Method, Params};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{0,10}").unwrap()
}

fn symmetric_methods() -> Vec<Method> {
    vec![
        Method::Osa,
        Method::Lv,
        Method::Dl,
        Method::Hamming,
        Method::Lcs,
        Method::Qgram,
        Method::Cosine,
        Method::Jaccard,
    ]
}

fn distance_one(method: Method, a: &str, b: &str, params: &Params) -> Option<f64> {
    let ctx = MatchContext::new(1);
    let result = pairwise_distance(
        &[Some(a.to_string())],
        &[Some(b.to_string())],
        method,
        params,
        &ctx,
    )
    .unwrap();
    result[0]
}

proptest! {
    /// Every symmetric method returns 0 for identical inputs.
    #[test]
    fn prop_identity_is_zero(s in word_strategy()) {
        let params = Params::default();
        for &method in &symmetric_methods() {
            if let Some(d) = distance_one(method, &s, &s, &params) {
                prop_assert_eq!(d, 0.0, "{:?} identity failed for {:?}", method, s);
            }
        }
    }

    /// Every symmetric method is commutative.
    #[test]
    fn prop_symmetry(a in word_strategy(), b in word_strategy()) {
        let params = Params::default();
        for &method in &symmetric_methods() {
            let forward = distance_one(method, &a, &b, &params);
            let backward = distance_one(method, &b, &a, &params);
            prop_assert_eq!(forward, backward, "{:?} asymmetric for {:?}/{:?}", method, a, b);
        }
    }

    /// Distances are never negative.
    #[test]
    fn prop_non_negative(a in word_strategy(), b in word_strategy()) {
        let params = Params::default();
        for &method in &symmetric_methods() {
            if let Some(d) = distance_one(method, &a, &b, &params) {
                prop_assert!(d >= 0.0, "{:?} went negative for {:?}/{:?}", method, a, b);
            }
        }
    }

    /// A finite maxDist cap never lets a result through above the cap.
    #[test]
    fn prop_max_dist_caps_result(a in word_strategy(), b in word_strategy()) {
        let params = Params { max_dist: 2.0, ..Default::default() };
        if let Some(d) = distance_one(Method::Lv, &a, &b, &params) {
            prop_assert!(d <= 2.0 || d.is_infinite());
        }
    }

    /// Recycling a single-element operand matches repeating it explicitly.
    #[test]
    fn prop_recycling_matches_explicit_repeat(
        xs in prop::collection::vec(word_strategy(), 1..6),
        y in word_strategy(),
    ) {
        let ctx = MatchContext::new(2);
        let params = Params::default();
        let x: Vec<_> = xs.iter().map(|s| Some(s.clone())).collect();
        let single = vec![Some(y.clone())];
        let repeated: Vec<_> = (0..xs.len()).map(|_| Some(y.clone())).collect();

        let via_recycling = pairwise_distance(&x, &single, Method::Osa, &params, &ctx).unwrap();
        let via_repeat = pairwise_distance(&x, &repeated, Method::Osa, &params, &ctx).unwrap();

        prop_assert_eq!(via_recycling, via_repeat);
    }
}

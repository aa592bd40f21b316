use std::collections::BTreeMap;

use crate::unit::Seq;

/// Which operand a q-gram count belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// Counts of one q-gram across the two strings being compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub a: u64,
    pub b: u64,
}

/// Sorted multiset of q-grams shared across the inner loop of a batch call.
/// A single tree lives for the lifetime of one worker's share of the batch:
/// `clear()` zeroes every count without freeing nodes, so repeated
/// comparisons on a worker never re-allocate the backing map.
///
/// Never shared across threads — each worker owns its own instance.
#[derive(Debug, Default)]
pub struct QgramTree {
    nodes: BTreeMap<Seq, Counts>,
}

impl QgramTree {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, gram: Seq, side: Side) {
        let counts = self.nodes.entry(gram).or_insert_with(Counts::default);
        match side {
            Side::A => counts.a += 1,
            Side::B => counts.b += 1,
        }
    }

    /// Zeroes every count, keeping every key (and the map's allocation)
    /// around for the next comparison.
    pub fn clear(&mut self) {
        for counts in self.nodes.values_mut() {
            *counts = Counts::default();
        }
    }

    pub fn traverse(&self) -> impl Iterator<Item = &Counts> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Feeds every length-`q` q-gram of `seq` into `tree` on the given `side`.
/// `q == 0` and the infeasible/empty-special cases are handled by the
/// caller, not here.
pub fn insert_qgrams(tree: &mut QgramTree, seq: &Seq, q: usize, side: Side) {
    if q == 0 || seq.len() < q {
        return;
    }
    for window in seq.windows(q) {
        tree.insert(window.to_vec(), side);
    }
}

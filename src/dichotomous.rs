//! Dichotomous search over cover sizes, shared by the exact algorithms.

use log::trace;
use crate::Cover;

/// Searches `[lower, upper]` for the smallest size at which `oracle` finds a cover and returns
/// that cover.
///
/// `witness` must be a valid cover. It is returned if no size below its own length turns out
/// to be feasible. `oracle(size)` has to answer with a cover of at most `size` elements or
/// `None` if no such cover exists; feasibility must be monotone in `size`.
pub fn dichotomous_search<F>(lower: usize, upper: usize, witness: Cover, mut oracle: F) -> Cover
where
    F: FnMut(usize) -> Option<Cover>,
{
    let mut best = witness;
    let mut lower = lower;
    let mut upper = upper.max(lower);
    while lower < upper {
        let middle = lower + (upper - lower) / 2;
        match oracle(middle) {
            Some(cover) => {
                trace!("size {} is feasible", middle);
                best = cover;
                upper = middle;
            },
            None => {
                trace!("size {} is infeasible", middle);
                lower = middle + 1;
            },
        }
    }
    // `upper` was never witnessed if it started below the witness size.
    if best.len() > lower {
        if let Some(cover) = oracle(lower) {
            best = cover;
        }
    }
    best
}

//! Execution price impact
//!
//! Compares pre-trade pool prices against post-trade sqrt ratios across a
//! route's swap legs and reduces them to one magnitude-only deviation in
//! basis points. Accumulation is arbitrary-precision: squared Q64.96 ratios
//! multiplied across hops overflow any fixed width, and rounding before the
//! final division would bias multi-hop estimates.

use alloy_primitives::U256;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use tracing::debug;

use swapcore_amm::u256_to_biguint;
use swapcore_types::{Percent, PoolSnapshot, Route};

/// Aggregate price impact of executed swap legs, in basis points.
///
/// `post_sqrt_ratios` carries one slot per route step; zero entries are
/// wrap/unwrap sentinels and are filtered out, the remainder pairing 1:1
/// in order with the pools' swap legs. Legs whose pre- or post-trade ratio
/// is zero contribute nothing. `None` when no leg contributes — an empty
/// pool list, an all-zero post list, or all-zero pre-trade state.
pub fn execution_price_impact(
    pools: &[PoolSnapshot],
    post_sqrt_ratios: &[U256],
) -> Option<Percent> {
    if pools.is_empty() {
        return None;
    }
    let post_swaps: Vec<U256> = post_sqrt_ratios
        .iter()
        .copied()
        .filter(|ratio| !ratio.is_zero())
        .collect();
    if post_swaps.is_empty() {
        return None;
    }

    // ∏ post² over ∏ pre² across contributing legs
    let mut accumulated: Option<(BigUint, BigUint)> = None;
    for (pool, post) in pools.iter().zip(post_swaps) {
        let pre = pool.sqrt_ratio_x96();
        if pre.is_zero() || post.is_zero() {
            debug!("skipping leg with uninitialized price state");
            continue;
        }
        let pre = u256_to_biguint(pre);
        let post = u256_to_biguint(post);
        let (numerator, denominator) =
            accumulated.get_or_insert((BigUint::one(), BigUint::one()));
        *numerator *= &post * &post;
        *denominator *= &pre * &pre;
    }

    let (numerator, denominator) = accumulated?;
    if denominator.is_zero() {
        return None;
    }

    // magnitude-only relative deviation, floored to whole basis points
    let (difference, larger) = if numerator >= denominator {
        (&numerator - &denominator, numerator)
    } else {
        (&denominator - &numerator, denominator)
    };
    let bps = (difference * 10_000u32) / larger;
    Some(Percent::from_bps(bps.to_u64()?))
}

/// [`execution_price_impact`] over a route's pool sequence.
pub fn route_price_impact(route: &Route, post_sqrt_ratios: &[U256]) -> Option<Percent> {
    execution_price_impact(route.pools(), post_sqrt_ratios)
}

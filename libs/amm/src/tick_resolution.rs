//! Price → nearest usable tick resolution
//!
//! Takes a human price (decimal string, quote units per base unit) and
//! resolves the tick a router should use: exact ratio parsing, sqrt-ratio
//! encoding, boundary saturation, neighbor refinement, and snapping to the
//! pool's tick spacing. Absent or malformed inputs yield `None` — "not yet
//! computable" — never an error; the typed out-of-bounds errors of
//! `tick_math` cannot escape this layer because saturation happens first.

use alloy_primitives::U256;
use num_bigint::BigUint;
use num_traits::Zero;
use rust_decimal::Decimal;
use tracing::debug;

use swapcore_types::Token;

use crate::sqrt_price::{biguint_to_u256, encode_sqrt_ratio_x96, u256_to_biguint};
use crate::tick_math::{self, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};

fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u64).pow(exponent)
}

/// Parse a non-negative decimal price string into an exact raw-unit ratio.
///
/// The string is quote units per base unit in human terms; the result is
/// `(digits * 10^quote.decimals, 10^frac_len * 10^base.decimals)`, i.e.
/// raw quote amount over raw base amount. Malformed strings (signs,
/// exponents, multiple dots, no digits) are `None`.
pub fn try_parse_price_ratio(
    value: &str,
    base: &Token,
    quote: &Token,
) -> Option<(BigUint, BigUint)> {
    let (whole, frac) = match value.split_once('.') {
        Some((w, f)) => (w, f),
        None => (value, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = BigUint::parse_bytes(format!("{whole}{frac}").as_bytes(), 10)?;
    let numerator = digits * pow10(quote.decimals as u32);
    let denominator = pow10(frac.len() as u32) * pow10(base.decimals as u32);
    Some((numerator, denominator))
}

/// Tick whose sqrt ratio is closest to the given raw-unit price ratio.
///
/// Orients the fraction by the canonical token order, encodes it to a sqrt
/// ratio, saturates at the representable boundaries, and otherwise refines
/// the floor tick against its immediate neighbors. Candidates are examined
/// in ascending order with strict-less-than replacement, so an exact tie
/// resolves to the lower tick.
pub fn price_to_closest_tick(
    numerator: &BigUint,
    denominator: &BigUint,
    base: &Token,
    quote: &Token,
) -> Option<i32> {
    // invert when the base is token1, so the encoding is token1-per-token0
    let sqrt_ratio = if base.sorts_before(quote) {
        encode_sqrt_ratio_x96(numerator, denominator)?
    } else {
        encode_sqrt_ratio_x96(denominator, numerator)?
    };

    if sqrt_ratio >= u256_to_biguint(MAX_SQRT_RATIO) {
        debug!("price saturates above the representable range, using MAX_TICK");
        return Some(MAX_TICK);
    }
    if sqrt_ratio <= u256_to_biguint(MIN_SQRT_RATIO) {
        debug!("price saturates below the representable range, using MIN_TICK");
        return Some(MIN_TICK);
    }

    let target = biguint_to_u256(&sqrt_ratio)?;
    let floor_tick = tick_math::tick_at_sqrt_ratio(target).ok()?;

    let mut best: Option<(i32, U256)> = None;
    for candidate in [floor_tick - 1, floor_tick, floor_tick + 1] {
        let candidate = candidate.clamp(MIN_TICK, MAX_TICK);
        let ratio = match tick_math::sqrt_ratio_at_tick(candidate) {
            Ok(ratio) => ratio,
            Err(_) => continue,
        };
        let diff = ratio.abs_diff(target);
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((candidate, diff)),
        }
    }
    best.map(|(tick, _)| tick)
}

/// Nearest multiple of `tick_spacing`, clamped into the valid tick range.
///
/// Exact half-way ties round toward positive infinity (round-half-up);
/// when the nearest multiple falls outside the range the result steps one
/// spacing back inside.
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> i32 {
    debug_assert!(tick_spacing > 0, "tick spacing must be positive");
    let spacing = tick_spacing as i64;
    let tick = tick as i64;

    let quotient = tick.div_euclid(spacing);
    let remainder = tick.rem_euclid(spacing);
    let rounded = if 2 * remainder >= spacing {
        (quotient + 1) * spacing
    } else {
        quotient * spacing
    };

    if rounded < MIN_TICK as i64 {
        (rounded + spacing) as i32
    } else if rounded > MAX_TICK as i64 {
        (rounded - spacing) as i32
    } else {
        rounded as i32
    }
}

/// Resolve a price form into the usable tick a router should target.
///
/// All inputs are optional because they arrive piecemeal from the caller's
/// input state; any absent or invalid piece (including a non-positive tick
/// spacing) makes the result `None` rather than an error.
pub fn try_parse_tick(
    base: Option<&Token>,
    quote: Option<&Token>,
    value: Option<&str>,
    tick_spacing: Option<i32>,
) -> Option<i32> {
    let base = base?;
    let quote = quote?;
    let value = value?;
    let spacing = tick_spacing.filter(|s| *s > 0)?;

    let (numerator, denominator) = try_parse_price_ratio(value, base, quote)?;
    let tick = price_to_closest_tick(&numerator, &denominator, base, quote)?;
    Some(nearest_usable_tick(tick, spacing))
}

/// Human-readable quote-per-base price at a tick, for display echo only —
/// routing arithmetic never consumes this.
pub fn tick_to_price_decimal(tick: i32, base: &Token, quote: &Token) -> Option<Decimal> {
    const SCALE: u32 = 18;

    let sqrt = u256_to_biguint(tick_math::sqrt_ratio_at_tick(tick).ok()?);
    let ratio_num = &sqrt * &sqrt; // token1 per token0, Q128.192 -> Q·/2^192
    let ratio_den = BigUint::from(1u8) << 192usize;

    let (mut num, mut den) = if base.sorts_before(quote) {
        (ratio_num, ratio_den)
    } else {
        (ratio_den, ratio_num)
    };
    if den.is_zero() {
        return None;
    }

    num *= pow10(SCALE + base.decimals as u32);
    den *= pow10(quote.decimals as u32);

    let mantissa = i128::try_from(num / den).ok()?;
    Decimal::try_from_i128_with_scale(mantissa, SCALE).ok()
}

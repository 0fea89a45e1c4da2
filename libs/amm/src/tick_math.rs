//! Tick index ↔ sqrt price ratio conversions
//!
//! Prices are quantized onto a log scale: price = 1.0001^tick, carried as
//! the square root of the ratio in Q64.96 fixed point. Both directions are
//! exact integer arithmetic and reproduce the on-chain pool contracts bit
//! for bit — downstream financial correctness depends on agreeing with the
//! chain, so nothing here may drift or round differently.
//!
//! Out-of-range arguments are typed errors, never clamped; saturation is
//! the caller's explicit decision one layer up (see `tick_resolution`).

use alloy_primitives::{I256, U256};
use thiserror::Error;

/// Lowest tick representable by a Q64.96 sqrt ratio.
pub const MIN_TICK: i32 = -887272;
/// Highest tick representable by a Q64.96 sqrt ratio.
pub const MAX_TICK: i32 = -MIN_TICK;

/// `sqrt_ratio_at_tick(MIN_TICK)`.
pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
/// `sqrt_ratio_at_tick(MAX_TICK)`.
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

/// Boundary violations in tick/sqrt-ratio conversions. These indicate a
/// programming or data error (e.g. corrupted pool state), distinct from the
/// "not yet computable" `None` used for absent inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TickMathError {
    #[error("tick {0} outside [{MIN_TICK}, {MAX_TICK}]")]
    TickOutOfBounds(i32),

    #[error("sqrt price ratio outside the representable tick range")]
    SqrtRatioOutOfBounds,
}

/// Q128.128 multipliers `1 / 1.0001^(2^(n-1))` for bits 1..=19 of |tick|;
/// bit 0 is handled by the loop seed. Values match the pool contracts.
const BIT_RATIOS: [U256; 19] = [
    U256::from_limbs([6459403834229662010, 18444899583751176498, 0, 0]),
    U256::from_limbs([17226890335427755468, 18443055278223354162, 0, 0]),
    U256::from_limbs([2032852871939366096, 18439367220385604838, 0, 0]),
    U256::from_limbs([14545316742740207172, 18431993317065449817, 0, 0]),
    U256::from_limbs([5129152022828963008, 18417254355718160513, 0, 0]),
    U256::from_limbs([4894419605888772193, 18387811781193591352, 0, 0]),
    U256::from_limbs([1280255884321894483, 18329067761203520168, 0, 0]),
    U256::from_limbs([15924666964335305636, 18212142134806087854, 0, 0]),
    U256::from_limbs([8010504389359918676, 17980523815641551639, 0, 0]),
    U256::from_limbs([10668036004952895731, 17526086738831147013, 0, 0]),
    U256::from_limbs([4878133418470705625, 16651378430235024244, 0, 0]),
    U256::from_limbs([9537173718739605541, 15030750278693429944, 0, 0]),
    U256::from_limbs([9972618978014552549, 12247334978882834399, 0, 0]),
    U256::from_limbs([10428997489610666743, 8131365268884726200, 0, 0]),
    U256::from_limbs([9305304367709015974, 3584323654723342297, 0, 0]),
    U256::from_limbs([14301143598189091785, 696457651847595233, 0, 0]),
    U256::from_limbs([7393154844743099908, 26294789957452057, 0, 0]),
    U256::from_limbs([2209338891292245656, 37481735321082, 0, 0]),
    U256::from_limbs([10518117631919034274, 76158723, 0, 0]),
];

/// `1 / sqrt(1.0001)` in Q128.128, the bit-0 seed.
const BIT0_RATIO: U256 = U256::from_limbs([12262481743371124737, 18445821805675392311, 0, 0]);

/// `1` in Q128.128.
const ONE_Q128: U256 = U256::from_limbs([0, 0, 1, 0]);

/// `log2(sqrt(1.0001))^-1`-flavored scaling constant: `2^64 / log2(1.0001) * 2`
/// folded into Q-space, used to turn a base-2 log into a base-1.0001 tick.
const LOG_SQRT_10001: I256 = I256::from_raw(U256::from_limbs([11745905768312294533, 13863, 0, 0]));

/// Error margins of the log approximation, below/above, in the same fixed
/// point as `LOG_SQRT_10001 * log_2`.
const TICK_LOW_MARGIN: I256 = I256::from_raw(U256::from_limbs([
    6552757943157144234,
    184476617836266586,
    0,
    0,
]));
const TICK_HIGH_MARGIN: I256 = I256::from_raw(U256::from_limbs([
    4998474450511881007,
    15793544031827761793,
    0,
    0,
]));

/// Sqrt price ratio (Q64.96) at a tick index.
///
/// Multiplies out the binary expansion of |tick| against the per-bit ratio
/// table in Q128.128, inverts for positive ticks, then narrows to Q64.96
/// rounding truncated bits up.
pub fn sqrt_ratio_at_tick(tick: i32) -> Result<U256, TickMathError> {
    let abs_tick = tick.unsigned_abs();
    if abs_tick > MAX_TICK as u32 {
        return Err(TickMathError::TickOutOfBounds(tick));
    }

    let mut ratio = if abs_tick & 1 != 0 { BIT0_RATIO } else { ONE_Q128 };
    for (i, multiplier) in BIT_RATIOS.iter().enumerate() {
        if abs_tick & (2u32 << i) != 0 {
            // both operands stay below 2^128, so the product is exact
            ratio = ratio.wrapping_mul(*multiplier) >> 128;
        }
    }

    // the table encodes negative ticks; invert for positive ones
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so the result round-trips through
    // tick_at_sqrt_ratio's floor
    let truncated = ratio & U256::from(0xffffffffu64);
    let round_up = U256::from((truncated != U256::ZERO) as u8);
    Ok((ratio >> 32) + round_up)
}

/// Greatest tick whose sqrt ratio does not exceed the argument (floor
/// semantics), via the canonical msb/log2 approximation.
///
/// Accepts the closed range `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`; the top
/// boundary maps straight to `MAX_TICK` so the boundary constants
/// round-trip. One unit beyond either end is a typed error.
pub fn tick_at_sqrt_ratio(sqrt_ratio_x96: U256) -> Result<i32, TickMathError> {
    if sqrt_ratio_x96 < MIN_SQRT_RATIO || sqrt_ratio_x96 > MAX_SQRT_RATIO {
        return Err(TickMathError::SqrtRatioOutOfBounds);
    }
    if sqrt_ratio_x96 == MAX_SQRT_RATIO {
        return Ok(MAX_TICK);
    }

    let ratio: U256 = sqrt_ratio_x96 << 32; // Q64.96 -> Q128.128
    let msb = 255 - ratio.leading_zeros();

    // normalize into [2^127, 2^128)
    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    // integer part of log2, Q64.64
    let mut log_2: I256 =
        (I256::from_raw(U256::from(msb)) - I256::from_raw(U256::from(128u64))) << 64;

    // 14 fractional bits of log2: square, renormalize, harvest the carry
    for shift in (50..=63).rev() {
        r = r.wrapping_mul(r) >> 127;
        let f = r >> 128; // 0 or 1
        log_2 |= I256::from_raw(f << shift);
        r >>= f;
    }

    let log_sqrt10001 = log_2.wrapping_mul(LOG_SQRT_10001);
    let tick_low = {
        let shifted: I256 = (log_sqrt10001 - TICK_LOW_MARGIN) >> 128;
        shifted.low_i32()
    };
    let tick_high = {
        let shifted: I256 = (log_sqrt10001 + TICK_HIGH_MARGIN) >> 128;
        shifted.low_i32()
    };

    Ok(if tick_low == tick_high {
        tick_low
    } else if sqrt_ratio_at_tick(tick_high)? <= sqrt_ratio_x96 {
        tick_high
    } else {
        tick_low
    })
}

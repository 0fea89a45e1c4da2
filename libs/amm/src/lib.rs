//! # Swapcore AMM Library - Fixed-Point Pool Mathematics
//!
//! ## Purpose
//!
//! Exact integer mathematics for concentrated-liquidity pool pricing:
//! bidirectional tick ↔ sqrt-price-ratio conversion that agrees bit for bit
//! with the on-chain pool contracts, sqrt-ratio encoding of exact price
//! fractions, and resolution of human price strings onto the nearest tick a
//! pool can actually use.
//!
//! ## Integration Points
//!
//! - **Input Sources**: token identities and price strings from the caller's
//!   input state, tick spacings from pool snapshots
//! - **Output Destinations**: routing and position-management layers that
//!   need chain-consistent tick indices
//! - **Precision**: Q64.96 sqrt ratios in 256-bit integers, arbitrary
//!   precision for price fractions; floating point never enters
//! - **Validation**: out-of-range ticks and ratios are typed errors at the
//!   math boundary; saturation and snapping are explicit caller-side steps
//!   in `tick_resolution`

pub mod sqrt_price;
pub mod tick_math;
pub mod tick_resolution;

pub use sqrt_price::{biguint_to_u256, encode_sqrt_ratio_x96, u256_to_biguint};
pub use tick_math::{
    sqrt_ratio_at_tick, tick_at_sqrt_ratio, TickMathError, MAX_SQRT_RATIO, MAX_TICK,
    MIN_SQRT_RATIO, MIN_TICK,
};
pub use tick_resolution::{
    nearest_usable_tick, price_to_closest_tick, tick_to_price_decimal, try_parse_price_ratio,
    try_parse_tick,
};

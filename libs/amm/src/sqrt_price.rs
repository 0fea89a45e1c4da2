//! Sqrt price ratio encoding
//!
//! Turns an exact amount ratio into the Q64.96 square-root representation
//! used by pool state. Arbitrary precision throughout: a hostile price
//! fraction can exceed 256 bits before the square root, so the encoding
//! runs in `BigUint` and callers narrow to `U256` only after range checks.

use alloy_primitives::U256;
use num_bigint::BigUint;
use num_integer::Roots;
use num_traits::Zero;

/// `isqrt(amount1 * 2^192 / amount0)`: the Q64.96 sqrt of `amount1/amount0`.
///
/// `amount1` is the raw amount of token1 (the numerator of the price of
/// token0 in token1). `None` when `amount0` is zero.
pub fn encode_sqrt_ratio_x96(amount1: &BigUint, amount0: &BigUint) -> Option<BigUint> {
    if amount0.is_zero() {
        return None;
    }
    let ratio_x192 = (amount1 << 192usize) / amount0;
    Some(ratio_x192.sqrt())
}

/// Widen a `U256` into an arbitrary-precision integer.
pub fn u256_to_biguint(value: U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes::<32>())
}

/// Narrow an arbitrary-precision integer back to `U256`; `None` when the
/// value needs more than 256 bits.
pub fn biguint_to_u256(value: &BigUint) -> Option<U256> {
    U256::try_from_be_slice(&value.to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u128) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_unit_price_is_two_pow_96() {
        let encoded = encode_sqrt_ratio_x96(&big(1), &big(1)).unwrap();
        assert_eq!(encoded, big(79228162514264337593543950336));
    }

    #[test]
    fn test_known_encodings() {
        // values cross-checked against the reference pool SDK
        assert_eq!(
            encode_sqrt_ratio_x96(&big(100), &big(1)).unwrap(),
            big(792281625142643375935439503360)
        );
        assert_eq!(
            encode_sqrt_ratio_x96(&big(1), &big(100)).unwrap(),
            big(7922816251426433759354395033)
        );
        assert_eq!(
            encode_sqrt_ratio_x96(&big(111), &big(333)).unwrap(),
            big(45742400955009932534161870629)
        );
        assert_eq!(
            encode_sqrt_ratio_x96(&big(333), &big(111)).unwrap(),
            big(137227202865029797602485611888)
        );
    }

    #[test]
    fn test_zero_denominator_is_no_result() {
        assert!(encode_sqrt_ratio_x96(&big(1), &big(0)).is_none());
    }

    #[test]
    fn test_zero_numerator_encodes_to_zero() {
        assert!(encode_sqrt_ratio_x96(&big(0), &big(5)).unwrap().is_zero());
    }

    #[test]
    fn test_oversized_fraction_stays_exact() {
        // numerator far beyond 64 bits: must not lose precision or overflow
        let huge = BigUint::from(u128::MAX) * BigUint::from(u128::MAX);
        let encoded = encode_sqrt_ratio_x96(&huge, &big(1)).unwrap();
        // sqrt(huge * 2^192) == u128::MAX * 2^96 exactly
        assert_eq!(encoded, BigUint::from(u128::MAX) << 96usize);
    }

    #[test]
    fn test_u256_round_trip() {
        let value = U256::from_limbs([1, 2, 3, 4]);
        assert_eq!(biguint_to_u256(&u256_to_biguint(value)).unwrap(), value);
    }

    #[test]
    fn test_narrowing_overflow_is_none() {
        let too_wide = BigUint::from(1u8) << 256usize;
        assert!(biguint_to_u256(&too_wide).is_none());
    }
}

//! Pool state snapshots
//!
//! A `PoolSnapshot` is an edge in the token graph: an ordered token pair
//! plus the pool's fee tier, tick spacing, and current sqrt price ratio.
//! Snapshots are taken from external data at call time and are read-only
//! for the duration of any core computation.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::currency::Token;

/// Errors raised when a pool snapshot cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Both tokens carry the same address
    #[error("pool tokens must have distinct addresses")]
    IdenticalTokens,

    /// The tokens live on different chains
    #[error("pool tokens are on different chains ({0} vs {1})")]
    ChainMismatch(u64, u64),

    /// Tick spacing must be a positive integer
    #[error("tick spacing must be positive, got {0}")]
    InvalidTickSpacing(i32),
}

/// Fee tiers in hundredths of a basis point, with their default tick
/// spacings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeTier {
    /// 0.01%
    Lowest,
    /// 0.05%
    Low,
    /// 0.30%
    Medium,
    /// 1.00%
    High,
}

impl FeeTier {
    /// Fee in hundredths of a basis point (3000 = 0.3%).
    pub fn in_hundredths_of_bip(self) -> u32 {
        match self {
            FeeTier::Lowest => 100,
            FeeTier::Low => 500,
            FeeTier::Medium => 3_000,
            FeeTier::High => 10_000,
        }
    }

    /// Minimum gap between usable ticks for pools of this tier.
    pub fn default_tick_spacing(self) -> i32 {
        match self {
            FeeTier::Lowest => 1,
            FeeTier::Low => 10,
            FeeTier::Medium => 60,
            FeeTier::High => 200,
        }
    }
}

/// Immutable snapshot of a pool's identity and current price state.
///
/// The token pair is stored canonically ordered: `token0` sorts before
/// `token1`. A zero `sqrt_ratio_x96` models an uninitialized pool; it is
/// accepted here and skipped by the price impact calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    token0: Token,
    token1: Token,
    fee: FeeTier,
    tick_spacing: i32,
    sqrt_ratio_x96: U256,
}

impl PoolSnapshot {
    /// Construct a snapshot, ordering the pair canonically.
    pub fn new(
        a: Token,
        b: Token,
        fee: FeeTier,
        tick_spacing: i32,
        sqrt_ratio_x96: U256,
    ) -> Result<Self, PoolError> {
        if a.chain_id != b.chain_id {
            return Err(PoolError::ChainMismatch(a.chain_id, b.chain_id));
        }
        if a.address == b.address {
            return Err(PoolError::IdenticalTokens);
        }
        if tick_spacing <= 0 {
            return Err(PoolError::InvalidTickSpacing(tick_spacing));
        }

        let (token0, token1) = if a.sorts_before(&b) { (a, b) } else { (b, a) };

        Ok(Self {
            token0,
            token1,
            fee,
            tick_spacing,
            sqrt_ratio_x96,
        })
    }

    /// Construct with the fee tier's default tick spacing.
    pub fn with_default_spacing(
        a: Token,
        b: Token,
        fee: FeeTier,
        sqrt_ratio_x96: U256,
    ) -> Result<Self, PoolError> {
        let tick_spacing = fee.default_tick_spacing();
        Self::new(a, b, fee, tick_spacing, sqrt_ratio_x96)
    }

    pub fn token0(&self) -> &Token {
        &self.token0
    }

    pub fn token1(&self) -> &Token {
        &self.token1
    }

    pub fn fee(&self) -> FeeTier {
        self.fee
    }

    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    pub fn sqrt_ratio_x96(&self) -> U256 {
        self.sqrt_ratio_x96
    }

    pub fn chain_id(&self) -> u64 {
        self.token0.chain_id
    }

    /// Whether the pool touches the given token (either side).
    pub fn involves(&self, token: &Token) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    /// The pool's other token, when `token` is one of the pair.
    pub fn other_token(&self, token: &Token) -> Option<&Token> {
        if self.token0 == *token {
            Some(&self.token1)
        } else if self.token1 == *token {
            Some(&self.token0)
        } else {
            None
        }
    }
}

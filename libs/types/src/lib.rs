//! # Swapcore Types Library
//!
//! Shared value types for the swapcore routing and execution-pricing core.
//!
//! ## Design Philosophy
//!
//! - **Immutable snapshots**: tokens and pool states are constructed once
//!   from external (on-chain/subgraph) data and never mutated by the core
//! - **No precision loss**: sqrt price ratios are kept as 256-bit integers,
//!   percentages as exact rationals; floating point never enters the domain
//! - **Typed errors vs. absence**: invalid constructions fail with
//!   `thiserror` enums, while "not yet computable" inputs resolve to `None`
//!   one layer up — the two are never conflated
//!
//! ## Quick Start
//!
//! ```rust
//! use alloy_primitives::{address, U256};
//! use swapcore_types::{FeeTier, PoolSnapshot, Token};
//!
//! let usdc = Token::new(1, address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"), 6);
//! let weth = Token::new(1, address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"), 18);
//!
//! let pool = PoolSnapshot::with_default_spacing(
//!     usdc,
//!     weth,
//!     FeeTier::Medium,
//!     U256::from(79228162514264337593543950336u128),
//! )?;
//! assert!(pool.token0().sorts_before(pool.token1()));
//! # Ok::<(), swapcore_types::PoolError>(())
//! ```

pub mod currency;
pub mod percent;
pub mod pool;
pub mod route;

pub use currency::{wrapped_native, Currency, NativeCurrency, Token};
pub use percent::Percent;
pub use pool::{FeeTier, PoolError, PoolSnapshot};
pub use route::{Route, RouteError};

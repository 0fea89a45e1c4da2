//! # Swapcore Router Library - Route Discovery and Execution Pricing
//!
//! ## Purpose
//!
//! Candidate route enumeration and realized price impact for the swapcore
//! trading core. Given immutable pool snapshots, discovers every loopless
//! 1- and 2-hop route between two currencies and reduces before/after pool
//! prices to a single aggregate impact figure in basis points.
//!
//! ## Integration Points
//!
//! - **Input Sources**: pool snapshots and endpoint currencies from the
//!   caller's data-fetch layer; post-trade sqrt ratios from executed or
//!   simulated swaps
//! - **Output Destinations**: quoting and UI layers that rank the candidate
//!   routes and display impact — ranking itself is out of scope here
//! - **Purity**: both operations are synchronous pure functions over their
//!   arguments; callers may invoke them concurrently without coordination

pub mod impact;
pub mod search;

pub use impact::{execution_price_impact, route_price_impact};
pub use search::compute_all_routes;

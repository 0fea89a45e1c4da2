//! Trade routes
//!
//! A route is an ordered, non-empty pool sequence connecting an input
//! currency to an output currency, where consecutive pools share exactly
//! one pivot token. Construction is validating: a candidate pool sequence
//! that cannot form a route fails with a typed error, which the graph
//! search treats as a per-candidate skip.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::currency::{Currency, Token};
use crate::pool::PoolSnapshot;

/// Errors raised when a pool sequence cannot form a route.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A route needs at least one pool
    #[error("route must contain at least one pool")]
    EmptyPools,

    /// Route pools or endpoints span multiple chains
    #[error("route pools and endpoints must share one chain")]
    ChainMismatch,

    /// A pool does not connect to the token path walked so far
    #[error("pool at position {position} does not connect to the token path")]
    DisconnectedPath { position: usize },

    /// The walk does not terminate at the output token
    #[error("route does not terminate at the output token")]
    EndpointMismatch,

    /// The native currency of this chain has no wrapped representative
    #[error("no wrapped representative for the native currency of chain {chain_id}")]
    NoWrappedForm { chain_id: u64 },
}

/// An ordered pool path from an input currency to an output currency.
///
/// The endpoints keep their original (possibly native) currencies; the
/// derived `token_path` holds the wrapped tokens actually traversed, from
/// the wrapped input through each pivot to the wrapped output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pools: Vec<PoolSnapshot>,
    input: Currency,
    output: Currency,
    token_path: Vec<Token>,
}

impl Route {
    /// Validate a pool sequence into a route.
    ///
    /// Walks the sequence from the wrapped input: each pool must contain
    /// the running token and hands over its other side as the next pivot;
    /// the walk must end at the wrapped output.
    pub fn new(
        pools: Vec<PoolSnapshot>,
        input: Currency,
        output: Currency,
    ) -> Result<Self, RouteError> {
        if pools.is_empty() {
            return Err(RouteError::EmptyPools);
        }

        let wrapped_in = input.wrapped().ok_or(RouteError::NoWrappedForm {
            chain_id: input.chain_id(),
        })?;
        let wrapped_out = output.wrapped().ok_or(RouteError::NoWrappedForm {
            chain_id: output.chain_id(),
        })?;

        if wrapped_in.chain_id != wrapped_out.chain_id
            || pools.iter().any(|p| p.chain_id() != wrapped_in.chain_id)
        {
            return Err(RouteError::ChainMismatch);
        }

        let mut token_path = Vec::with_capacity(pools.len() + 1);
        let mut current = wrapped_in;
        token_path.push(current.clone());
        for (position, pool) in pools.iter().enumerate() {
            let next = pool
                .other_token(&current)
                .ok_or(RouteError::DisconnectedPath { position })?
                .clone();
            token_path.push(next.clone());
            current = next;
        }

        if current != wrapped_out {
            return Err(RouteError::EndpointMismatch);
        }

        Ok(Self {
            pools,
            input,
            output,
            token_path,
        })
    }

    pub fn pools(&self) -> &[PoolSnapshot] {
        &self.pools
    }

    /// Number of pool traversals.
    pub fn hops(&self) -> usize {
        self.pools.len()
    }

    pub fn input(&self) -> &Currency {
        &self.input
    }

    pub fn output(&self) -> &Currency {
        &self.output
    }

    /// Wrapped tokens in traversal order: input, pivots, output.
    pub fn token_path(&self) -> &[Token] {
        &self.token_path
    }

    pub fn chain_id(&self) -> u64 {
        self.token_path[0].chain_id
    }
}

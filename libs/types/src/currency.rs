//! Token and currency identities
//!
//! Tokens are immutable value objects identified by `(chain_id, address)`;
//! symbol/name/decimals are display metadata and do not participate in
//! equality. The native currency of a chain has no address of its own and
//! is mapped to its wrapped ERC-20 representative for graph matching.

use std::collections::HashMap;

use alloy_primitives::{address, Address};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An ERC-20 token identity on a specific chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: u64,
    pub address: Address,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl Token {
    pub fn new(chain_id: u64, address: Address, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    pub fn with_metadata(
        chain_id: u64,
        address: Address,
        decimals: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: Some(symbol.into()),
            name: Some(name.into()),
        }
    }

    /// Canonical pool ordering: `self` is token0 when its address compares
    /// strictly below `other`'s. Equal addresses never sort before each
    /// other; pool construction rejects identical pairs outright.
    pub fn sorts_before(&self, other: &Token) -> bool {
        self.address < other.address
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl std::hash::Hash for Token {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

/// The native (gas) currency of a chain, e.g. ETH on mainnet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub chain_id: u64,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl NativeCurrency {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            decimals: 18,
            symbol: None,
            name: None,
        }
    }
}

impl PartialEq for NativeCurrency {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }
}

impl Eq for NativeCurrency {}

/// Either the chain's native currency or an ERC-20 token.
///
/// Routing operates on wrapped tokens; the original currency is preserved
/// on the resulting route so callers can still distinguish native from
/// wrapped endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Native(NativeCurrency),
    Erc20(Token),
}

impl Currency {
    pub fn chain_id(&self) -> u64 {
        match self {
            Currency::Native(native) => native.chain_id,
            Currency::Erc20(token) => token.chain_id,
        }
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Currency::Native(native) => native.decimals,
            Currency::Erc20(token) => token.decimals,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }

    /// The token used for pool/graph matching: an ERC-20 is its own wrapped
    /// form; a native currency maps through the wrapped-native registry.
    /// `None` when the chain has no registered wrapped representative —
    /// callers treat that as "not yet computable", not as an error.
    pub fn wrapped(&self) -> Option<Token> {
        match self {
            Currency::Native(native) => wrapped_native(native.chain_id),
            Currency::Erc20(token) => Some(token.clone()),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Erc20(token)
    }
}

/// Wrapped-native registry: chain id → canonical wrapped gas token.
static WRAPPED_NATIVE: Lazy<HashMap<u64, Token>> = Lazy::new(|| {
    let entries: [(u64, Address, &str, &str); 5] = [
        (
            1,
            address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
            "WETH",
            "Wrapped Ether",
        ),
        (
            10,
            address!("4200000000000000000000000000000000000006"),
            "WETH",
            "Wrapped Ether",
        ),
        (
            137,
            address!("0d500b1d8e8ef31e21c99d1db9a6444d3adf1270"),
            "WPOL",
            "Wrapped POL",
        ),
        (
            8453,
            address!("4200000000000000000000000000000000000006"),
            "WETH",
            "Wrapped Ether",
        ),
        (
            42161,
            address!("82af49447d8a07e3bd95bd0d56f35241523fbab1"),
            "WETH",
            "Wrapped Ether",
        ),
    ];

    entries
        .into_iter()
        .map(|(chain_id, addr, symbol, name)| {
            (chain_id, Token::with_metadata(chain_id, addr, 18, symbol, name))
        })
        .collect()
});

/// Wrapped gas token for a chain, if registered.
pub fn wrapped_native(chain_id: u64) -> Option<Token> {
    WRAPPED_NATIVE.get(&chain_id).cloned()
}

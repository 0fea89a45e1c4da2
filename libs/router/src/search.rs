//! Route graph search
//!
//! Tokens are vertices, pools are undirected edges; candidates are the
//! loopless 1- and 2-hop paths between the (wrapped) endpoints. The search
//! is structural only: no ranking, no liquidity feasibility, no dedup of
//! duplicate input pools. Candidate construction failures are per-candidate
//! skips, never aborts.

use tracing::debug;

use swapcore_types::{Currency, PoolSnapshot, Route};

/// Enumerate every 1- and 2-hop route between two currencies over a pool
/// set.
///
/// Emission order is deterministic: all direct routes first in pool input
/// order, then two-hop routes ordered by first-hop then second-hop input
/// position. Pools are distinguished by input-list position, so duplicate
/// entries in `pools` produce duplicate routes — the search does no dedup.
/// A currency whose chain has no wrapped representative yields an empty
/// result ("not yet computable"), as does an empty pool set.
pub fn compute_all_routes(
    input: &Currency,
    output: &Currency,
    pools: &[PoolSnapshot],
) -> Vec<Route> {
    let (token_in, token_out) = match (input.wrapped(), output.wrapped()) {
        (Some(token_in), Some(token_out)) => (token_in, token_out),
        _ => {
            debug!("endpoint currency has no wrapped form, route search yields nothing");
            return Vec::new();
        }
    };

    let mut routes = Vec::new();

    // direct pass: pools pairing the endpoints
    for pool in pools {
        if pool.involves(&token_in) && pool.involves(&token_out) {
            match Route::new(vec![pool.clone()], input.clone(), output.clone()) {
                Ok(route) => routes.push(route),
                Err(err) => debug!("skipping direct candidate: {err}"),
            }
        }
    }

    // two-hop pass: pivot through the other side of each pool touching the
    // input token
    for (first_position, first) in pools.iter().enumerate() {
        let pivot = match first.other_token(&token_in) {
            Some(pivot) => pivot,
            None => continue,
        };
        if *pivot == token_out {
            // a direct pair, owned by the pass above
            continue;
        }
        for (second_position, second) in pools.iter().enumerate() {
            if second_position == first_position {
                continue;
            }
            if second.involves(pivot) && second.involves(&token_out) {
                match Route::new(
                    vec![first.clone(), second.clone()],
                    input.clone(),
                    output.clone(),
                ) {
                    Ok(route) => routes.push(route),
                    Err(err) => debug!("skipping two-hop candidate: {err}"),
                }
            }
        }
    }

    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use swapcore_types::{FeeTier, NativeCurrency, Token};

    fn token(byte: u8) -> Token {
        let mut bytes = [0u8; 20];
        bytes[19] = byte;
        Token::new(1, bytes.into(), 18)
    }

    fn pool(a: &Token, b: &Token) -> PoolSnapshot {
        PoolSnapshot::new(a.clone(), b.clone(), FeeTier::Medium, 60, U256::ZERO).unwrap()
    }

    #[test]
    fn test_direct_and_pivot_routes_found() {
        let a = token(1);
        let b = token(2);
        let c = token(3);
        let p1 = pool(&a, &b);
        let p2 = pool(&b, &c);
        let p3 = pool(&a, &c);

        let routes = compute_all_routes(
            &Currency::from(a.clone()),
            &Currency::from(c.clone()),
            &[p1.clone(), p2.clone(), p3.clone()],
        );

        // exactly the direct route and the pivot route, direct first
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].pools(), &[p3.clone()]);
        assert_eq!(routes[1].pools(), &[p1, p2]);
    }

    #[test]
    fn test_parallel_pools_yield_two_direct_routes_and_no_two_hop() {
        let a = token(1);
        let b = token(2);
        let p1 = pool(&a, &b);
        let p2 = pool(&a, &b);

        let routes = compute_all_routes(
            &Currency::from(a.clone()),
            &Currency::from(b.clone()),
            &[p1, p2],
        );

        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| r.hops() == 1));
    }

    #[test]
    fn test_pool_never_pairs_with_itself() {
        let a = token(1);
        let b = token(2);
        let c = token(3);
        // only one pool touches the pivot on both sides; it must not be
        // reused as its own second hop
        let routes = compute_all_routes(
            &Currency::from(a.clone()),
            &Currency::from(c.clone()),
            &[pool(&a, &b)],
        );
        assert!(routes.is_empty());
    }

    #[test]
    fn test_empty_pool_set_is_empty_result() {
        let a = token(1);
        let b = token(2);
        let routes = compute_all_routes(&Currency::from(a), &Currency::from(b), &[]);
        assert!(routes.is_empty());
    }

    #[test]
    fn test_duplicate_input_pools_produce_duplicate_routes() {
        let a = token(1);
        let b = token(2);
        let p = pool(&a, &b);
        let routes = compute_all_routes(
            &Currency::from(a.clone()),
            &Currency::from(b.clone()),
            &[p.clone(), p],
        );
        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn test_native_input_routes_through_wrapped_token() {
        let eth = Currency::Native(NativeCurrency::new(1));
        let weth = eth.wrapped().unwrap();
        let usdc = token(9);
        let dai = token(8);
        let direct = pool(&weth, &usdc);
        let leg1 = pool(&weth, &dai);
        let leg2 = pool(&dai, &usdc);

        let routes = compute_all_routes(
            &eth,
            &Currency::from(usdc.clone()),
            &[direct.clone(), leg1.clone(), leg2.clone()],
        );

        assert_eq!(routes.len(), 2);
        // routes keep the original native endpoint
        assert!(routes.iter().all(|r| r.input().is_native()));
        assert_eq!(routes[1].pools(), &[leg1, leg2]);
    }

    #[test]
    fn test_unknown_native_chain_yields_nothing() {
        let unknown = Currency::Native(NativeCurrency::new(999_999));
        let b = token(2);
        let routes = compute_all_routes(&unknown, &Currency::from(b), &[]);
        assert!(routes.is_empty());
    }

    #[test]
    fn test_two_hop_ordering_follows_input_order() {
        let a = token(1);
        let b = token(2);
        let c = token(3);
        let d = token(4);
        // two distinct pivots, input order b then d
        let first_b = pool(&a, &b);
        let first_d = pool(&a, &d);
        let second_b = pool(&b, &c);
        let second_d = pool(&d, &c);
        let pools = [
            first_b.clone(),
            first_d.clone(),
            second_b.clone(),
            second_d.clone(),
        ];

        let routes =
            compute_all_routes(&Currency::from(a.clone()), &Currency::from(c.clone()), &pools);

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].pools(), &[first_b, second_b]);
        assert_eq!(routes[1].pools(), &[first_d, second_d]);
    }

    proptest::proptest! {
        #[test]
        fn prop_routes_are_structurally_valid(
            edges in proptest::collection::vec((0u8..5, 0u8..5), 0..12)
        ) {
            let tokens: Vec<Token> = (1u8..=5).map(token).collect();
            let pools: Vec<PoolSnapshot> = edges
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| pool(&tokens[a as usize], &tokens[b as usize]))
                .collect();

            let input = Currency::from(tokens[0].clone());
            let output = Currency::from(tokens[4].clone());
            let routes = compute_all_routes(&input, &output, &pools);

            for route in &routes {
                proptest::prop_assert!(route.hops() >= 1 && route.hops() <= 2);
                proptest::prop_assert_eq!(route.token_path().first(), Some(&tokens[0]));
                proptest::prop_assert_eq!(route.token_path().last(), Some(&tokens[4]));
                if route.hops() == 2 {
                    // distinct endpoints make value-equal hop pairs impossible
                    proptest::prop_assert_ne!(&route.pools()[0], &route.pools()[1]);
                }
            }
        }
    }

    #[test]
    fn test_determinism_across_calls() {
        let a = token(1);
        let b = token(2);
        let c = token(3);
        let pools = [pool(&a, &b), pool(&b, &c), pool(&a, &c)];
        let input = Currency::from(a);
        let output = Currency::from(c);
        let first = compute_all_routes(&input, &output, &pools);
        let second = compute_all_routes(&input, &output, &pools);
        assert_eq!(first, second);
    }
}

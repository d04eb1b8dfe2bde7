//! Provider-backed aggregation transport
//!
//! Implements the batching capability over any alloy provider: the
//! handshake resolves the Multicall deployment for the connected chain,
//! and each batch becomes a single `eth_call` against the `aggregate`
//! entry point of that deployment.
//!
//! Key properties:
//! - One round trip per batch, plus one round trip for the handshake
//! - Strict aggregation: the whole batch reverts if any call reverts
//! - Results come back positionally aligned with the submitted calls

use alloy::{
    network::TransactionBuilder,
    primitives::{address, Address, Bytes},
    providers::Provider,
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};

use crate::{errors::CallError, traits::AggregationTransport};

// Multicall3 interface - standard and widely supported

mod multicall3 {
    use alloy::sol;

    sol! {
        #[derive(Debug)]
        struct MulticallCall {
            address target;
            bytes callData;
        }

        contract Multicall3 {
            function aggregate(MulticallCall[] calldata calls)
                public payable
                returns (uint256 blockNumber, bytes[] memory returnData);
        }
    }
}

use multicall3::{Multicall3::aggregateCall, MulticallCall};

/// Canonical Multicall3 deployment, shared by most EVM chains
///
/// See <https://github.com/mds1/multicall#multicall3-contract-addresses>
const MULTICALL3_ADDRESS: Address = address!("cA11bde05977b3631167028862bE2a173976CA11");

/// Aggregator deployment for a chain id, if one is known
///
/// Chains not listed here have no verified deployment; batches against
/// them fail the handshake with [`CallError::UnsupportedChain`].
pub fn aggregator_address(chain_id: u64) -> Option<Address> {
    match chain_id {
        // Ethereum mainnet, Sepolia, Holesky
        1 | 11155111 | 17000 => Some(MULTICALL3_ADDRESS),
        // Optimism, BNB Smart Chain, Gnosis, Polygon, Fantom, Base,
        // Arbitrum One, Avalanche C-Chain, Linea, Scroll
        10 | 56 | 100 | 137 | 250 | 8453 | 42161 | 43114 | 59144 | 534352 => {
            Some(MULTICALL3_ADDRESS)
        }
        // Local forks (anvil, hardhat) inherit the mainnet deployment
        31337 => Some(MULTICALL3_ADDRESS),
        // zkSync Era uses its own deployment
        324 => Some(address!("F9cda624FBC7e059355ce98a31693d299FACd963")),
        _ => None,
    }
}

/// Batching-capable view of an alloy provider
///
/// Wraps the same underlying connection the contract handle is bound to.
/// Construction performs no I/O; the wrapped provider is only touched by
/// [`AggregationTransport::discover_aggregator`] and
/// [`AggregationTransport::aggregate`].
#[derive(Debug, Clone)]
pub struct RpcAggregator<P> {
    provider: P,
}

impl<P> RpcAggregator<P> {
    /// Wrap an existing connection
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The wrapped connection
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: Provider> AggregationTransport for RpcAggregator<P> {
    async fn discover_aggregator(&self) -> Result<Address, CallError> {
        let chain_id = self.provider.get_chain_id().await?;
        aggregator_address(chain_id).ok_or(CallError::UnsupportedChain(chain_id))
    }

    async fn aggregate(
        &self,
        aggregator: Address,
        calls: Vec<(Address, Bytes)>,
    ) -> Result<Vec<Bytes>, CallError> {
        let expected = calls.len();
        let calls = calls
            .into_iter()
            .map(|(target, call_data)| MulticallCall {
                target,
                callData: call_data,
            })
            .collect();
        let data = aggregateCall { calls }.abi_encode();
        let request = TransactionRequest::default()
            .with_to(aggregator)
            .with_input(Bytes::from(data));
        let raw = self.provider.call(request).await?;
        let decoded = aggregateCall::abi_decode_returns(&raw)?;
        if decoded.returnData.len() != expected {
            return Err(CallError::ResultCount {
                expected,
                got: decoded.returnData.len(),
            });
        }
        Ok(decoded.returnData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolValue;

    #[test]
    fn test_known_chains_resolve() {
        assert_eq!(aggregator_address(1), Some(MULTICALL3_ADDRESS));
        assert_eq!(aggregator_address(42161), Some(MULTICALL3_ADDRESS));
        assert_eq!(
            aggregator_address(324),
            Some(address!("F9cda624FBC7e059355ce98a31693d299FACd963"))
        );
        assert_eq!(aggregator_address(999_999_999), None);
    }

    #[test]
    fn test_aggregate_calldata_embeds_targets_in_order() {
        let first = address!("0000000000000000000000000000000000000001");
        let second = address!("0000000000000000000000000000000000000002");
        let calls = vec![
            MulticallCall {
                target: first,
                callData: Bytes::from(vec![0xaa, 0xbb]),
            },
            MulticallCall {
                target: second,
                callData: Bytes::from(vec![0xcc]),
            },
        ];
        let encoded = aggregateCall { calls }.abi_encode();

        // aggregate((address,bytes)[]) selector
        assert_eq!(&encoded[..4], &[0x25, 0x2d, 0xba, 0x42]);
        let hex = hex::encode(&encoded);
        let first_at = hex.find(&hex::encode(first.as_slice())).unwrap();
        let second_at = hex.find(&hex::encode(second.as_slice())).unwrap();
        assert!(first_at < second_at);
    }

    #[test]
    fn test_aggregate_return_decoding() {
        let return_data = vec![
            Bytes::from(alloy::primitives::U256::from(7u64).abi_encode()),
            Bytes::new(),
        ];
        let encoded = (alloy::primitives::U256::from(123u64), return_data.clone()).abi_encode();

        let decoded = aggregateCall::abi_decode_returns(&encoded).unwrap();
        assert_eq!(decoded.blockNumber, alloy::primitives::U256::from(123u64));
        assert_eq!(decoded.returnData, return_data);
    }
}

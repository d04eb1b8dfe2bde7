//! Batch caller for aggregated read-only contract calls
//!
//! The caller owns a batching transport, a batching proxy of one target
//! contract, and the one-time handshake state. It translates function
//! names and argument lists into call descriptors, and dispatches lists
//! of descriptors as single aggregate round trips.

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    json_abi::JsonAbi,
    primitives::{Address, Bytes},
    providers::Provider,
};
use tokio::sync::OnceCell;

use crate::{
    contract::BatchContract,
    errors::{CallError, LookupError, MulticallError},
    traits::AggregationTransport,
    transport::RpcAggregator,
    types::{CallDescriptor, CallResult},
};

/// Batches multiple read-only contract calls into single round trips
///
/// Construction is synchronous and performs no network I/O. The first
/// executed batch performs a one-time handshake that discovers the
/// aggregator deployment for the connected network; concurrent batches
/// issued before the handshake resolves all await the same in-flight
/// handshake instead of triggering it again.
///
/// # Example
/// ```rust,no_run
/// use multicall_batch::BatchCaller;
/// use alloy::{dyn_abi::DynSolValue, json_abi::JsonAbi, primitives::address, providers::ProviderBuilder};
///
/// # async fn example() -> anyhow::Result<()> {
/// let provider = ProviderBuilder::new().connect_http("https://eth.llamarpc.com".parse()?);
/// let abi: JsonAbi = serde_json::from_str(
///     r#"[{
///         "type": "function", "name": "balanceOf", "stateMutability": "view",
///         "inputs": [{ "name": "owner", "type": "address" }],
///         "outputs": [{ "name": "", "type": "uint256" }]
///     }]"#,
/// )?;
/// let usdc = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
///
/// let batcher = BatchCaller::new(provider, usdc, &abi)?;
/// let holders = [
///     address!("28C6c06298d514Db089934071355E5743bf21d60"),
///     address!("21a31Ee1afC51d94C2eFcCAa2092aD1028285549"),
/// ];
/// let calls = holders
///     .iter()
///     .map(|holder| batcher.make_call("balanceOf", &[DynSolValue::Address(*holder)]))
///     .collect::<Result<Vec<_>, _>>()?;
///
/// // One RPC round trip; results align with `calls`
/// let balances = batcher.execute_calls(&calls).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BatchCaller<T> {
    transport: T,
    contract: BatchContract,
    aggregator: OnceCell<Address>,
}

impl<P: Provider> BatchCaller<RpcAggregator<P>> {
    /// Create a batch caller for one contract over an existing connection
    ///
    /// `provider` is the connection the contract handle is already bound
    /// to; a batching-capable view of it is derived here. Fails only if
    /// the interface description cannot be converted into the signature
    /// format the batching proxy expects.
    ///
    /// # Arguments
    /// * `provider` - The connection shared with the contract handle
    /// * `address` - Address of the deployed contract
    /// * `abi` - The contract's parsed interface description
    pub fn new(provider: P, address: Address, abi: &JsonAbi) -> Result<Self, MulticallError> {
        Self::with_transport(RpcAggregator::new(provider), address, abi)
    }
}

impl<T: AggregationTransport> BatchCaller<T> {
    /// Create a batch caller over a custom aggregation transport
    ///
    /// Advanced constructor for callers that aggregate through something
    /// other than a plain RPC provider.
    pub fn with_transport(
        transport: T,
        address: Address,
        abi: &JsonAbi,
    ) -> Result<Self, MulticallError> {
        let contract = BatchContract::from_abi(address, abi)?;
        Ok(Self {
            transport,
            contract,
            aggregator: OnceCell::new(),
        })
    }

    /// Read access to the underlying batching proxy
    pub fn contract(&self) -> &BatchContract {
        &self.contract
    }

    /// Build a call descriptor for `function_name` with positional `args`
    ///
    /// Pure function: no I/O, no state changes. The name must match a
    /// function declared by the contract's interface; otherwise
    /// [`LookupError::FunctionNotFound`] is returned and no descriptor is
    /// produced. Argument count and types are checked by the encoder when
    /// the descriptor is executed, not here.
    ///
    /// When the interface declares overloads sharing the name, the first
    /// declared overload is used; overloads cannot be disambiguated by
    /// bare name.
    pub fn make_call(
        &self,
        function_name: &str,
        args: &[DynSolValue],
    ) -> Result<CallDescriptor, LookupError> {
        self.contract.call(function_name, args)
    }

    /// Ensure the one-time handshake has completed
    ///
    /// Concurrent callers coalesce on the same in-flight discovery; the
    /// resolved address is pinned for the lifetime of this instance. A
    /// failed discovery leaves the cell empty so a later batch retries.
    async fn ensure_init(&self) -> Result<Address, CallError> {
        self.aggregator
            .get_or_try_init(|| self.transport.discover_aggregator())
            .await
            .copied()
    }

    /// Execute `calls` as one aggregate request
    ///
    /// Encodes each descriptor's arguments against its declared inputs,
    /// submits the whole list as a single aggregate invocation, and
    /// decodes each sub-result against the descriptor's declared outputs.
    /// Descriptors may target different contracts.
    ///
    /// On success the result list has exactly the same length and order as
    /// `calls`: `result[i]` is the decoded response to `calls[i]`, one
    /// value per declared output parameter (empty for void-returning
    /// functions). Any failure (transport, reverted aggregate call,
    /// encode/decode mismatch) fails the whole batch; there is no retry
    /// and no partial result.
    ///
    /// An empty `calls` list returns an empty result list without touching
    /// the network.
    pub async fn execute_calls(
        &self,
        calls: &[CallDescriptor],
    ) -> Result<Vec<CallResult>, CallError> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let aggregator = self.ensure_init().await?;

        let encoded = calls
            .iter()
            .map(|call| {
                let data = call
                    .function
                    .abi_encode_input(&call.args)
                    .map_err(|source| CallError::Encode {
                        function: call.name().to_string(),
                        source,
                    })?;
                Ok((call.target, Bytes::from(data)))
            })
            .collect::<Result<Vec<_>, CallError>>()?;

        let raw = self.transport.aggregate(aggregator, encoded).await?;

        calls
            .iter()
            .zip(raw)
            .map(|(call, data)| {
                call.function
                    .abi_decode_output(&data)
                    .map_err(|source| CallError::Decode {
                        function: call.name().to_string(),
                        source,
                    })
            })
            .collect()
    }
}

//! # Multicall Batch Caller
//!
//! A library for batching multiple read-only smart-contract calls into a
//! single RPC round trip via the on-chain Multicall aggregator.
//!
//! ## Core Features
//!
//! - **Call batching**
//!   - One `eth_call` round trip for any number of read calls
//!   - Results decoded and returned in input order
//!   - Heterogeneous targets within one batch
//!
//! - **Interface-driven descriptors**
//!   - Name-based signature lookup against a contract's JSON ABI
//!   - Arguments and results flow through alloy's dynamic ABI encoder
//!
//! - **Lazy network handshake**
//!   - Aggregator deployment discovered once per caller, on first use
//!   - Concurrent batches share the in-flight handshake
//!
//! ## Features
//!
//! - `rustls-tls`: Uses rustls as the TLS implementation instead of
//!   native-tls (OpenSSL). This is useful for environments where OpenSSL
//!   is not available or not desired.
//!
//!   Usage example:
//!   ```toml
//!   [dependencies]
//!   multicall-batch = { version = "0.1", default-features = false, features = ["rustls-tls"] }
//!   ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use multicall_batch::BatchCaller;
//! use alloy::{
//!     dyn_abi::DynSolValue,
//!     json_abi::JsonAbi,
//!     primitives::address,
//!     providers::ProviderBuilder,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! // The contract handle: a connected provider, an address and an ABI
//! let provider = ProviderBuilder::new().connect_http("https://eth.llamarpc.com".parse()?);
//! let abi: JsonAbi = serde_json::from_str(
//!     r#"[{
//!         "type": "function", "name": "balanceOf", "stateMutability": "view",
//!         "inputs": [{ "name": "owner", "type": "address" }],
//!         "outputs": [{ "name": "", "type": "uint256" }]
//!     }]"#,
//! )?;
//! let usdc = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
//!
//! // Derive the batching view; no network I/O happens here
//! let batcher = BatchCaller::new(provider, usdc, &abi)?;
//!
//! // Translate name + args into call descriptors
//! let holders = [
//!     address!("28C6c06298d514Db089934071355E5743bf21d60"),
//!     address!("21a31Ee1afC51d94C2eFcCAa2092aD1028285549"),
//! ];
//! let calls = holders
//!     .iter()
//!     .map(|holder| batcher.make_call("balanceOf", &[DynSolValue::Address(*holder)]))
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! // One aggregate round trip; result[i] answers calls[i]
//! let balances = batcher.execute_calls(&calls).await?;
//! for (holder, balance) in holders.iter().zip(&balances) {
//!     println!("{holder}: {balance:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - `caller`: The batch caller owning handshake state and dispatch
//! - `contract`: Batching proxy and name-based signature lookup
//! - `transport`: Provider-backed aggregation over Multicall3
//! - `traits`: The aggregation transport seam
//! - `types`: Call descriptors and decoded results
//! - `errors`: Error types and handling

pub mod caller;
pub mod contract;
pub mod errors;
pub mod traits;
pub mod transport;
pub mod types;

// Re-export only the essential types and functions
pub use caller::BatchCaller;
pub use contract::BatchContract;
pub use errors::{AbiError, CallError, LookupError, MulticallError};
pub use traits::AggregationTransport;
pub use transport::RpcAggregator;
pub use types::{CallDescriptor, CallResult};

//! Error types for batched contract calls
//!
//! This module defines the error taxonomy of the batching wrapper:
//! - Interface conversion errors at construction time
//! - Function lookup errors when building call descriptors
//! - Handshake and aggregate-call errors at execution time
//!
//! Nothing is retried or swallowed here; every failure carries its source
//! and is surfaced to the immediate caller.

use alloy::transports::TransportError;
use thiserror::Error;

/// Top-level error type for the batching wrapper
///
/// Encompasses all possible errors that can occur while constructing a
/// batch caller, building call descriptors, and executing batches,
/// providing a unified error handling interface for users.
#[derive(Debug, Error)]
pub enum MulticallError {
    /// Errors converting the contract interface for the batching proxy
    #[error("Invalid contract interface: {0}")]
    Abi(#[from] AbiError),

    /// Errors resolving a function name against the interface
    #[error("Function lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// Errors during the handshake or the aggregate call
    #[error("Batch call failed: {0}")]
    Call(#[from] CallError),
}

/// Interface conversion errors
///
/// These occur at construction time, when the contract handle's interface
/// description is serialized to its portable JSON form and parsed back into
/// the signature table the batching proxy uses. They indicate a malformed
/// or unsupported interface and are fatal.
#[derive(Debug, Error)]
pub enum AbiError {
    /// Interface description could not be serialized
    #[error("Failed to serialize contract interface: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Serialized interface could not be parsed back
    #[error("Failed to parse contract interface: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Function lookup errors
///
/// Returned when a call descriptor is requested for a function the
/// contract's interface does not declare.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Requested function name is not part of the interface
    #[error("Function `{name}` not found in contract interface")]
    FunctionNotFound {
        /// The name that failed to resolve
        name: String,
    },
}

/// Handshake and aggregate-call errors
///
/// These occur during the two network interactions of the wrapper: the
/// one-time aggregator discovery and each batch submission. Transport
/// failures are propagated with the underlying error attached; the
/// wrapper adds no retry or partial-success semantics.
#[derive(Debug, Error)]
pub enum CallError {
    /// Underlying RPC transport failed or the aggregate call reverted
    #[error("RPC transport error: {0}")]
    Rpc(#[from] TransportError),

    /// Connected network has no known aggregator deployment
    #[error("No known aggregator deployment for chain id {0}")]
    UnsupportedChain(u64),

    /// Argument values could not be encoded against the declared inputs
    #[error("Failed to encode arguments for `{function}`: {source}")]
    Encode {
        /// Function the arguments were encoded for
        function: String,
        /// Underlying encoder error
        #[source]
        source: alloy::dyn_abi::Error,
    },

    /// A sub-result could not be decoded against the declared outputs
    #[error("Failed to decode result of `{function}`: {source}")]
    Decode {
        /// Function the result was decoded for
        function: String,
        /// Underlying decoder error
        #[source]
        source: alloy::dyn_abi::Error,
    },

    /// The aggregate response envelope could not be decoded
    #[error("Failed to decode aggregate response: {0}")]
    Aggregate(#[from] alloy::sol_types::Error),

    /// The aggregator returned a result list of the wrong length
    #[error("Aggregator returned {got} results for {expected} calls")]
    ResultCount {
        /// Number of calls submitted
        expected: usize,
        /// Number of results returned
        got: usize,
    },
}

//! Trait seams between the batch caller and its external collaborators
//!
//! The batching capability is consumed behind a narrow interface so that
//! the caller never depends on how calls are aggregated on the wire. The
//! provider-backed implementation lives in [`crate::transport`]; tests
//! substitute their own implementations to observe handshake and
//! round-trip counts.

use alloy::primitives::{Address, Bytes};

use crate::errors::CallError;

/// A batching-capable view of a network connection
///
/// Implementations own the two network interactions of the wrapper: the
/// one-time discovery of the aggregator deployment for the connected
/// network, and the submission of an ordered list of raw calls as one
/// aggregate invocation. Everything else (signature lookup, argument
/// encoding, result decoding) stays on the caller's side of the seam.
#[allow(async_fn_in_trait)]
pub trait AggregationTransport {
    /// Resolve the aggregator contract address for the connected network
    ///
    /// This is the handshake: one extra round trip, performed at most once
    /// per `BatchCaller` on the success path. A failed discovery is
    /// returned to the caller and may be retried by a later batch.
    async fn discover_aggregator(&self) -> Result<Address, CallError>;

    /// Submit `calls` as one aggregate invocation
    ///
    /// Returns the raw return bytes of each call, positionally aligned
    /// with the input: `result[i]` answers `calls[i]`. Implementations
    /// must fail the whole batch if the aggregate invocation fails; no
    /// partial results are ever returned.
    async fn aggregate(
        &self,
        aggregator: Address,
        calls: Vec<(Address, Bytes)>,
    ) -> Result<Vec<Bytes>, CallError>;
}

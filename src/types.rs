//! Core types for batched contract calls
//!
//! This module defines the value objects that flow through the batching
//! wrapper:
//! - Call descriptors for pending, not-yet-submitted calls
//! - Decoded per-call results

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::{Function, Param},
    primitives::Address,
};

/// One decoded call result: one value per declared output parameter
///
/// A void-returning function decodes to an empty slot, never a missing one.
pub type CallResult = Vec<DynSolValue>;

/// A single pending contract call, not yet submitted
///
/// Bundles the target address, the matched function signature and the
/// positional argument values. Descriptors are constructed once per call
/// request and stay unchanged until they are handed to
/// [`BatchCaller::execute_calls`](crate::BatchCaller::execute_calls);
/// argument arity and types are checked by the encoder at that point, not
/// here.
#[derive(Debug, Clone)]
pub struct CallDescriptor {
    /// Target contract address
    pub target: Address,
    /// The matched function signature (name, ordered input and output types)
    pub function: Function,
    /// Positional argument values for the function's inputs
    pub args: Vec<DynSolValue>,
}

impl CallDescriptor {
    /// The function name this call resolves to
    pub fn name(&self) -> &str {
        &self.function.name
    }

    /// Declared input parameter types
    pub fn inputs(&self) -> &[Param] {
        &self.function.inputs
    }

    /// Declared output parameter types
    ///
    /// Empty for void-returning functions.
    pub fn outputs(&self) -> &[Param] {
        &self.function.outputs
    }
}

//! Batching-capable proxy of one target contract
//!
//! The proxy carries the contract address and the contract's function
//! signatures, re-parsed from the portable JSON interface text. Call
//! descriptors are built here by exact-name signature lookup.

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::{Function, JsonAbi},
    primitives::Address,
};

use crate::{
    errors::{AbiError, LookupError},
    types::CallDescriptor,
};

/// Batching proxy for a deployed contract
///
/// Holds the target address and its own copy of the contract's interface,
/// obtained by round-tripping the handle's interface description through
/// its portable JSON form. Lookup is by exact function name; see
/// [`BatchContract::function`] for how overloads are handled.
#[derive(Debug, Clone)]
pub struct BatchContract {
    address: Address,
    abi: JsonAbi,
}

impl BatchContract {
    /// Build a proxy from a contract address and interface description
    ///
    /// The interface is serialized to its portable JSON form and parsed
    /// back into the proxy's own signature table. A failure in either
    /// direction indicates a malformed or unsupported interface and is
    /// surfaced here, at construction time, rather than deferred to the
    /// first call.
    ///
    /// # Arguments
    /// * `address` - Address of the deployed contract
    /// * `abi` - The contract's parsed interface description
    pub fn from_abi(address: Address, abi: &JsonAbi) -> Result<Self, AbiError> {
        let abi_json = serde_json::to_string(abi).map_err(AbiError::Serialize)?;
        let abi = serde_json::from_str(&abi_json).map_err(AbiError::Parse)?;
        Ok(Self { address, abi })
    }

    /// Target contract address
    pub fn address(&self) -> Address {
        self.address
    }

    /// The proxy's parsed interface description
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Look up a function signature by exact name
    ///
    /// Returns [`LookupError::FunctionNotFound`] when the interface
    /// declares no function with that name.
    ///
    /// Overloads cannot be disambiguated by bare name: when several
    /// functions share `name`, the first declared overload is returned.
    /// The choice is deterministic because declaration order is preserved
    /// through the interface round trip.
    pub fn function(&self, name: &str) -> Result<&Function, LookupError> {
        self.abi
            .functions
            .get(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| LookupError::FunctionNotFound {
                name: name.to_string(),
            })
    }

    /// Build a call descriptor for `name` with positional `args`
    ///
    /// Pure lookup and bundling: no I/O, no state changes. Argument arity
    /// and types are not validated here; the encoder checks them when the
    /// descriptor is executed. A void-returning function yields a
    /// descriptor with an empty output list.
    pub fn call(&self, name: &str, args: &[DynSolValue]) -> Result<CallDescriptor, LookupError> {
        let function = self.function(name)?.clone();
        Ok(CallDescriptor {
            target: self.address,
            function,
            args: args.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, U256};

    const TEST_ABI: &str = r#"[
        {
            "type": "function",
            "name": "balanceOf",
            "stateMutability": "view",
            "inputs": [{ "name": "owner", "type": "address" }],
            "outputs": [{ "name": "", "type": "uint256" }]
        },
        {
            "type": "function",
            "name": "touch",
            "stateMutability": "nonpayable",
            "inputs": [],
            "outputs": []
        },
        {
            "type": "function",
            "name": "getValue",
            "stateMutability": "view",
            "inputs": [],
            "outputs": [{ "name": "", "type": "uint256" }]
        },
        {
            "type": "function",
            "name": "getValue",
            "stateMutability": "view",
            "inputs": [{ "name": "key", "type": "bytes32" }],
            "outputs": [{ "name": "", "type": "bytes32" }]
        }
    ]"#;

    fn test_contract() -> BatchContract {
        let abi: JsonAbi = serde_json::from_str(TEST_ABI).unwrap();
        let address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        BatchContract::from_abi(address, &abi).unwrap()
    }

    #[test]
    fn test_interface_round_trip() {
        let contract = test_contract();
        assert_eq!(
            contract.address(),
            address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")
        );
        // Three distinct names, one of them overloaded
        assert_eq!(contract.abi().functions.len(), 3);
    }

    #[test]
    fn test_lookup_matches_declared_signature() {
        let contract = test_contract();
        let function = contract.function("balanceOf").unwrap();
        assert_eq!(function.name, "balanceOf");
        assert_eq!(function.inputs.len(), 1);
        assert_eq!(function.inputs[0].ty, "address");
        assert_eq!(function.outputs.len(), 1);
        assert_eq!(function.outputs[0].ty, "uint256");
    }

    #[test]
    fn test_descriptor_types_independent_of_args() {
        let contract = test_contract();
        let owner = address!("28C6c06298d514Db089934071355E5743bf21d60");

        // Well-formed args
        let call = contract
            .call("balanceOf", &[DynSolValue::Address(owner)])
            .unwrap();
        assert_eq!(call.inputs()[0].ty, "address");
        assert_eq!(call.outputs()[0].ty, "uint256");
        assert_eq!(call.args.len(), 1);

        // Wrong arity still produces the declared type lists; the encoder
        // rejects the args later
        let call = contract
            .call("balanceOf", &[DynSolValue::Uint(U256::from(1), 256), DynSolValue::Bool(true)])
            .unwrap();
        assert_eq!(call.inputs()[0].ty, "address");
        assert_eq!(call.outputs()[0].ty, "uint256");
        assert_eq!(call.args.len(), 2);
    }

    #[test]
    fn test_unknown_function_is_an_error() {
        let contract = test_contract();
        let err = contract.call("doesNotExist", &[]).unwrap_err();
        assert!(matches!(
            err,
            LookupError::FunctionNotFound { ref name } if name == "doesNotExist"
        ));
    }

    #[test]
    fn test_void_function_has_empty_outputs() {
        let contract = test_contract();
        let call = contract.call("touch", &[]).unwrap();
        assert!(call.outputs().is_empty());
        assert!(call.inputs().is_empty());
    }

    #[test]
    fn test_overload_lookup_is_deterministic() {
        let contract = test_contract();
        // First declared overload wins: getValue() with no inputs
        for _ in 0..10 {
            let function = contract.function("getValue").unwrap();
            assert!(function.inputs.is_empty());
            assert_eq!(function.outputs[0].ty, "uint256");
        }
    }
}

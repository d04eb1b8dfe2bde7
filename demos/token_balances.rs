//! Batched balance queries example
//!
//! This example demonstrates how to fetch ERC20 balances for several
//! holders in a single RPC round trip.

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    primitives::address,
    providers::ProviderBuilder,
};
use anyhow::Result;
use multicall_batch::BatchCaller;

const ETH_RPC_URL: &str = "https://eth.llamarpc.com";

const ERC20_ABI: &str = r#"[
    {
        "type": "function",
        "name": "balanceOf",
        "stateMutability": "view",
        "inputs": [{ "name": "owner", "type": "address" }],
        "outputs": [{ "name": "", "type": "uint256" }]
    }
]"#;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    println!("Testing batched balance queries...");

    let provider = ProviderBuilder::new().connect_http(ETH_RPC_URL.parse()?);
    let abi: JsonAbi = serde_json::from_str(ERC20_ABI)?;

    // USDC on Ethereum mainnet
    let usdc = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    let batcher = BatchCaller::new(provider, usdc, &abi)?;

    let holders = [
        address!("28C6c06298d514Db089934071355E5743bf21d60"), // Binance hot wallet
        address!("21a31Ee1afC51d94C2eFcCAa2092aD1028285549"), // Binance cold wallet
    ];

    println!("Creating balance calls for {} holders...", holders.len());
    let calls = holders
        .iter()
        .map(|holder| batcher.make_call("balanceOf", &[DynSolValue::Address(*holder)]))
        .collect::<Result<Vec<_>, _>>()?;

    println!("Executing {} calls in one round trip...", calls.len());
    let results = batcher.execute_calls(&calls).await?;

    println!("✅ Batch execution completed!");
    for (holder, result) in holders.iter().zip(&results) {
        match result.first() {
            Some(DynSolValue::Uint(balance, _)) => {
                println!("Holder {holder}: balance {balance}");
            }
            other => println!("Holder {holder}: unexpected result {other:?}"),
        }
    }

    Ok(())
}

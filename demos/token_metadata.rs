//! Cross-contract metadata example
//!
//! Call descriptors carry their own target address, so one batch may mix
//! calls against different contracts. This example reads symbol and
//! decimals of two tokens in a single round trip.

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
        "name": "symbol",
        "stateMutability": "view",
        "inputs": [],
        "outputs": [{ "name": "", "type": "string" }]
    },
    {
        "type": "function",
        "name": "decimals",
        "stateMutability": "view",
        "inputs": [],
        "outputs": [{ "name": "", "type": "uint8" }]
    }
]"#;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let provider = ProviderBuilder::new().connect_http(ETH_RPC_URL.parse()?);
    let abi: JsonAbi = serde_json::from_str(ERC20_ABI)?;

    let tokens = [
        address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"), // USDC
        address!("dAC17F958D2ee523a2206206994597C13D831ec7"), // USDT
    ];

    // One proxy per token; their descriptors run through a single batch
    let usdc = BatchCaller::new(provider.clone(), tokens[0], &abi)?;
    let usdt = BatchCaller::new(provider, tokens[1], &abi)?;

    let calls = vec![
        usdc.make_call("symbol", &[])?,
        usdc.make_call("decimals", &[])?,
        usdt.make_call("symbol", &[])?,
        usdt.make_call("decimals", &[])?,
    ];

    println!("Fetching metadata for {} tokens in one round trip...", tokens.len());
    let results = usdc.execute_calls(&calls).await?;

    for (token, chunk) in tokens.iter().zip(results.chunks(2)) {
        let symbol = match chunk[0].first() {
            Some(DynSolValue::String(symbol)) => symbol.clone(),
            other => format!("<unexpected: {other:?}>"),
        };
        let decimals = match chunk[1].first() {
            Some(DynSolValue::Uint(value, _)) => value.to_string(),
            other => format!("<unexpected: {other:?}>"),
        };
        println!("Token {token}: symbol={symbol} decimals={decimals}");
    }

    Ok(())
}

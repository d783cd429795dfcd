use crate::infrastructure::contracts::types::NetworkConfig;

pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

/// Alchemy endpoint for Sepolia
pub fn alchemy_sepolia_url(api_key: &str) -> String {
    format!("https://eth-sepolia.g.alchemy.com/v2/{}", api_key)
}

/// Sepolia testnet configuration
pub fn get_sepolia_config(rpc_url: String) -> NetworkConfig {
    NetworkConfig {
        chain_id: SEPOLIA_CHAIN_ID,
        name: "Sepolia".to_string(),
        rpc_url,
        currency_symbol: "ETH".to_string(),
    }
}

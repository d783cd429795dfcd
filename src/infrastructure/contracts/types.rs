use std::time::Duration;

// ============ CONTRACT CONFIGURATION TYPES ============

/// Network configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Transactions are only signed when the endpoint reports this chain.
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
    pub currency_symbol: String,
}

/// How long and how often to poll for a transaction receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptPolicy {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for ReceiptPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(300),
            poll_interval: Duration::from_millis(4000),
        }
    }
}

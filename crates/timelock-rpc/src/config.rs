use ethereum_types::Address;
use serde::{Deserialize, Serialize};
use timelock_core::{error::Result, utils::hex_to_address, Error};

/// Node usado quando nenhum endpoint é informado
pub const DEFAULT_ENDPOINT: &str = "ws://localhost:8545";

/// Endereço do contrato GovernanceTimelock
pub const GOVERNANCE_TIMELOCK_ADDRESS: &str = "0x21CF9b77F88Adf8F8C98d7E33Fe601DC57bC0893";

/// Variável de ambiente com o endpoint do node
pub const ENDPOINT_ENV: &str = "TIMELOCK_RPC_ENDPOINT";

/// Variável de ambiente com o endereço do contrato
pub const CONTRACT_ENV: &str = "TIMELOCK_CONTRACT_ADDRESS";

/// Configuração do cliente RPC
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// URL do node; `ws://`/`wss://` usa WebSocket, o resto HTTP
    pub endpoint: String,
    /// Contrato timelock consultado
    pub contract_address: Address,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            contract_address: hex_to_address(GOVERNANCE_TIMELOCK_ADDRESS).unwrap_or_default(),
        }
    }
}

impl RpcConfig {
    /// Lê a configuração do ambiente, caindo nos valores padrão
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }

        if let Some(address) = lookup(CONTRACT_ENV).filter(|v| !v.trim().is_empty()) {
            config.contract_address = hex_to_address(address.trim()).ok_or_else(|| {
                Error::ConfigError(format!("{} inválido: {}", CONTRACT_ENV, address))
            })?;
        }

        Ok(config)
    }

    /// Indica se o endpoint usa WebSocket
    pub fn is_websocket(&self) -> bool {
        self.endpoint.starts_with("ws://") || self.endpoint.starts_with("wss://")
    }
}

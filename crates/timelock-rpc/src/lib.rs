/*!
 * Timelock RPC
 *
 * Cliente RPC para consulta do contrato timelock de governança
 */

pub mod abi;
pub mod config;
pub mod logs;

use async_trait::async_trait;
use ethereum_types::Address;
use timelock_core::{error::Result, BlockTag, ChainClient, Error, RawLogEntry};
use tracing::{debug, info};
use web3::{
    transports::{Http, WebSocket},
    types::{BlockNumber, Bytes, CallRequest, FilterBuilder, Log, H160, U64},
    Web3,
};

pub use abi::TimelockAbi;
pub use config::RpcConfig;

/// Enum para diferentes tipos de transporte
pub enum TransportType {
    Http(Web3<Http>),
    WebSocket(Web3<WebSocket>),
}

/// Cliente RPC do contrato timelock
pub struct Web3ChainClient {
    transport: TransportType,
    config: RpcConfig,
    abi: TimelockAbi,
}

impl Web3ChainClient {
    /// Cria um novo cliente RPC HTTP
    pub fn new_http(config: RpcConfig) -> Result<Self> {
        let transport = Http::new(&config.endpoint)
            .map_err(|e| Error::RpcError(format!("Falha ao conectar via HTTP: {}", e)))?;

        Ok(Self {
            transport: TransportType::Http(Web3::new(transport)),
            abi: TimelockAbi::load()?,
            config,
        })
    }

    /// Cria um novo cliente RPC WebSocket
    pub async fn new_websocket(config: RpcConfig) -> Result<Self> {
        let transport = WebSocket::new(&config.endpoint)
            .await
            .map_err(|e| Error::RpcError(format!("Falha ao conectar via WebSocket: {}", e)))?;

        Ok(Self {
            transport: TransportType::WebSocket(Web3::new(transport)),
            abi: TimelockAbi::load()?,
            config,
        })
    }

    /// Cria um novo cliente baseado na URL
    pub async fn new(config: RpcConfig) -> Result<Self> {
        info!(endpoint = %config.endpoint, contract = ?config.contract_address, "conectando ao node");
        if config.is_websocket() {
            Self::new_websocket(config).await
        } else {
            Self::new_http(config)
        }
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Chama uma função view do contrato que retorna `address`
    async fn call_address(&self, method: &str) -> Result<Address> {
        let call_request = CallRequest {
            from: None,
            to: Some(H160::from_slice(self.config.contract_address.as_bytes())),
            gas: None,
            gas_price: None,
            value: None,
            data: Some(Bytes(self.abi.encode_call(method)?)),
            transaction_type: None,
            access_list: None,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
        };

        let result = match &self.transport {
            TransportType::Http(web3) => web3
                .eth()
                .call(call_request, None)
                .await
                .map_err(|e| Error::RpcError(format!("Falha ao chamar {}(): {}", method, e)))?,
            TransportType::WebSocket(web3) => web3
                .eth()
                .call(call_request, None)
                .await
                .map_err(|e| Error::RpcError(format!("Falha ao chamar {}(): {}", method, e)))?,
        };

        self.abi.decode_address(method, &result.0)
    }

    async fn fetch_logs(&self, from_block: u64, to_block: BlockTag) -> Result<Vec<Log>> {
        let to_block = match to_block {
            BlockTag::Number(n) => BlockNumber::Number(U64::from(n)),
            BlockTag::Latest => BlockNumber::Latest,
        };
        let filter = FilterBuilder::default()
            .address(vec![H160::from_slice(self.config.contract_address.as_bytes())])
            .from_block(BlockNumber::Number(U64::from(from_block)))
            .to_block(to_block)
            .build();

        let logs = match &self.transport {
            TransportType::Http(web3) => web3
                .eth()
                .logs(filter)
                .await
                .map_err(|e| Error::RpcError(format!("Falha ao obter logs do contrato: {}", e)))?,
            TransportType::WebSocket(web3) => web3
                .eth()
                .logs(filter)
                .await
                .map_err(|e| Error::RpcError(format!("Falha ao obter logs do contrato: {}", e)))?,
        };

        Ok(logs)
    }
}

#[async_trait]
impl ChainClient for Web3ChainClient {
    fn contract_address(&self) -> Address {
        self.config.contract_address
    }

    async fn admin(&self) -> Result<Address> {
        self.call_address("admin").await
    }

    async fn guardian(&self) -> Result<Address> {
        self.call_address("guardian").await
    }

    async fn get_past_events(&self, from_block: u64, to_block: BlockTag) -> Result<Vec<RawLogEntry>> {
        let raw_logs = self.fetch_logs(from_block, to_block).await?;
        debug!(count = raw_logs.len(), from_block, %to_block, "logs recebidos");

        raw_logs
            .iter()
            .map(|log| logs::to_raw_entry(&self.abi, log))
            .collect()
    }
}

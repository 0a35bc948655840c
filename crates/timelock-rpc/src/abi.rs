use ethereum_types::{Address, H256};
use ethers::abi::{parse_abi, Abi, Event, Token};
use std::collections::HashMap;
use timelock_core::{error::Result, Error};

/// ABI do GovernanceTimelock em formato legível
const GOVERNANCE_TIMELOCK_ABI: &[&str] = &[
    "function admin() external view returns (address)",
    "function guardian() external view returns (address)",
    "function pendingAdmin() external view returns (address)",
    "function delay() external view returns (uint256)",
    "event NewAdmin(address indexed newAdmin)",
    "event NewPendingAdmin(address indexed newPendingAdmin)",
    "event NewDelay(uint256 indexed newDelay)",
    "event CancelTransaction(bytes32 indexed txHash, address indexed target, uint256 value, string signature, bytes data, uint256 eta)",
    "event ExecuteTransaction(bytes32 indexed txHash, address indexed target, uint256 value, string signature, bytes data, uint256 eta)",
    "event QueueTransaction(bytes32 indexed txHash, address indexed target, uint256 value, string signature, bytes data, uint256 eta)",
];

/// ABI do contrato com os eventos indexados pelo tópico
#[derive(Debug, Clone)]
pub struct TimelockAbi {
    abi: Abi,
    events: HashMap<H256, Event>,
}

impl TimelockAbi {
    /// Compila a ABI do GovernanceTimelock
    pub fn load() -> Result<Self> {
        let abi = parse_abi(GOVERNANCE_TIMELOCK_ABI)
            .map_err(|e| Error::AbiError(format!("Falha ao montar ABI do timelock: {}", e)))?;

        let events = abi
            .events()
            .map(|event| (event.signature(), event.clone()))
            .collect();

        Ok(Self { abi, events })
    }

    /// Evento correspondente ao tópico zero de um log
    pub fn event_for(&self, topic0: &H256) -> Option<&Event> {
        self.events.get(topic0)
    }

    /// Calldata de uma função view sem argumentos
    pub fn encode_call(&self, method: &str) -> Result<Vec<u8>> {
        let function = self
            .abi
            .function(method)
            .map_err(|e| Error::AbiError(format!("Função {} ausente na ABI: {}", method, e)))?;

        function
            .encode_input(&[])
            .map_err(|e| Error::AbiError(format!("Falha ao codificar {}: {}", method, e)))
    }

    /// Decodifica o retorno `address` de uma função view
    pub fn decode_address(&self, method: &str, output: &[u8]) -> Result<Address> {
        let function = self
            .abi
            .function(method)
            .map_err(|e| Error::AbiError(format!("Função {} ausente na ABI: {}", method, e)))?;

        let tokens = function
            .decode_output(output)
            .map_err(|e| Error::DecodeError(format!("Retorno de {} inválido: {}", method, e)))?;

        match tokens.into_iter().next() {
            Some(Token::Address(address)) => Ok(address),
            other => Err(Error::InvalidResponse(format!(
                "{} retornou {:?} em vez de address",
                method, other
            ))),
        }
    }
}

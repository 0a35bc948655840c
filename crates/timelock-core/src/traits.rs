/*!
 * Timelock Traits
 *
 * Traits comuns usados em toda a workspace
 */

use async_trait::async_trait;
use crate::error::Result;
use crate::types::{BlockTag, RawLogEntry};
use ethereum_types::Address;

/// Cliente de acesso ao contrato timelock em um node Ethereum
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Endereço do contrato consultado
    fn contract_address(&self) -> Address;

    /// Chama `admin()` no contrato
    async fn admin(&self) -> Result<Address>;

    /// Chama `guardian()` no contrato
    async fn guardian(&self) -> Result<Address>;

    /// Obtém todos os logs emitidos pelo contrato no intervalo, inclusivo
    async fn get_past_events(&self, from_block: u64, to_block: BlockTag) -> Result<Vec<RawLogEntry>>;
}

/*!
 * Timelock Core
 *
 * Tipos e utilitários compartilhados para a workspace do portal de governança
 */

pub mod types;
pub mod traits;
pub mod utils;
pub mod error;

// Re-exportações públicas
pub use error::Error;
pub use ethereum_types::{Address, H256};
pub use traits::ChainClient;
pub use types::*;

/*!
 * Timelock Decoder
 *
 * Transforma a assinatura textual e o payload ABI de uma ação do timelock
 * em uma chamada de função legível
 */

pub mod parameters;
pub mod signature;

pub use parameters::{decode, try_decode};
pub use signature::parse;

/*!
 * Timelock Events
 *
 * Busca o estado administrativo e o histórico completo de eventos do contrato
 * timelock e produz as ações decodificadas, da mais recente para a mais antiga
 */

pub mod ordering;
pub mod pipeline;

pub use ordering::{newest_first, sort_newest_first};
pub use pipeline::{
    decode_event, decode_events, EventPipeline, FetchFailure, GovernanceSnapshot, PortalUpdate,
    Slot, GENESIS_BLOCK,
};

use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, Stream, StreamExt};
use std::fmt;
use timelock_core::{
    error::Result, traits::ChainClient, Address, BlockTag, ContractState, DecodedEvent,
    RawLogEntry,
};
use tracing::{info, warn};

use crate::ordering::sort_newest_first;

/// Primeiro bloco consultado
pub const GENESIS_BLOCK: u64 = 0;

/// Parte do snapshot preenchida por cada consulta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Admin,
    Guardian,
    Events,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Admin => write!(f, "admin"),
            Slot::Guardian => write!(f, "guardian"),
            Slot::Events => write!(f, "events"),
        }
    }
}

/// Resultado de uma das consultas independentes
#[derive(Debug)]
pub enum PortalUpdate {
    Admin(Result<Address>),
    Guardian(Result<Address>),
    Events(Result<Vec<DecodedEvent>>),
}

impl PortalUpdate {
    pub fn slot(&self) -> Slot {
        match self {
            PortalUpdate::Admin(_) => Slot::Admin,
            PortalUpdate::Guardian(_) => Slot::Guardian,
            PortalUpdate::Events(_) => Slot::Events,
        }
    }
}

/// Falha registrada em uma consulta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub slot: Slot,
    pub message: String,
}

/// Estado do contrato e eventos decodificados
#[derive(Debug, Clone, Default)]
pub struct GovernanceSnapshot {
    pub state: ContractState,
    /// `None` enquanto a consulta de logs não resolveu ou se falhou
    pub events: Option<Vec<DecodedEvent>>,
    pub failures: Vec<FetchFailure>,
}

impl GovernanceSnapshot {
    /// Aplica o resultado de uma consulta apenas no seu próprio campo
    pub fn apply(&mut self, update: PortalUpdate) {
        let slot = update.slot();
        let failure = match update {
            PortalUpdate::Admin(result) => result.map(|admin| self.state.admin = Some(admin)).err(),
            PortalUpdate::Guardian(result) => {
                result.map(|guardian| self.state.guardian = Some(guardian)).err()
            }
            PortalUpdate::Events(result) => result.map(|events| self.events = Some(events)).err(),
        };

        if let Some(e) = failure {
            warn!(%slot, "Ocorreu um erro ao consultar o contrato: {}", e);
            self.failures.push(FetchFailure {
                slot,
                message: e.to_string(),
            });
        }
    }

    /// Falha da consulta de um campo, se houver
    pub fn failure(&self, slot: Slot) -> Option<&FetchFailure> {
        self.failures.iter().find(|f| f.slot == slot)
    }
}

/// Decodifica um log já ordenado
pub fn decode_event(raw: RawLogEntry) -> DecodedEvent {
    let parsed = timelock_decoder::parse(raw.signature());
    let parameters = timelock_decoder::decode(&parsed.parameter_types, raw.data());
    DecodedEvent {
        raw,
        parsed,
        parameters,
    }
}

/// Ordena do mais recente para o mais antigo e decodifica cada log.
///
/// Produz exatamente um evento por log, mesmo quando a decodificação falha.
pub fn decode_events(mut entries: Vec<RawLogEntry>) -> Vec<DecodedEvent> {
    sort_newest_first(&mut entries);
    entries.into_iter().map(decode_event).collect()
}

/// Pipeline de consulta do contrato timelock
pub struct EventPipeline<C> {
    client: C,
}

impl<C: ChainClient> EventPipeline<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Busca todos os logs do contrato, do bloco zero ao mais recente
    pub async fn fetch_events(&self) -> Result<Vec<DecodedEvent>> {
        let entries = self
            .client
            .get_past_events(GENESIS_BLOCK, BlockTag::Latest)
            .await?;
        let events = decode_events(entries);

        let failed = events.iter().filter(|e| !e.parameters.is_decoded()).count();
        info!(total = events.len(), failed, "eventos do timelock decodificados");

        Ok(events)
    }

    /// As três consultas em paralelo, entregues conforme terminam
    pub fn updates(&self) -> impl Stream<Item = PortalUpdate> + Send + Unpin + '_ {
        let pending: FuturesUnordered<BoxFuture<'_, PortalUpdate>> = FuturesUnordered::new();
        pending.push(async move { PortalUpdate::Admin(self.client.admin().await) }.boxed());
        pending.push(async move { PortalUpdate::Guardian(self.client.guardian().await) }.boxed());
        pending.push(async move { PortalUpdate::Events(self.fetch_events().await) }.boxed());
        pending
    }

    /// Executa as três consultas e monta o snapshot.
    ///
    /// A falha de uma consulta não impede as demais; o campo correspondente
    /// fica vazio e a falha é registrada em [`GovernanceSnapshot::failures`].
    pub async fn run(&self) -> GovernanceSnapshot {
        let mut snapshot = GovernanceSnapshot::default();
        let mut updates = self.updates();
        while let Some(update) = updates.next().await {
            snapshot.apply(update);
        }
        snapshot
    }
}

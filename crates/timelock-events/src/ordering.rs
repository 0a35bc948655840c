use std::cmp::Ordering;
use timelock_core::RawLogEntry;

/// Bloco decrescente e, no mesmo bloco, id decrescente
pub fn newest_first(a: &RawLogEntry, b: &RawLogEntry) -> Ordering {
    b.block_number
        .cmp(&a.block_number)
        .then_with(|| b.id.cmp(&a.id))
}

/// Ordena os logs do mais recente para o mais antigo
pub fn sort_newest_first(entries: &mut [RawLogEntry]) {
    entries.sort_by(newest_first);
}

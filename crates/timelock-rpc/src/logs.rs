use ethers::abi::{RawLog, Token};
use timelock_core::{
    error::Result, utils::format_token, Error, LogId, RawLogEntry, ReturnValues,
};
use tracing::debug;
use web3::types::Log;

use crate::abi::TimelockAbi;

/// Converte um log do node em [`RawLogEntry`].
///
/// Logs de tópicos fora da ABI continuam presentes, sem nome de evento e sem
/// valores. Apenas a ausência de bloco ou índice é tratada como erro.
pub fn to_raw_entry(abi: &TimelockAbi, log: &Log) -> Result<RawLogEntry> {
    let block_number = log
        .block_number
        .ok_or_else(|| Error::InvalidResponse("log sem número de bloco".to_string()))?
        .as_u64();
    let log_index = log
        .log_index
        .ok_or_else(|| Error::InvalidResponse(format!("log sem índice no bloco {}", block_number)))?
        .low_u64();

    let (event, return_values) = decode_return_values(abi, log);

    Ok(RawLogEntry {
        id: LogId::from(log_index),
        block_number,
        transaction_hash: log.transaction_hash,
        event,
        return_values,
    })
}

fn decode_return_values(abi: &TimelockAbi, log: &Log) -> (Option<String>, ReturnValues) {
    let Some(event) = log.topics.first().and_then(|topic| abi.event_for(topic)) else {
        debug!(topics = ?log.topics, "log com tópico desconhecido");
        return (None, ReturnValues::default());
    };

    let raw = RawLog {
        topics: log.topics.clone(),
        data: log.data.0.clone(),
    };

    let parsed = match event.parse_log(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(event = %event.name, "falha ao decodificar log: {}", e);
            return (Some(event.name.clone()), ReturnValues::default());
        }
    };

    let mut values = ReturnValues::default();
    for param in parsed.params {
        match (param.name.as_str(), &param.value) {
            ("signature", Token::String(signature)) => values.signature = Some(signature.clone()),
            ("data", Token::Bytes(data)) => values.data = data.clone(),
            _ => {}
        }
        values.fields.push((param.name, format_token(&param.value)));
    }

    (Some(event.name.clone()), values)
}

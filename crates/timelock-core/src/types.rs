/*!
 * Timelock Types
 *
 * Tipos comuns usados em toda a workspace
 */

use ethereum_types::{Address, H256};
use ethers::abi::Token;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::utils::format_token;

/// Texto exibido para parâmetros que não puderam ser decodificados
pub const COULD_NOT_DECODE: &str = "Could not decode";

/// Identificador de um log dentro da consulta
///
/// Ids decimais são comparados numericamente, de forma que `"10"` vem depois
/// de `"9"`. Ids não numéricos ficam depois de todos os numéricos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogId(pub String);

impl LogId {
    fn as_number(&self) -> Option<u128> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0.parse().ok()
    }
}

impl From<u64> for LogId {
    fn from(index: u64) -> Self {
        LogId(index.to_string())
    }
}

impl From<&str> for LogId {
    fn from(id: &str) -> Self {
        LogId(id.to_string())
    }
}

impl Ord for LogId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for LogId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Limite superior de uma consulta de logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockTag {
    Number(u64),
    Latest,
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockTag::Number(n) => write!(f, "{}", n),
            BlockTag::Latest => write!(f, "latest"),
        }
    }
}

/// Valores retornados por um evento do contrato
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnValues {
    /// Assinatura textual da ação, `nome(tipo1,tipo2)`
    pub signature: Option<String>,
    /// Parâmetros da ação codificados em ABI
    pub data: Vec<u8>,
    /// Todos os parâmetros nomeados do evento, já formatados
    pub fields: Vec<(String, String)>,
}

impl ReturnValues {
    /// Busca um parâmetro nomeado
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Log bruto emitido pelo contrato
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLogEntry {
    pub id: LogId,
    pub block_number: u64,
    pub transaction_hash: Option<H256>,
    /// Nome do evento; `None` quando o tópico não pertence à ABI do contrato
    pub event: Option<String>,
    pub return_values: ReturnValues,
}

impl RawLogEntry {
    /// Assinatura da ação, vazia quando o evento não carrega uma
    pub fn signature(&self) -> &str {
        self.return_values.signature.as_deref().unwrap_or("")
    }

    /// Payload ABI da ação
    pub fn data(&self) -> &[u8] {
        &self.return_values.data
    }
}

/// Assinatura de função separada em nome e tipos
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedSignature {
    pub function_name: String,
    pub parameter_types: Vec<String>,
}

/// Resultado da decodificação dos parâmetros de uma ação
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedParameters {
    /// Valores na mesma ordem dos tipos
    Decoded(Vec<Token>),
    /// Payload não corresponde aos tipos declarados
    Failed,
}

impl DecodedParameters {
    pub fn is_decoded(&self) -> bool {
        matches!(self, DecodedParameters::Decoded(_))
    }

    /// Valor decodificado na posição `index`
    pub fn get(&self, index: usize) -> Option<&Token> {
        match self {
            DecodedParameters::Decoded(values) => values.get(index),
            DecodedParameters::Failed => None,
        }
    }
}

/// Evento pronto para exibição
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedEvent {
    pub raw: RawLogEntry,
    pub parsed: ParsedSignature,
    pub parameters: DecodedParameters,
}

impl DecodedEvent {
    pub fn block_number(&self) -> u64 {
        self.raw.block_number
    }

    pub fn event_name(&self) -> &str {
        self.raw.event.as_deref().unwrap_or("")
    }

    /// Ação no formato `nome(tipo1, tipo2)`
    pub fn action_label(&self) -> String {
        format!(
            "{}({})",
            self.parsed.function_name,
            self.parsed.parameter_types.join(", ")
        )
    }

    /// Valor exibido para o parâmetro `index`
    pub fn parameter_label(&self, index: usize) -> String {
        self.parameters
            .get(index)
            .map(format_token)
            .unwrap_or_else(|| COULD_NOT_DECODE.to_string())
    }

    /// Pares (tipo, valor) na ordem da assinatura
    pub fn labeled_parameters(&self) -> Vec<(&str, String)> {
        self.parsed
            .parameter_types
            .iter()
            .enumerate()
            .map(|(index, ty)| (ty.as_str(), self.parameter_label(index)))
            .collect()
    }
}

/// Estado administrativo do contrato
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractState {
    pub admin: Option<Address>,
    pub guardian: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_types::U256;

    fn event(parameters: DecodedParameters) -> DecodedEvent {
        DecodedEvent {
            raw: RawLogEntry {
                id: LogId::from(0),
                block_number: 1,
                transaction_hash: None,
                event: Some("QueueTransaction".into()),
                return_values: ReturnValues::default(),
            },
            parsed: ParsedSignature {
                function_name: "setDelay".into(),
                parameter_types: vec!["uint256".into(), "bool".into()],
            },
            parameters,
        }
    }

    #[test]
    fn numeric_ids_compare_as_numbers() {
        assert!(LogId::from("10") > LogId::from("9"));
        assert!(LogId::from("2") > LogId::from("1"));
        assert!(LogId::from("log_a") > LogId::from("99"));
        assert!(LogId::from("log_b") > LogId::from("log_a"));
        assert_ne!(LogId::from("01").cmp(&LogId::from("1")), Ordering::Equal);
    }

    #[test]
    fn action_label_joins_types() {
        let ev = event(DecodedParameters::Failed);
        assert_eq!(ev.action_label(), "setDelay(uint256, bool)");
    }

    #[test]
    fn failed_parameters_use_sentinel_label() {
        let ev = event(DecodedParameters::Failed);
        assert_eq!(ev.parameter_label(0), COULD_NOT_DECODE);
        assert_eq!(ev.parameter_label(1), COULD_NOT_DECODE);
    }

    #[test]
    fn decoded_parameters_pair_with_types() {
        let ev = event(DecodedParameters::Decoded(vec![
            Token::Uint(U256::from(172800u64)),
            Token::Bool(true),
        ]));
        assert_eq!(
            ev.labeled_parameters(),
            vec![("uint256", "172800".to_string()), ("bool", "true".to_string())]
        );
    }

    #[test]
    fn missing_signature_reads_as_empty() {
        let ev = event(DecodedParameters::Failed);
        assert_eq!(ev.raw.signature(), "");
        assert!(ev.raw.data().is_empty());
    }
}

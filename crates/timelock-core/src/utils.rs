/*!
 * Timelock Utils
 *
 * Utilitários comuns usados em toda a workspace
 */

use ethereum_types::Address;
use ethers::abi::Token;
use ethers::types::I256;
use ethers::utils::to_checksum;
use std::str::FromStr;

/// Converte uma string hexadecimal para Address
pub fn hex_to_address(hex: &str) -> Option<Address> {
    let hex_str = hex.strip_prefix("0x").unwrap_or(hex);
    Address::from_str(hex_str).ok()
}

/// Formata um Address com checksum EIP-55
pub fn format_address(address: &Address) -> String {
    to_checksum(address, None)
}

/// Formata bytes como hexadecimal com prefixo `0x`
pub fn format_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Formata um valor ABI decodificado para exibição
pub fn format_token(token: &Token) -> String {
    match token {
        Token::Address(address) => format_address(address),
        Token::Uint(value) => value.to_string(),
        // Int chega em complemento de dois
        Token::Int(value) => I256::from_raw(*value).to_string(),
        Token::Bool(value) => value.to_string(),
        Token::String(value) => value.clone(),
        Token::Bytes(bytes) => format_bytes(bytes),
        Token::FixedBytes(bytes) => format_bytes(bytes),
        Token::Array(items) | Token::FixedArray(items) | Token::Tuple(items) => items
            .iter()
            .map(format_token)
            .collect::<Vec<_>>()
            .join(","),
    }
}

use ethereum_types::{Address, U256};
use ethers::abi::{encode, Token};
use hex::decode as hex_decode;
use timelock_core::{utils::hex_to_address, DecodedParameters};
use timelock_decoder::{decode, parse};

#[test]
fn decode_set_pending_admin_action() {
    let signature = "setPendingAdmin(address)";
    let data = hex_decode("000000000000000000000000da25ee226e534d868f0dd8a459536b03fee9079b").unwrap();

    let parsed = parse(signature);
    let decoded = decode(&parsed.parameter_types, &data);

    let expected: Address = hex_to_address("0xda25ee226e534d868f0dd8a459536b03fee9079b").unwrap();
    assert_eq!(parsed.function_name, "setPendingAdmin");
    assert_eq!(decoded, DecodedParameters::Decoded(vec![Token::Address(expected)]));
}

#[test]
fn decode_set_delay_action() {
    let data = hex_decode("000000000000000000000000000000000000000000000000000000000002a300").unwrap();
    let parsed = parse("setDelay(uint256)");
    let decoded = decode(&parsed.parameter_types, &data);
    assert_eq!(decoded.get(0), Some(&Token::Uint(U256::from(172_800u64))));
}

#[test]
fn decode_dynamic_parameters() {
    let data = encode(&[
        Token::String("harvest".to_string()),
        Token::Array(vec![Token::Uint(U256::from(1u64)), Token::Uint(U256::from(2u64))]),
        Token::Bytes(vec![0xca, 0xfe]),
    ]);
    let parsed = parse("configure(string,uint256[],bytes)");
    let decoded = decode(&parsed.parameter_types, &data);

    assert!(decoded.is_decoded());
    assert_eq!(decoded.get(0), Some(&Token::String("harvest".to_string())));
    assert_eq!(decoded.get(2), Some(&Token::Bytes(vec![0xca, 0xfe])));
}

#[test]
fn mismatched_payload_does_not_abort() {
    // payload de um address, tipos declarados pedem dois valores
    let data = hex_decode("000000000000000000000000da25ee226e534d868f0dd8a459536b03fee9079b").unwrap();
    let parsed = parse("transfer(address,uint256)");
    assert_eq!(decode(&parsed.parameter_types, &data), DecodedParameters::Failed);
}

#[test]
fn zero_argument_action_decodes_empty_payload() {
    let parsed = parse("acceptAdmin()");
    assert!(parsed.parameter_types.is_empty());
    assert_eq!(decode(&parsed.parameter_types, &[]), DecodedParameters::Decoded(vec![]));
}

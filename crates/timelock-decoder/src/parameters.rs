use ethers::abi::{self, param_type::Reader, ParamType, Token};
use timelock_core::{error::Result, DecodedParameters, Error};
use tracing::debug;

/// Decodifica `data` como uma tupla ABI com os tipos informados.
///
/// Qualquer falha vira [`DecodedParameters::Failed`]; o erro só aparece no log.
pub fn decode(parameter_types: &[String], data: &[u8]) -> DecodedParameters {
    match try_decode(parameter_types, data) {
        Ok(values) => DecodedParameters::Decoded(values),
        Err(e) => {
            debug!(types = ?parameter_types, len = data.len(), "parâmetros não decodificados: {}", e);
            DecodedParameters::Failed
        }
    }
}

/// Mesmo que [`decode`], mas devolvendo o erro de decodificação
pub fn try_decode(parameter_types: &[String], data: &[u8]) -> Result<Vec<Token>> {
    let types = parameter_types
        .iter()
        .map(|ty| parse_type(ty))
        .collect::<Result<Vec<ParamType>>>()?;

    abi::decode(&types, data)
        .map_err(|e| Error::DecodeError(format!("payload incompatível com {:?}: {}", parameter_types, e)))
}

fn parse_type(ty: &str) -> Result<ParamType> {
    if ty.is_empty() {
        return Err(Error::AbiError("tipo vazio na assinatura".to_string()));
    }
    let param = Reader::read(ty).map_err(|e| Error::AbiError(format!("tipo inválido '{}': {}", ty, e)))?;

    // Reader lê nomes desconhecidos como uint8; só aceita o que volta com o mesmo nome
    if param.to_string() != canonical(ty) {
        return Err(Error::AbiError(format!("tipo não suportado '{}'", ty)));
    }
    Ok(param)
}

/// Nome do tipo como ethabi o escreve: `uint`/`int` sem tamanho viram 256 bits
fn canonical(ty: &str) -> String {
    let mut out = String::with_capacity(ty.len() + 6);
    for piece in ty.split_inclusive(|c: char| !c.is_ascii_alphanumeric()) {
        let (word, delimiter) = match piece.char_indices().last() {
            Some((i, c)) if !c.is_ascii_alphanumeric() => piece.split_at(i),
            _ => (piece, ""),
        };
        out.push_str(word);
        if word == "uint" || word == "int" {
            out.push_str("256");
        }
        out.push_str(delimiter);
    }
    out
}

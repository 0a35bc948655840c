use timelock_core::ParsedSignature;

/// Separa `nome(tipo1,tipo2,...)` em nome e lista de tipos.
///
/// Nunca falha: assinaturas malformadas são divididas da melhor forma possível
/// e os tipos seguem sem validação para o decodificador de parâmetros.
pub fn parse(signature: &str) -> ParsedSignature {
    let (function_name, parameters) = match signature.find('(') {
        Some(open) => {
            let rest = &signature[open + 1..];
            let parameters = match rest.rfind(')') {
                Some(close) => &rest[..close],
                None => rest,
            };
            (&signature[..open], parameters)
        }
        None => (signature, ""),
    };

    // "" dividido em ',' geraria [""]
    let parameter_types = if parameters.trim().is_empty() {
        Vec::new()
    } else {
        parameters.split(',').map(|ty| ty.trim().to_string()).collect()
    };

    ParsedSignature {
        function_name: function_name.to_string(),
        parameter_types,
    }
}

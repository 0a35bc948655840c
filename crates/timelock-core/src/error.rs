use thiserror::Error;

/// Falhas ao consultar ou decodificar o contrato timelock
#[derive(Error, Debug)]
pub enum Error {
    /// Node inacessível ou chamada JSON-RPC rejeitada
    #[error("Erro de RPC: {0}")]
    RpcError(String),

    /// Node respondeu, mas sem os campos esperados
    #[error("Resposta inválida: {0}")]
    InvalidResponse(String),

    /// Tipo ou fragmento ABI que não pode ser interpretado
    #[error("Erro de ABI: {0}")]
    AbiError(String),

    /// Payload incompatível com os tipos declarados
    #[error("Erro de decodificação: {0}")]
    DecodeError(String),

    #[error("Erro de configuração: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// src/shared/erros.rs

use std::num::IntErrorKind;

use thiserror::Error;

/// Falhas ao executar um comando no store.
///
/// O `Display` de cada variante é o texto anexado ao prefixo das mensagens de erro da API.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Banco(#[from] sqlx::Error),

    #[error("valor nulo na coluna \"{coluna}\" da tabela \"{tabela}\" viola a restrição de não-nulo")]
    ValorNulo {
        tabela: &'static str,
        coluna: &'static str,
    },

    #[error("inserção ou atualização em \"filmes\" viola a chave estrangeira: categoria {0} não existe em \"categorias\"")]
    ChaveEstrangeira(i32),

    #[error("sintaxe de entrada inválida para o tipo date: \"{0}\"")]
    DataInvalida(String),

    #[error("sintaxe de entrada inválida para o tipo integer: \"{0}\"")]
    CodigoInvalido(String),

    #[error("valor \"{0}\" está fora do intervalo para o tipo integer")]
    ForaDoIntervalo(String),

    #[error("store em memória indisponível")]
    Indisponivel,
}

/// Falhas que impedem o servidor de iniciar.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    #[error("falha ao conectar ao banco PostgreSQL: {0}")]
    Conexao(#[from] sqlx::Error),
    #[error("falha ao aplicar as migrações: {0}")]
    Migracao(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converte um código em texto para integer, reportando as falhas como o banco faria.
pub fn parse_codigo(bruto: &str) -> Result<i32, StoreError> {
    bruto.trim().parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            StoreError::ForaDoIntervalo(bruto.to_string())
        }
        _ => StoreError::CodigoInvalido(bruto.to_string()),
    })
}

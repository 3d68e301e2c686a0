// src/config.rs

//! Configuração lida das variáveis de ambiente (e de um `.env`, se existir).

use thiserror::Error;

pub const PORTA_PADRAO: u16 = 3002;
const HOST_PADRAO: &str = "0.0.0.0";
const MAX_CONEXOES_PADRAO: u32 = 5;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("variável de ambiente {0} não definida")]
    Ausente(&'static str),
    #[error("valor inválido para {variavel}: {valor}")]
    Invalida { variavel: &'static str, valor: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub porta: u16,
    pub database_url: String,
    pub max_conexoes: u32,
    pub executar_migracoes: bool,
}

impl Config {
    /// Lê a configuração do ambiente do processo.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|nome| std::env::var(nome).ok())
    }

    /// Lê a configuração a partir de uma função de consulta, para testes sem tocar no ambiente.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| HOST_PADRAO.to_string());
        let porta = parse_ou_padrao(&lookup, "PORT", PORTA_PADRAO)?;
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Ausente("DATABASE_URL"))?;
        let max_conexoes = parse_ou_padrao(&lookup, "DATABASE_MAX_CONNECTIONS", MAX_CONEXOES_PADRAO)?;
        let executar_migracoes = match lookup("RUN_MIGRATIONS") {
            None => true,
            Some(valor) => match valor.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "sim" => true,
                "0" | "false" | "no" | "nao" | "não" => false,
                _ => {
                    return Err(ConfigError::Invalida {
                        variavel: "RUN_MIGRATIONS",
                        valor,
                    })
                }
            },
        };

        Ok(Config {
            host,
            porta,
            database_url,
            max_conexoes,
            executar_migracoes,
        })
    }

    pub fn endereco(&self) -> (String, u16) {
        (self.host.clone(), self.porta)
    }
}

fn parse_ou_padrao<F, T>(lookup: &F, variavel: &'static str, padrao: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(variavel) {
        None => Ok(padrao),
        Some(valor) => valor
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalida { variavel, valor }),
    }
}

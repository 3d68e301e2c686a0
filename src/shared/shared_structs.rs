// src/shared/shared_structs.rs

use actix_web::{web, Either, HttpResponse};
use serde::{Deserialize, Serialize};

use super::erros::{parse_codigo, StoreError};

/// Estrutura genérica para padronizar as respostas da API.
/// 'T' é o tipo do objeto retornado, que pode ser opcional.
#[derive(Serialize)]
pub struct GenericResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")] // Não serializa 'objeto' se for None
    pub objeto: Option<T>,
}

impl<T: Serialize> GenericResponse<T> {
    pub fn sucesso(message: impl Into<String>, objeto: Option<T>) -> Self {
        GenericResponse {
            status: "success".to_string(),
            message: message.into(),
            objeto,
        }
    }
}

impl GenericResponse<()> {
    pub fn erro(message: impl Into<String>) -> Self {
        GenericResponse {
            status: "error".to_string(),
            message: message.into(),
            objeto: None,
        }
    }
}

/// Corpo de requisição aceito tanto em JSON quanto em formulário urlencoded.
pub type Corpo<T> = Either<web::Json<T>, web::Form<T>>;

/// Inteiro vindo do corpo da requisição, aceito como número ou como texto.
/// Segue para o banco como texto; quem converte (ou rejeita) é o banco.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ValorInteiro {
    Numero(i64),
    Decimal(f64),
    Texto(String),
}

impl ValorInteiro {
    pub fn texto(&self) -> String {
        match self {
            ValorInteiro::Numero(n) => n.to_string(),
            ValorInteiro::Decimal(d) => d.to_string(),
            ValorInteiro::Texto(t) => t.clone(),
        }
    }

    /// Conversão com as mesmas regras do cast `::int` do PostgreSQL.
    pub fn para_i32(&self) -> Result<i32, StoreError> {
        parse_codigo(&self.texto())
    }
}

impl From<i32> for ValorInteiro {
    fn from(valor: i32) -> Self {
        ValorInteiro::Numero(valor.into())
    }
}

/// Resposta 400 para falhas do store: prefixo fixo seguido da descrição da causa.
pub fn resposta_erro_store(prefixo: &str, e: &StoreError) -> HttpResponse {
    tracing::error!(error = ?e, "{}", prefixo.trim_end_matches(": "));
    HttpResponse::BadRequest().json(GenericResponse::<()>::erro(format!("{}{}", prefixo, e)))
}

/// Resposta 400 para operações que não encontraram a linha pelo código.
pub fn resposta_nao_encontrado(message: String) -> HttpResponse {
    tracing::debug!("{}", message);
    HttpResponse::BadRequest().json(GenericResponse::<()>::erro(message))
}

/// Código do corpo como aparece nas mensagens; ausente vira "null", como o banco exibiria.
pub fn codigo_exibido(codigo: Option<&ValorInteiro>) -> String {
    codigo.map_or_else(|| "null".to_string(), ValorInteiro::texto)
}

// src/lib.rs

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{error, web, HttpResponse};

pub mod categorias; // Módulo de categorias
pub mod config;
pub mod filmes; // Módulo de filmes
pub mod shared; // Módulo shared
pub mod store; // Acesso ao banco

use shared::shared_structs::GenericResponse;
use store::Store;

// Estado compartilhado: o store é injetado na construção, nunca global.
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        AppState { store }
    }
}

/// Registra as rotas de categorias e filmes e a configuração dos extratores de corpo.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(form_config())
        // Módulo de Categorias
        .service(categorias::categoria_router::buscar_categorias)
        .service(categorias::categoria_router::cadastrar_categoria)
        .service(categorias::categoria_router::atualizar_categoria)
        .service(categorias::categoria_router::buscar_categoria_por_codigo)
        .service(categorias::categoria_router::deletar_categoria)
        // Módulo de Filmes
        .service(filmes::filmes_router::buscar_filmes)
        .service(filmes::filmes_router::cadastrar_filme)
        .service(filmes::filmes_router::atualizar_filme)
        .service(filmes::filmes_router::buscar_filme_por_codigo)
        .service(filmes::filmes_router::deletar_filme);
}

/// CORS liberado para qualquer origem.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"])
        .allow_any_header()
        .max_age(3600)
}

fn corpo_invalido<E>(err: E) -> error::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    tracing::warn!(error = %err, "corpo da requisição rejeitado");
    let resposta = HttpResponse::BadRequest().json(GenericResponse::<()>::erro(format!(
        "Corpo da requisição inválido: {}",
        err
    )));
    error::InternalError::from_response(err, resposta).into()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| corpo_invalido(err))
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| corpo_invalido(err))
}

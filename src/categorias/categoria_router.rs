// src/categorias/categoria_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};

// Importa as structs de categoria
use super::categoria_structs::{CategoriaAlterada, NovaCategoria};

use crate::shared::erros::parse_codigo;
use crate::shared::shared_structs::{
    codigo_exibido, resposta_erro_store, resposta_nao_encontrado, Corpo, GenericResponse,
};

// Importa o AppState da raiz do crate
use crate::AppState;

/// Rota para buscar todas as categorias, ordenadas por código.
/// Responde com o array puro, sem envelope.
#[get("/categorias")]
pub async fn buscar_categorias(data: web::Data<AppState>) -> HttpResponse {
    match data.store.listar_categorias().await {
        Ok(categorias) => HttpResponse::Ok().json(categorias),
        Err(e) => resposta_erro_store("Erro ao consultar as categorias: ", &e),
    }
}

/// Rota para cadastrar uma nova categoria.
#[post("/categorias")]
pub async fn cadastrar_categoria(
    data: web::Data<AppState>,
    item: Corpo<NovaCategoria>,
) -> HttpResponse {
    let item = item.into_inner();

    match data.store.criar_categoria(&item).await {
        Ok(categoria) => {
            tracing::info!(codigo = categoria.codigo, "categoria criada");
            HttpResponse::Ok().json(GenericResponse::sucesso("Categoria criada", Some(categoria)))
        }
        Err(e) => resposta_erro_store("Erro ao inserir a categoria: ", &e),
    }
}

/// Rota para atualizar uma categoria existente, identificada pelo código no corpo.
#[put("/categorias")]
pub async fn atualizar_categoria(
    data: web::Data<AppState>,
    item: Corpo<CategoriaAlterada>,
) -> HttpResponse {
    let item = item.into_inner();

    match data.store.atualizar_categoria(&item).await {
        Ok(Some(categoria)) => {
            HttpResponse::Ok().json(GenericResponse::sucesso("Categoria alterada", Some(categoria)))
        }
        Ok(None) => resposta_nao_encontrado(format!(
            "Nenhum registro com o código {} para ser alterado",
            codigo_exibido(item.codigo.as_ref())
        )),
        Err(e) => resposta_erro_store("Erro ao atualizar a categoria: ", &e),
    }
}

/// Rota para deletar uma categoria.
#[delete("/categorias/{codigo}")]
pub async fn deletar_categoria(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let bruto = path.into_inner();
    let resultado = match parse_codigo(&bruto) {
        Ok(codigo) => data.store.remover_categoria(codigo).await,
        Err(e) => Err(e),
    };

    match resultado {
        Ok(0) => resposta_nao_encontrado(format!(
            "Nenhum registro com o código {} para ser removido",
            bruto
        )),
        Ok(_) => HttpResponse::Ok().json(GenericResponse::<()>::sucesso(
            "Categoria removida com sucesso!",
            None,
        )),
        Err(e) => resposta_erro_store("Erro ao remover a categoria: ", &e),
    }
}

/// Rota para buscar uma categoria por código.
/// Responde com o objeto puro, sem envelope.
#[get("/categorias/{codigo}")]
pub async fn buscar_categoria_por_codigo(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let bruto = path.into_inner();
    let resultado = match parse_codigo(&bruto) {
        Ok(codigo) => data.store.buscar_categoria(codigo).await,
        Err(e) => Err(e),
    };

    match resultado {
        Ok(Some(categoria)) => HttpResponse::Ok().json(categoria),
        Ok(None) => resposta_nao_encontrado(format!(
            "Nenhum registro encontrado com o código {}",
            bruto
        )),
        Err(e) => resposta_erro_store("Erro ao recuperar a categoria: ", &e),
    }
}

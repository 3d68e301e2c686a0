// src/filmes/filmes_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};

// Importa as structs definidas no módulo `filmes_structs` dentro da mesma pasta `filmes`
use super::filmes_structs::{FilmeAlterado, NovoFilme};

use crate::shared::erros::parse_codigo;
use crate::shared::shared_structs::{
    codigo_exibido, resposta_erro_store, resposta_nao_encontrado, Corpo, GenericResponse,
};

use crate::AppState;

/// Rota para buscar todos os filmes.
///
/// Cada filme vem unido à sua categoria (`categoria_nome`) e com a data de estreia
/// no formato YYYY-MM-DD. Filmes cuja categoria não existe mais não aparecem.
#[get("/filmes")]
pub async fn buscar_filmes(data: web::Data<AppState>) -> HttpResponse {
    match data.store.listar_filmes().await {
        Ok(filmes) => HttpResponse::Ok().json(filmes),
        Err(e) => resposta_erro_store("Erro ao consultar os filmes: ", &e),
    }
}

/// Rota para inserir um novo filme no banco de dados.
///
/// Recebe título, sinopse, data de estreia e categoria no corpo da requisição
/// e devolve a linha inserida, com o código gerado pelo banco.
#[post("/filmes")]
pub async fn cadastrar_filme(data: web::Data<AppState>, item: Corpo<NovoFilme>) -> HttpResponse {
    let item = item.into_inner();

    match data.store.criar_filme(&item).await {
        Ok(filme) => {
            tracing::info!(codigo = filme.codigo, categoria = filme.categoria, "filme inserido");
            HttpResponse::Ok().json(GenericResponse::sucesso("Filme inserido", Some(filme)))
        }
        Err(e) => resposta_erro_store("Erro ao inserir o filme: ", &e),
    }
}

/// Rota para atualizar um filme existente, identificado pelo código no corpo.
#[put("/filmes")]
pub async fn atualizar_filme(data: web::Data<AppState>, item: Corpo<FilmeAlterado>) -> HttpResponse {
    let item = item.into_inner();

    match data.store.atualizar_filme(&item).await {
        Ok(Some(filme)) => {
            HttpResponse::Ok().json(GenericResponse::sucesso("Filme alterado", Some(filme)))
        }
        Ok(None) => resposta_nao_encontrado(format!(
            "Nenhum registro com o código {} para ser alterado",
            codigo_exibido(item.codigo.as_ref())
        )),
        Err(e) => resposta_erro_store("Erro ao atualizar o filme: ", &e),
    }
}

/// Rota para deletar um filme.
#[delete("/filmes/{codigo}")]
pub async fn deletar_filme(data: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let bruto = path.into_inner();
    let resultado = match parse_codigo(&bruto) {
        Ok(codigo) => data.store.remover_filme(codigo).await,
        Err(e) => Err(e),
    };

    match resultado {
        Ok(0) => resposta_nao_encontrado(format!(
            "Nenhum registro com o código {} para ser removido",
            bruto
        )),
        Ok(_) => HttpResponse::Ok().json(GenericResponse::<()>::sucesso(
            "Filme removido com sucesso!",
            None,
        )),
        Err(e) => resposta_erro_store("Erro ao remover o filme: ", &e),
    }
}

/// Rota para buscar um filme por código, unido à sua categoria.
#[get("/filmes/{codigo}")]
pub async fn buscar_filme_por_codigo(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let bruto = path.into_inner();
    let resultado = match parse_codigo(&bruto) {
        Ok(codigo) => data.store.buscar_filme(codigo).await,
        Err(e) => Err(e),
    };

    match resultado {
        Ok(Some(filme)) => HttpResponse::Ok().json(filme),
        Ok(None) => resposta_nao_encontrado(format!(
            "Nenhum registro encontrado com o código {}",
            bruto
        )),
        Err(e) => resposta_erro_store("Erro ao recuperar filme: ", &e),
    }
}

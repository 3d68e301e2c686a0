#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use serde_json::Value;

use catalogo_filmes::categorias::categoria_structs::{Categoria, NovaCategoria};
use catalogo_filmes::filmes::filmes_structs::{Filme, NovoFilme};
use catalogo_filmes::store::{MemoryStore, Store};
use catalogo_filmes::AppState;

/// Estado da aplicação sobre um store em memória vazio.
/// O store é devolvido também para preparar dados e inspecionar o resultado.
pub fn estado() -> (web::Data<AppState>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let data = web::Data::new(AppState::new(store.clone()));
    (data, store)
}

pub async fn categoria(store: &MemoryStore, nome: &str) -> Categoria {
    store
        .criar_categoria(&NovaCategoria {
            nome: Some(nome.to_string()),
        })
        .await
        .unwrap()
}

pub async fn filme(store: &MemoryStore, titulo: &str, data_estreia: &str, categoria: i32) -> Filme {
    store
        .criar_filme(&NovoFilme {
            titulo: Some(titulo.to_string()),
            sinopse: Some(format!("Sinopse de {}", titulo)),
            data_estreia: Some(data_estreia.to_string()),
            categoria: Some(categoria.into()),
        })
        .await
        .unwrap()
}

pub fn codigos(lista: &Value) -> Vec<i64> {
    lista
        .as_array()
        .expect("resposta deveria ser um array")
        .iter()
        .map(|item| item["codigo"].as_i64().unwrap())
        .collect()
}

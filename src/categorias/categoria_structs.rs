// src/categorias/categoria_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::shared_structs::ValorInteiro;

/// Estrutura para receber dados de uma nova categoria na requisição POST.
/// Campos ausentes seguem como NULL para o banco.
#[derive(Deserialize, Debug, Default)]
pub struct NovaCategoria {
    pub nome: Option<String>,
}

/// Estrutura para receber os dados de alteração na requisição PUT.
#[derive(Deserialize, Debug, Default)]
pub struct CategoriaAlterada {
    pub codigo: Option<ValorInteiro>,
    pub nome: Option<String>,
}

/// Estrutura que representa uma categoria no banco de dados
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Categoria {
    pub codigo: i32,
    pub nome: String,
}

// src/filmes/filmes_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::shared_structs::ValorInteiro;

/// Estrutura para receber dados do novo filme na requisição POST.
/// `data_estreia` e `categoria` seguem como texto e são convertidas pelo banco.
#[derive(Deserialize, Debug, Default)]
pub struct NovoFilme {
    pub titulo: Option<String>,
    pub sinopse: Option<String>,
    pub data_estreia: Option<String>,
    pub categoria: Option<ValorInteiro>,
}

/// Estrutura para receber os dados de alteração na requisição PUT.
#[derive(Deserialize, Debug, Default)]
pub struct FilmeAlterado {
    pub codigo: Option<ValorInteiro>,
    pub titulo: Option<String>,
    pub sinopse: Option<String>,
    pub data_estreia: Option<String>,
    pub categoria: Option<ValorInteiro>,
}

/// Linha da tabela 'filmes', com a data já formatada como YYYY-MM-DD.
/// Retornada por cadastro e alteração.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Filme {
    pub codigo: i32,
    pub titulo: String,
    pub sinopse: Option<String>,
    pub data_estreia: Option<String>,
    pub categoria: i32,
}

/// Filme unido à sua categoria (inner join), usado nas consultas.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct FilmeDetalhado {
    pub codigo: i32,
    pub titulo: String,
    pub sinopse: Option<String>,
    pub data_estreia: Option<String>,
    pub categoria: i32,
    pub categoria_nome: String,
}

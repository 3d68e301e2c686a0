// src/store/mod.rs

//! Acesso ao banco de dados.
//!
//! Os handlers conhecem apenas o trait [`Store`]; a aplicação recebe a
//! implementação concreta no `AppState`. Cada método corresponde a um único
//! comando SQL, sem transação envolvendo mais de um comando.

use async_trait::async_trait;

use crate::categorias::categoria_structs::{Categoria, CategoriaAlterada, NovaCategoria};
use crate::filmes::filmes_structs::{Filme, FilmeAlterado, FilmeDetalhado, NovoFilme};
use crate::shared::erros::StoreError;

pub mod memoria;
pub mod postgres;

pub use memoria::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Todas as categorias, ordenadas por `codigo`.
    async fn listar_categorias(&self) -> Result<Vec<Categoria>, StoreError>;

    /// Insere e devolve a linha com o `codigo` atribuído pelo banco.
    async fn criar_categoria(&self, nova: &NovaCategoria) -> Result<Categoria, StoreError>;

    /// `None` quando nenhuma linha tem o `codigo` informado.
    async fn atualizar_categoria(
        &self,
        alterada: &CategoriaAlterada,
    ) -> Result<Option<Categoria>, StoreError>;

    /// Número de linhas removidas.
    async fn remover_categoria(&self, codigo: i32) -> Result<u64, StoreError>;

    async fn buscar_categoria(&self, codigo: i32) -> Result<Option<Categoria>, StoreError>;

    /// Filmes unidos à categoria, ordenados por `codigo`.
    /// Filmes sem categoria correspondente não aparecem.
    async fn listar_filmes(&self) -> Result<Vec<FilmeDetalhado>, StoreError>;

    async fn criar_filme(&self, novo: &NovoFilme) -> Result<Filme, StoreError>;

    async fn atualizar_filme(&self, alterado: &FilmeAlterado) -> Result<Option<Filme>, StoreError>;

    async fn remover_filme(&self, codigo: i32) -> Result<u64, StoreError>;

    async fn buscar_filme(&self, codigo: i32) -> Result<Option<FilmeDetalhado>, StoreError>;
}
